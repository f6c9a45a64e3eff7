//! Monster roster and tier scaling.

use game_core::config::GameConfig;
use game_core::env::RngStream;
use game_core::state::ActorState;

/// One roster entry: name, hit points, attack.
type Template = (&'static str, i32, i32);

const TIER_1: &[Template] = &[
    ("Giant Rat", 8, 2),
    ("Slime", 10, 2),
    ("Bat Swarm", 7, 2),
    ("Kobold", 9, 3),
    ("Goblin", 10, 3),
    ("Skeleton", 12, 3),
];

const TIER_2: &[Template] = &[
    ("Dire Wolf", 14, 5),
    ("Giant Spider", 15, 4),
    ("Hobgoblin", 16, 4),
    ("Ghoul", 17, 5),
    ("Orc", 18, 5),
    ("Animated Armor", 20, 4),
];

const TIER_3: &[Template] = &[
    ("Wraith", 22, 9),
    ("Wight", 24, 8),
    ("Gargoyle", 25, 7),
    ("Ogre", 26, 7),
    ("Minotaur", 28, 8),
    ("Troll", 30, 7),
];

const TIER_4: &[Template] = &[
    ("Lich", 36, 13),
    ("Chimera", 38, 11),
    ("Stone Golem", 40, 10),
    ("Demon Knight", 42, 11),
    ("Young Dragon", 45, 12),
];

/// Strongest tier allowed to spawn at the given round.
pub fn tier_cap(round: u32) -> u8 {
    match round {
        0..=5 => 1,
        6..=10 => 2,
        11..=15 => 3,
        _ => GameConfig::MAX_MONSTER_TIER,
    }
}

fn roster(tier: u8) -> &'static [Template] {
    match tier {
        1 => TIER_1,
        2 => TIER_2,
        3 => TIER_3,
        _ => TIER_4,
    }
}

/// Rolls a monster for the given round: tier within the round's cap, a
/// roster pick, and a gold bounty scaling with tier.
pub fn spawn(stream: &mut RngStream<'_>, round: u32) -> ActorState {
    let tier = stream.range(1, tier_cap(round) as u32) as u8;
    let entries = roster(tier);
    let (name, hp, attack) = entries[stream.pick_index(entries.len())];

    let mut monster = ActorState::monster(name, hp, attack, tier);
    monster.gold = stream.range(2 * tier as u32, 6 * tier as u32);
    monster
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::env::PcgRng;

    #[test]
    fn tier_cap_steps_up_with_rounds() {
        assert_eq!(tier_cap(1), 1);
        assert_eq!(tier_cap(5), 1);
        assert_eq!(tier_cap(6), 2);
        assert_eq!(tier_cap(10), 2);
        assert_eq!(tier_cap(11), 3);
        assert_eq!(tier_cap(16), 4);
        assert_eq!(tier_cap(100), 4);
    }

    #[test]
    fn early_rounds_spawn_only_tier_one() {
        let rng = PcgRng;
        for seed in 0..50 {
            let mut stream = RngStream::new(&rng, seed);
            let monster = spawn(&mut stream, 1);
            assert_eq!(monster.tier, Some(1), "{}", monster.name);
            assert!(monster.is_alive());
            assert!(monster.attack >= 1);
        }
    }

    #[test]
    fn late_rounds_respect_the_cap() {
        let rng = PcgRng;
        for seed in 0..50 {
            let mut stream = RngStream::new(&rng, seed);
            let monster = spawn(&mut stream, 20);
            let tier = monster.tier.unwrap_or(0);
            assert!((1..=4).contains(&tier));
        }
    }
}
