//! Door set generation.
//!
//! Every set carries exactly one monster door; the rest are drawn from
//! traps, rewards, the shop, and the event deck, then shuffled so the
//! monster isn't always behind door one.

use arrayvec::ArrayVec;

use game_core::config::GameConfig;
use game_core::env::{DoorOracle, EventOracle, ItemOracle, RngStream};
use game_core::state::{DoorDescriptor, DoorEvent, RewardSpec};

use crate::events::EventDeck;
use crate::items::ItemCatalog;
use crate::monsters;

const MONSTER_HINTS: &[&str] = &[
    "Something growls behind it.",
    "Claws scrape against the far side.",
    "A bestial stench seeps through the cracks.",
];

const TRAP_HINTS: &[&str] = &[
    "The floor before it looks disturbed.",
    "A thin wire glints near the hinges.",
    "It is suspiciously quiet.",
];

const REWARD_HINTS: &[&str] = &[
    "Something glitters through the keyhole.",
    "A faint smell of old coins.",
    "The lock is already broken.",
];

const SHOP_HINTS: &[&str] = &[
    "Lantern light and the clink of coins.",
    "A painted sign: OPEN.",
];

const EVENT_HINTS: &[&str] = &[
    "You hear a voice on the other side.",
    "Strange markings cover the frame.",
];

/// Door oracle backed by the static content tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoorGenerator {
    items: ItemCatalog,
    events: EventDeck,
}

impl DoorGenerator {
    pub fn new() -> Self {
        Self {
            items: ItemCatalog::new(),
            events: EventDeck::new(),
        }
    }

    fn hint(stream: &mut RngStream<'_>, pool: &[&str]) -> String {
        pool[stream.pick_index(pool.len())].to_string()
    }

    fn monster_door(&self, stream: &mut RngStream<'_>, round: u32) -> DoorDescriptor {
        DoorDescriptor {
            hint: Self::hint(stream, MONSTER_HINTS),
            event: DoorEvent::Monster(monsters::spawn(stream, round)),
        }
    }

    fn side_door(&self, stream: &mut RngStream<'_>, round: u32) -> DoorDescriptor {
        match stream.roll_d100() {
            1..=30 => DoorDescriptor {
                hint: Self::hint(stream, TRAP_HINTS),
                event: DoorEvent::Trap {
                    damage: stream.range(2, 4 + round / 4) as i32,
                    gold_loss: if stream.chance(50) {
                        stream.range(1, 5)
                    } else {
                        0
                    },
                },
            },
            31..=60 => {
                let spec = if stream.chance(60) {
                    RewardSpec::Gold {
                        amount: stream.range(4, 8 + round),
                    }
                } else {
                    RewardSpec::Item(self.items.random_item(stream))
                };
                DoorDescriptor {
                    hint: Self::hint(stream, REWARD_HINTS),
                    event: DoorEvent::Reward(spec),
                }
            }
            61..=80 => DoorDescriptor {
                hint: Self::hint(stream, SHOP_HINTS),
                event: DoorEvent::Shop,
            },
            _ => DoorDescriptor {
                hint: Self::hint(stream, EVENT_HINTS),
                event: DoorEvent::Event(self.events.draw(stream, round)),
            },
        }
    }
}

impl DoorOracle for DoorGenerator {
    fn door_set(
        &self,
        stream: &mut RngStream<'_>,
        round: u32,
    ) -> ArrayVec<DoorDescriptor, { GameConfig::DOORS_PER_SET }> {
        let mut doors: ArrayVec<DoorDescriptor, { GameConfig::DOORS_PER_SET }> = ArrayVec::new();
        doors.push(self.monster_door(stream, round));
        while !doors.is_full() {
            doors.push(self.side_door(stream, round));
        }
        for i in (1..doors.len()).rev() {
            doors.swap(i, stream.pick_index(i + 1));
        }
        doors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::env::PcgRng;

    #[test]
    fn every_set_has_exactly_one_monster_door() {
        let rng = PcgRng;
        let generator = DoorGenerator::new();
        for seed in 0..60 {
            let mut stream = RngStream::new(&rng, seed);
            let doors = generator.door_set(&mut stream, 3);
            assert_eq!(doors.len(), GameConfig::DOORS_PER_SET);
            let monsters = doors
                .iter()
                .filter(|d| matches!(d.event, DoorEvent::Monster(_)))
                .count();
            assert_eq!(monsters, 1);
            assert!(doors.iter().all(|d| !d.hint.is_empty()));
        }
    }

    #[test]
    fn event_doors_carry_playable_cards() {
        let rng = PcgRng;
        let generator = DoorGenerator::new();
        for seed in 0..60 {
            let mut stream = RngStream::new(&rng, seed);
            for door in generator.door_set(&mut stream, 1) {
                if let DoorEvent::Event(card) = door.event {
                    assert!(!card.choices.is_empty());
                }
            }
        }
    }

    #[test]
    fn sets_replay_with_the_same_stream_seed() {
        let rng = PcgRng;
        let generator = DoorGenerator::new();
        let mut a = RngStream::new(&rng, 42);
        let mut b = RngStream::new(&rng, 42);
        assert_eq!(
            generator.door_set(&mut a, 2),
            generator.door_set(&mut b, 2)
        );
    }
}
