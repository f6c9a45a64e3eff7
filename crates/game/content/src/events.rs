//! Narrative event deck.
//!
//! Each draw picks one of the cards below and rolls every chancy outcome on
//! the spot, so the card the player sees is already fully decided.

use arrayvec::ArrayVec;

use game_core::env::{EventOracle, ItemOracle, RngStream};
use game_core::state::{EventCard, EventChoice, EventEffect, EventOutcome};
use game_core::status::StatusKind;

use crate::items::ItemCatalog;

const CARD_COUNT: usize = 7;

/// Static deck of narrative events.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventDeck {
    items: ItemCatalog,
}

impl EventDeck {
    pub fn new() -> Self {
        Self {
            items: ItemCatalog::new(),
        }
    }

    fn injured_stranger(&self, stream: &mut RngStream<'_>) -> EventCard {
        let outcome = if stream.chance(70) {
            EventOutcome {
                message: "The traveler presses a gift into your hands before limping off.".into(),
                effects: vec![EventEffect::GainItem(self.items.random_item(stream))],
            }
        } else {
            EventOutcome {
                message: "The moment your back is turned, the 'traveler' cuts your purse.".into(),
                effects: vec![EventEffect::LoseGold { amount: 5 }],
            }
        };
        card(
            "Injured Stranger",
            "A wounded traveler slumps against the wall, begging for aid.",
            [
                choice("Share your supplies", 5, outcome),
                walk_away("You step around the stranger and move on."),
            ],
        )
    }

    fn smuggler(&self, stream: &mut RngStream<'_>) -> EventCard {
        let outcome = if stream.chance(60) {
            EventOutcome {
                message: "The crate holds real contraband. A good haul.".into(),
                effects: vec![
                    EventEffect::GainItem(self.items.random_item(stream)),
                    EventEffect::GainGold { amount: 4 },
                ],
            }
        } else {
            EventOutcome {
                message: "The crate is full of rocks. The smuggler is long gone.".into(),
                effects: vec![],
            }
        };
        card(
            "Smuggler",
            "A shifty smuggler offers you an unmarked crate, no questions asked.",
            [
                choice("Buy the crate", 10, outcome),
                walk_away("You wave the smuggler off."),
            ],
        )
    }

    fn ancient_shrine(&self, stream: &mut RngStream<'_>) -> EventCard {
        let pray = if stream.chance(50) {
            EventOutcome {
                message: "Warm light settles over you. The shrine accepts your prayer.".into(),
                effects: vec![EventEffect::ApplyStatus {
                    kind: StatusKind::Immune,
                    duration: 3,
                    magnitude: 0,
                }],
            }
        } else {
            EventOutcome {
                message: "The shrine flares angrily and scorches you.".into(),
                effects: vec![EventEffect::Damage { amount: 3 }],
            }
        };
        card(
            "Ancient Shrine",
            "An ancient shrine hums with power you don't understand.",
            [
                choice("Kneel and pray", 0, pray),
                choice(
                    "Pry the offerings loose",
                    0,
                    EventOutcome {
                        message: "You pocket the offerings. Something watches you leave.".into(),
                        effects: vec![
                            EventEffect::GainGold { amount: 8 },
                            EventEffect::ApplyStatus {
                                kind: StatusKind::Weak,
                                duration: 3,
                                magnitude: 0,
                            },
                        ],
                    },
                ),
                walk_away("You leave the shrine untouched."),
            ],
        )
    }

    fn gambler(&self, stream: &mut RngStream<'_>) -> EventCard {
        let outcome = if stream.chance(50) {
            EventOutcome {
                message: "The dice come up double sixes. The gambler pays, scowling.".into(),
                effects: vec![EventEffect::GainGold { amount: 12 }],
            }
        } else {
            EventOutcome {
                message: "Snake eyes. The gambler sweeps up your coins.".into(),
                effects: vec![],
            }
        };
        card(
            "Gambler",
            "A grinning gambler rattles a cup of dice at you.",
            [
                choice("Take the bet", 5, outcome),
                walk_away("You keep your coin and your dignity."),
            ],
        )
    }

    fn lost_child(&self, _stream: &mut RngStream<'_>) -> EventCard {
        card(
            "Lost Child",
            "A child sits crying in the corridor, hopelessly lost.",
            [
                choice(
                    "Guide them to the stairs",
                    0,
                    EventOutcome {
                        message: "The detour does you good, and a relieved parent rewards you."
                            .into(),
                        effects: vec![
                            EventEffect::Heal { amount: 3 },
                            EventEffect::GainGold { amount: 5 },
                        ],
                    },
                ),
                walk_away("You harden your heart and press on."),
            ],
        )
    }

    fn cursed_chest(&self, stream: &mut RngStream<'_>) -> EventCard {
        let outcome = if stream.chance(50) {
            EventOutcome {
                message: "The chains fall away from honest treasure.".into(),
                effects: vec![
                    EventEffect::GainItem(self.items.random_item(stream)),
                    EventEffect::GainGold { amount: 6 },
                ],
            }
        } else {
            EventOutcome {
                message: "Venomous needles burst from the lock!".into(),
                effects: vec![
                    EventEffect::Damage { amount: 4 },
                    EventEffect::ApplyStatus {
                        kind: StatusKind::Poison,
                        duration: 2,
                        magnitude: 0,
                    },
                ],
            }
        };
        card(
            "Cursed Chest",
            "A chest wrapped in chains whispers your name.",
            [
                choice("Break the chains", 0, outcome),
                walk_away("Some whispers are best ignored."),
            ],
        )
    }

    fn wise_sage(&self, _stream: &mut RngStream<'_>) -> EventCard {
        card(
            "Wise Sage",
            "A sage offers to sharpen your technique, for a fee.",
            [
                choice(
                    "Train with the sage",
                    8,
                    EventOutcome {
                        message: "Hours of drills leave your strikes noticeably heavier.".into(),
                        effects: vec![EventEffect::RaiseBaseAttack { amount: 1 }],
                    },
                ),
                walk_away("You decline the lesson."),
            ],
        )
    }
}

impl EventOracle for EventDeck {
    fn draw(&self, stream: &mut RngStream<'_>, _round: u32) -> EventCard {
        match stream.pick_index(CARD_COUNT) {
            0 => self.injured_stranger(stream),
            1 => self.smuggler(stream),
            2 => self.ancient_shrine(stream),
            3 => self.gambler(stream),
            4 => self.lost_child(stream),
            5 => self.cursed_chest(stream),
            _ => self.wise_sage(stream),
        }
    }
}

fn card<const N: usize>(
    title: &str,
    prompt: &str,
    choices: [EventChoice; N],
) -> EventCard {
    EventCard {
        title: title.into(),
        prompt: prompt.into(),
        choices: ArrayVec::from_iter(choices),
    }
}

fn choice(label: &str, gold_cost: u32, outcome: EventOutcome) -> EventChoice {
    EventChoice {
        label: label.into(),
        gold_cost,
        outcome,
    }
}

fn walk_away(message: &str) -> EventChoice {
    choice(
        "Walk away",
        0,
        EventOutcome {
            message: message.into(),
            effects: vec![],
        },
    )
}
