//! Scene state machine data.
//!
//! The run is always in exactly one scene; every player input is an index
//! into the current scene's choice list. Transitions that must be resumable
//! (entering battle, the shop, or the inventory) stack the previous scene in
//! `last`; terminal transitions replace it.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::item::ItemDefinition;
use crate::state::actor::ActorState;
use crate::status::StatusKind;

/// What lies behind a door. Fully rolled at population time so choosing a
/// door replays deterministically.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorEvent {
    Monster(ActorState),
    Trap { damage: i32, gold_loss: u32 },
    Reward(RewardSpec),
    Shop,
    Event(EventCard),
}

/// A reward door's payout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RewardSpec {
    Gold { amount: u32 },
    Item(ItemDefinition),
}

/// One selectable door: a teaser shown to the player plus the rolled event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorDescriptor {
    pub hint: String,
    pub event: DoorEvent,
}

/// One purchasable shop entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopOffer {
    pub item: ItemDefinition,
    pub price: u32,
}

/// A narrative event card. Choice outcomes are rolled when the card is
/// drawn, so resolving a choice is pure state application.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventCard {
    pub title: String,
    pub prompt: String,
    pub choices: ArrayVec<EventChoice, { GameConfig::MAX_EVENT_CHOICES }>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventChoice {
    pub label: String,
    /// Gold required to pick this choice; picking without enough gold is
    /// rejected with a log line and the card stays open.
    pub gold_cost: u32,
    pub outcome: EventOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventOutcome {
    pub message: String,
    pub effects: Vec<EventEffect>,
}

/// State mutations a narrative outcome can carry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventEffect {
    Damage { amount: i32 },
    Heal { amount: i32 },
    GainGold { amount: u32 },
    LoseGold { amount: u32 },
    GainItem(ItemDefinition),
    RaiseBaseAttack { amount: i32 },
    ApplyStatus {
        kind: StatusKind,
        duration: u32,
        magnitude: u32,
    },
}

// ===== scenes =====

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorScene {
    /// Empty until the engine populates it from the door oracle.
    pub doors: ArrayVec<DoorDescriptor, { GameConfig::DOORS_PER_SET }>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleScene {
    pub monster: ActorState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopScene {
    /// Empty until the engine populates it from the shop oracle.
    pub offers: ArrayVec<ShopOffer, { GameConfig::SHOP_OFFER_COUNT }>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventScene {
    pub card: EventCard,
}

/// The single scene a run is in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scene {
    Door(DoorScene),
    Battle(BattleScene),
    Shop(ShopScene),
    UseItem,
    Event(EventScene),
    GameOver,
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Door(_) => SceneKind::Door,
            Scene::Battle(_) => SceneKind::Battle,
            Scene::Shop(_) => SceneKind::Shop,
            Scene::UseItem => SceneKind::UseItem,
            Scene::Event(_) => SceneKind::Event,
            Scene::GameOver => SceneKind::GameOver,
        }
    }
}

/// Scene discriminant, for errors and transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneKind {
    Door,
    Battle,
    Shop,
    UseItem,
    Event,
    GameOver,
}

/// Current scene plus the one-deep resume stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneState {
    pub current: Scene,
    /// Scene to return to after a resumable detour, if any.
    pub last: Option<Scene>,
}

impl SceneState {
    /// Starts at an unpopulated door set.
    pub fn new() -> Self {
        Self {
            current: Scene::Door(DoorScene::default()),
            last: None,
        }
    }

    /// Moves to `next`, stacking the current scene for later resume.
    pub fn go_to(&mut self, next: Scene) {
        self.last = Some(std::mem::replace(&mut self.current, next));
    }

    /// Moves to `next` and drops any stacked scene.
    pub fn replace(&mut self, next: Scene) {
        self.current = next;
        self.last = None;
    }

    /// Returns to the stacked scene. False when nothing was stacked.
    pub fn resume(&mut self) -> bool {
        match self.last.take() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_stacks_and_resume_restores() {
        let mut scenes = SceneState::new();
        let monster = ActorState::monster("Slime", 6, 2, 1);
        scenes.go_to(Scene::Battle(BattleScene { monster }));
        assert_eq!(scenes.current.kind(), SceneKind::Battle);
        assert_eq!(scenes.last.as_ref().map(Scene::kind), Some(SceneKind::Door));

        assert!(scenes.resume());
        assert_eq!(scenes.current.kind(), SceneKind::Door);
        assert!(scenes.last.is_none());
        assert!(!scenes.resume());
    }

    #[test]
    fn replace_drops_the_stack() {
        let mut scenes = SceneState::new();
        scenes.go_to(Scene::UseItem);
        scenes.replace(Scene::GameOver);
        assert_eq!(scenes.current.kind(), SceneKind::GameOver);
        assert!(!scenes.resume());
    }
}
