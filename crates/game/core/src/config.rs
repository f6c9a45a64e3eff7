/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Hit points a fresh (or revived) player starts with.
    pub start_hp: i32,
    /// Base attack a fresh player starts with.
    pub start_attack: i32,
    /// Gold a fresh player starts with.
    pub start_gold: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Inventory slots per actor. Acquiring a storable item beyond this is
    /// rejected with a log line.
    pub const MAX_INVENTORY_SLOTS: usize = 10;
    /// Upper bound on live status effects: one slot per [`StatusKind`].
    ///
    /// [`StatusKind`]: crate::status::StatusKind
    pub const MAX_STATUS_EFFECTS: usize = 9;
    /// Doors presented per Door-scene population.
    pub const DOORS_PER_SET: usize = 3;
    /// Offers presented per Shop-scene population.
    pub const SHOP_OFFER_COUNT: usize = 3;
    /// Maximum choices a narrative event may present.
    pub const MAX_EVENT_CHOICES: usize = 3;

    // ===== balance constants =====
    /// Monster strength classes run 1..=MAX_MONSTER_TIER.
    pub const MAX_MONSTER_TIER: u8 = 4;
    /// Flat attack penalty while Weak is active.
    pub const WEAK_ATTACK_PENALTY: i32 = 2;
    /// Poison removes hp / POISON_HP_DIVISOR per battle tick (min 1).
    pub const POISON_HP_DIVISOR: i32 = 10;
    /// Base escape chance from battle, in percent.
    pub const ESCAPE_BASE_PERCENT: i32 = 30;
    /// Escape chance penalty per active Weak/Poison status, in percent.
    pub const ESCAPE_STATUS_PENALTY: i32 = 10;
    /// Base chance for a monster hit to inflict a negative status.
    pub const INFLICT_BASE_PERCENT: i32 = 10;
    /// Additional infliction chance per monster tier above 1.
    pub const INFLICT_PER_TIER_PERCENT: i32 = 10;
    /// Infliction chance cap (reached at tier 4).
    pub const INFLICT_CAP_PERCENT: i32 = 40;
    /// Fraction of incoming damage retained under DamageReduction, percent.
    pub const DAMAGE_REDUCTION_RETAINED_PERCENT: u32 = 70;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_START_HP: i32 = 20;
    pub const DEFAULT_START_ATTACK: i32 = 5;
    pub const DEFAULT_START_GOLD: u32 = 0;

    pub fn new() -> Self {
        Self {
            start_hp: Self::DEFAULT_START_HP,
            start_attack: Self::DEFAULT_START_ATTACK,
            start_gold: Self::DEFAULT_START_GOLD,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
