use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::item::{ItemDefinition, ItemKind};

/// Bounded item storage for one actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    items: ArrayVec<ItemDefinition, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stores an item, handing it back when every slot is taken.
    pub fn store(&mut self, item: ItemDefinition) -> Result<(), ItemDefinition> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes and returns the item at `index`, shifting later slots down.
    pub fn remove(&mut self, index: usize) -> Option<ItemDefinition> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&ItemDefinition> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Indices and definitions of items usable in the given context.
    pub fn usable(&self, kind: ItemKind) -> Vec<(usize, &ItemDefinition)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind == kind)
            .collect()
    }

    /// Removes one revival trigger if the actor holds any.
    pub fn take_revive(&mut self) -> Option<ItemDefinition> {
        let index = self.items.iter().position(ItemDefinition::is_revive)?;
        Some(self.items.remove(index))
    }

    pub fn has_revive(&self) -> bool {
        self.items.iter().any(ItemDefinition::is_revive)
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
