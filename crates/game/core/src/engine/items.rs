//! Item acquisition and use.

use crate::engine::errors::EngineError;
use crate::env::GameEnv;
use crate::item::{ItemDefinition, ItemEffect, ItemKind, ItemTarget};
use crate::log::MessageLog;
use crate::state::ActorState;
use crate::status::{StatusError, StatusInstance};

/// Stocks the player's pack with the item oracle's starting kit. Runs at
/// session start and again on every restart.
pub fn issue_starter_kit(player: &mut ActorState, env: &GameEnv<'_>) -> Result<(), EngineError> {
    for item in env.items()?.starter_kit() {
        // The kit is far smaller than the pack; a full pack here means
        // broken content, which store() just refuses.
        let _ = player.inventory.store(item);
    }
    Ok(())
}

/// Hands an item to the player. Consumables take effect on the spot;
/// everything else goes into the pack, logging the pickup or the
/// full-inventory rejection. Returns whether the item was kept.
pub fn acquire_item(
    player: &mut ActorState,
    item: ItemDefinition,
    log: &mut MessageLog,
) -> Result<bool, StatusError> {
    if item.kind == ItemKind::Consumable {
        log.push(format!("The {} takes effect at once.", item.name));
        apply_item_effect(player, None, &item, log)?;
        return Ok(false);
    }
    let name = item.name.clone();
    match player.inventory.store(item) {
        Ok(()) => {
            log.push(format!("{} obtains the {}.", player.name, name));
            Ok(true)
        }
        Err(_) => {
            log.push(format!("Your pack is full; the {} is left behind.", name));
            Ok(false)
        }
    }
}

/// Applies a used item's effect. `enemy` is the battle opponent when the
/// item was used in combat; enemy-targeting effects outside combat fizzle
/// with a log line.
pub fn apply_item_effect(
    player: &mut ActorState,
    enemy: Option<&mut ActorState>,
    item: &ItemDefinition,
    log: &mut MessageLog,
) -> Result<(), StatusError> {
    match &item.effect {
        ItemEffect::Heal { amount } => {
            let healed = player.heal(*amount);
            log.push(format!(
                "The {} restores {} HP. ({} HP)",
                item.name, healed, player.hp
            ));
        }
        ItemEffect::RaiseBaseAttack { amount } => {
            player.raise_base_attack(*amount);
            log.push(format!(
                "The {} hones your strikes: attack up by {}.",
                item.name, amount
            ));
        }
        ItemEffect::GainGold { amount } => {
            player.gold += amount;
            log.push(format!(
                "The {} pays out {} gold. ({} gold)",
                item.name, amount, player.gold
            ));
        }
        ItemEffect::ApplyStatus {
            kind,
            duration,
            magnitude,
            target,
        } => {
            let instance = StatusInstance::from_parts(*kind, *duration, *magnitude)?;
            match target {
                ItemTarget::User => {
                    player.apply_status(instance, log);
                }
                ItemTarget::Enemy => match enemy {
                    Some(enemy) => {
                        enemy.apply_status(instance, log);
                    }
                    None => {
                        log.push(format!("There is no one to use the {} on.", item.name));
                    }
                },
            }
        }
        ItemEffect::Revive => {
            // Revival triggers on death, never by active use.
            log.push(format!("The {} stirs faintly, but nothing happens.", item.name));
        }
    }
    Ok(())
}
