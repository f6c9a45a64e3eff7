//! Shop scene: buy one offer or leave.
//!
//! Refusals (short on gold, full pack) keep the stall open; a purchase
//! closes it and the saved door set resumes.

use crate::engine::errors::EngineError;
use crate::engine::items::acquire_item;
use crate::item::ItemKind;
use crate::state::{DoorScene, GameState, Scene};

pub(super) fn handle(state: &mut GameState, index: usize) -> Result<(), EngineError> {
    let bought = {
        let Scene::Shop(shop) = &mut state.scenes.current else {
            return Ok(());
        };
        let offer_count = shop.offers.len();
        if index == offer_count {
            state.log.push("You leave the shop.");
            None
        } else {
            let Some(offer) = shop.offers.get(index) else {
                state.log.push("That's not one of your options.");
                return Ok(());
            };
            let price = offer.price;
            if state.player.gold < price {
                let name = offer.item.name.clone();
                state
                    .log
                    .push(format!("You can't afford the {name} ({price}g)."));
                return Ok(());
            }
            if offer.item.kind != ItemKind::Consumable && state.player.inventory.is_full() {
                state.log.push("Your pack is full.");
                return Ok(());
            }

            let offer = shop.offers.remove(index);
            state.player.gold -= price;
            state.log.push(format!(
                "You buy the {} for {}g. ({} gold left)",
                offer.item.name, price, state.player.gold
            ));
            Some(offer.item)
        }
    };

    if let Some(item) = bought {
        acquire_item(&mut state.player, item, &mut state.log)?;
    }
    if !state.scenes.resume() {
        state.scenes.replace(Scene::Door(DoorScene::default()));
    }
    Ok(())
}
