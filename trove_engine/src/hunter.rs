//! Hunter -- the player character in Trove.
//!
//! A `Hunter` owns two pieces of state: a gold balance and a "kit" of held
//! item names. All writes go through the guarded methods here, which keep the
//! balance from dropping below zero and the kit free of duplicates. Shops,
//! game loops, and display layers are separate collaborators that construct a
//! hunter and drive it through these methods.

use std::fmt::Display;

use colored::Colorize;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::style::GameStyle;

/// The player character: a named treasure hunter with a gold balance and a kit.
///
/// Fields stay private so the guarded methods below are the only writers.
/// Read access goes through [`Hunter::name`], [`Hunter::gold`], and
/// [`Hunter::kit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    /// Display name, fixed at creation.
    name: String,
    /// Current gold balance. Never negative; arithmetic saturates.
    gold: u32,
    /// Held item names in acquisition order. Never holds duplicates.
    kit: Vec<String>,
}

impl Default for Hunter {
    fn default() -> Hunter {
        Self {
            name: "The Greenhorn".into(),
            gold: 0,
            kit: Vec::new(),
        }
    }
}

impl Hunter {
    /// Create a hunter with a name, a starting balance, and an empty kit.
    ///
    /// The starting amount is trusted as given; the validation rules apply
    /// only to later mutations.
    pub fn new(name: &str, starting_gold: u32) -> Hunter {
        Self {
            name: name.to_string(),
            gold: starting_gold,
            kit: Vec::new(),
        }
    }

    /// The hunter's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current gold balance.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Read-only view of the kit, in acquisition order.
    pub fn kit(&self) -> &[String] {
        &self.kit
    }

    /// Adjust the gold balance by `modifier`, which may be negative.
    ///
    /// A loss larger than the current balance leaves the hunter at exactly
    /// zero gold; the excess is absorbed, not reported.
    pub fn change_gold(&mut self, modifier: i32) {
        if modifier.is_negative() {
            self.gold = self.gold.saturating_sub(modifier.unsigned_abs());
        } else {
            self.gold = self.gold.saturating_add(modifier.unsigned_abs());
        }
        debug!("{} gold adjusted by {modifier} to {}", self.name, self.gold);
    }

    /// Buy an item from a shop at the given cost.
    ///
    /// The purchase goes through only if the cost is nonzero, the hunter can
    /// cover it, and the item isn't already in the kit. Returns whether the
    /// purchase happened; a blocked purchase changes nothing.
    pub fn buy_item(&mut self, item: &str, cost: u32) -> bool {
        if cost == 0 || self.gold < cost || self.has_item_in_kit(item) {
            info!(
                "blocked purchase of '{item}' at {cost} gold for {} ({} on hand)",
                self.name, self.gold
            );
            return false;
        }
        self.gold -= cost;
        self.add_to_kit(item);
        info!("{} bought '{item}' for {cost} gold ({} left)", self.name, self.gold);
        true
    }

    /// Sell an item back to a shop for the given buy-back price.
    ///
    /// The sale goes through only if the price is nonzero and the item is in
    /// the kit. Returns whether the sale happened; a blocked sale changes
    /// nothing.
    pub fn sell_item(&mut self, item: &str, price: u32) -> bool {
        if price == 0 || !self.has_item_in_kit(item) {
            info!("blocked sale of '{item}' at {price} gold for {}", self.name);
            return false;
        }
        self.gold = self.gold.saturating_add(price);
        self.remove_item_from_kit(item);
        info!("{} sold '{item}' for {price} gold ({} total)", self.name, self.gold);
        true
    }

    /// Returns `true` when the kit holds an item with exactly this name.
    /// Matching is case-sensitive.
    pub fn has_item_in_kit(&self, item: &str) -> bool {
        self.kit.iter().any(|held| held == item)
    }

    /// Remove the kit entry matching `item`, if there is one.
    /// Removing an item the hunter doesn't hold is a no-op, not an error.
    pub fn remove_item_from_kit(&mut self, item: &str) {
        if let Some(idx) = self.kit.iter().position(|held| held == item) {
            self.kit.remove(idx);
        } else {
            debug!("{} has no '{item}' in kit to remove", self.name);
        }
    }

    /// Append `item` to the kit unless it's already held.
    /// Returns whether the kit changed.
    fn add_to_kit(&mut self, item: &str) -> bool {
        if self.has_item_in_kit(item) {
            return false;
        }
        self.kit.push(item.to_string());
        true
    }

    /// Render the kit as a single line: each item name followed by one space,
    /// in acquisition order. An empty kit renders as `""`.
    pub fn inventory(&self) -> String {
        let mut rendered = String::new();
        for item in &self.kit {
            rendered.push_str(item);
            rendered.push(' ');
        }
        rendered
    }

    /// Print a styled status card for the hunter.
    ///
    /// Console display only -- use [`Display`] or [`Hunter::inventory`] where
    /// an unstyled rendering is needed.
    pub fn show(&self) {
        println!("{}", self.name.hunter_style().bold());
        println!("{} gold", self.gold.to_string().gold_style());
        if self.kit.is_empty() {
            println!("{}", "Kit is empty.".italic().dimmed());
        } else {
            for item in &self.kit {
                println!("\t{}", item.item_style());
            }
        }
    }
}

impl Display for Hunter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        if !self.kit.is_empty() {
            write!(f, " and {}", self.inventory())?;
        }
        Ok(())
    }
}
