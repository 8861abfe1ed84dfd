//! Player record: name, purse and potion counts.
use rand::Rng;
use thiserror::Error;

use crate::catalog::PotionKind;
use crate::config::GoldRange;

/// Errors raised when a purchase cannot be completed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("needed {required} gold but only {available} available")]
    InsufficientFunds {
        kind: Option<PotionKind>,
        required: u32,
        available: u32,
    },
}

/// Proof of a completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub kind: PotionKind,
    pub price: u32,
    pub gold_left: u32,
    pub owned: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    gold: u32,
    inventory: [u32; PotionKind::COUNT],
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, gold: u32) -> Self {
        Self {
            name: name.into(),
            gold,
            inventory: [0; PotionKind::COUNT],
        }
    }

    /// Create a player whose purse is drawn uniformly from `range` (inclusive).
    ///
    /// The caller owns the generator so runs can be replayed from a seed.
    #[must_use]
    pub fn with_random_gold<R: Rng + ?Sized>(
        name: impl Into<String>,
        range: &GoldRange,
        rng: &mut R,
    ) -> Self {
        let gold = rng.gen_range(range.min..=range.max.max(range.min));
        Self::new(name, gold)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn gold(&self) -> u32 {
        self.gold
    }

    #[must_use]
    pub const fn inventory(&self, kind: PotionKind) -> u32 {
        self.inventory[kind.index()]
    }

    /// Kinds with a non-zero count, in catalog order.
    pub fn owned(&self) -> impl Iterator<Item = (PotionKind, u32)> + '_ {
        PotionKind::ALL
            .into_iter()
            .map(|kind| (kind, self.inventory(kind)))
            .filter(|(_, count)| *count > 0)
    }

    #[must_use]
    pub fn total_potions(&self) -> u32 {
        self.inventory.iter().sum()
    }

    #[must_use]
    pub const fn can_afford(&self, kind: PotionKind) -> bool {
        self.gold >= kind.price()
    }

    /// Take `amount` from the purse.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InsufficientFunds`] and leaves the purse untouched
    /// when `amount` exceeds the balance.
    pub const fn subtract_gold(&mut self, amount: u32) -> Result<(), PurchaseError> {
        match self.gold.checked_sub(amount) {
            Some(left) => {
                self.gold = left;
                Ok(())
            }
            None => Err(PurchaseError::InsufficientFunds {
                kind: None,
                required: amount,
                available: self.gold,
            }),
        }
    }

    pub const fn add_to_inventory(&mut self, kind: PotionKind) {
        let slot = &mut self.inventory[kind.index()];
        *slot = slot.saturating_add(1);
    }

    /// Pay for one potion of `kind` and add it to the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InsufficientFunds`] with no state change when
    /// the player cannot cover the price.
    pub fn buy(&mut self, kind: PotionKind) -> Result<Receipt, PurchaseError> {
        let price = kind.price();
        self.subtract_gold(price).map_err(|err| match err {
            PurchaseError::InsufficientFunds {
                required,
                available,
                ..
            } => PurchaseError::InsufficientFunds {
                kind: Some(kind),
                required,
                available,
            },
        })?;
        self.add_to_inventory(kind);
        Ok(Receipt {
            kind,
            price,
            gold_left: self.gold,
            owned: self.inventory(kind),
        })
    }
}
