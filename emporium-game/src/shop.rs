//! The purchase loop: show the menu, take a selection, settle the sale.
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::catalog::{PotionKind, render_catalog};
use crate::constants::{MSG_CANNOT_AFFORD, MSG_INVENTORY_HEADING};
use crate::input::{Selection, read_name, read_selection};
use crate::player::{Player, PurchaseError, Receipt};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopPhase {
    #[default]
    Shopping,
    Done,
}

/// Result of acting on one potion selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased(Receipt),
    CannotAfford(PurchaseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedLine {
    pub kind: PotionKind,
    pub count: u32,
}

/// Final tally printed when the player leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSummary {
    pub player: String,
    pub gold: u32,
    pub owned: Vec<OwnedLine>,
    pub purchases: u32,
    pub rejected: u32,
}

impl ShopSummary {
    #[must_use]
    pub fn from_player(player: &Player, purchases: u32, rejected: u32) -> Self {
        Self {
            player: player.name().to_string(),
            gold: player.gold(),
            owned: player
                .owned()
                .map(|(kind, count)| OwnedLine { kind, count })
                .collect(),
            purchases,
            rejected,
        }
    }

    #[must_use]
    pub fn count_of(&self, kind: PotionKind) -> u32 {
        self.owned
            .iter()
            .find(|line| line.kind == kind)
            .map_or(0, |line| line.count)
    }
}

/// Settle a single selection against the player's purse.
pub fn purchase(player: &mut Player, kind: PotionKind) -> PurchaseOutcome {
    match player.buy(kind) {
        Ok(receipt) => {
            log::info!(
                "{} bought {} for {} gold ({} left)",
                player.name(),
                kind,
                receipt.price,
                receipt.gold_left
            );
            PurchaseOutcome::Purchased(receipt)
        }
        Err(err) => {
            log::debug!("{} could not buy {kind}: {err}", player.name());
            PurchaseOutcome::CannotAfford(err)
        }
    }
}

/// A shopping session bound to an input and an output stream.
pub struct Shop<R, W> {
    input: R,
    out: W,
    phase: ShopPhase,
    purchases: u32,
    rejected: u32,
}

impl<R: BufRead, W: Write> Shop<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            phase: ShopPhase::Shopping,
            purchases: 0,
            rejected: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> ShopPhase {
        self.phase
    }

    /// Ask for the player's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn ask_name(&mut self) -> Result<Option<String>, ShopError> {
        Ok(read_name(&mut self.input, &mut self.out)?)
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn greet(&mut self, player: &Player) -> Result<(), ShopError> {
        writeln!(
            self.out,
            "Hello, {}, you have {} gold.",
            player.name(),
            player.gold()
        )?;
        Ok(())
    }

    /// Run one menu round. Returns the outcome, or `None` once the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn step(&mut self, player: &mut Player) -> Result<Option<PurchaseOutcome>, ShopError> {
        if self.phase == ShopPhase::Done {
            return Ok(None);
        }

        render_catalog(&mut self.out)?;
        let kind = match read_selection(&mut self.input, &mut self.out)? {
            Selection::Quit => {
                log::debug!("{} left the shop", player.name());
                self.phase = ShopPhase::Done;
                return Ok(None);
            }
            Selection::Potion(kind) => kind,
        };

        let outcome = purchase(player, kind);
        match outcome {
            PurchaseOutcome::Purchased(receipt) => {
                self.purchases += 1;
                writeln!(
                    self.out,
                    "You purchased a potion of {}.  You have {} gold left.",
                    receipt.kind.name(),
                    receipt.gold_left
                )?;
            }
            PurchaseOutcome::CannotAfford(_) => {
                self.rejected += 1;
                writeln!(self.out, "{MSG_CANNOT_AFFORD}")?;
            }
        }
        Ok(Some(outcome))
    }

    /// Loop until the player quits, then return the final tally.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn run(&mut self, player: &mut Player) -> Result<ShopSummary, ShopError> {
        while self.step(player)?.is_some() {}
        Ok(ShopSummary::from_player(player, self.purchases, self.rejected))
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn print_summary(&mut self, summary: &ShopSummary) -> Result<(), ShopError> {
        writeln!(self.out, "\n{MSG_INVENTORY_HEADING}")?;
        for line in &summary.owned {
            writeln!(self.out, "{}x potion of {}", line.count, line.kind.name())?;
        }
        writeln!(self.out, "You escaped with {} gold remaining.", summary.gold)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a free-form line, used for the welcome and farewell text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> Result<(), ShopError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }
}
