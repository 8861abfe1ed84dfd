//! Roscoe's Potion Emporium
//!
//! Core shop logic: the potion catalog, the player record, console input
//! validation and the purchase loop. Nothing here touches the process
//! environment; callers hand in the streams and the random generator.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod input;
pub mod player;
pub mod shop;

use rand::Rng;
use std::io::{BufRead, Write};

// Re-export commonly used types
pub use catalog::{CatalogEntry, PotionKind, catalog, render_catalog};
pub use config::{GoldRange, ShopConfig, ShopConfigError};
pub use constants::{DEFAULT_PLAYER_NAME, DEFAULT_SHOP_NAME, QUIT_SYMBOL};
pub use input::{LineVerdict, Selection, TokenRead, classify_line, read_token, resolve_token};
pub use player::{Player, PurchaseError, Receipt};
pub use shop::{OwnedLine, PurchaseOutcome, Shop, ShopError, ShopPhase, ShopSummary, purchase};

/// Play one full visit: welcome, name, greeting, shopping, summary, farewell.
///
/// `name` skips the name prompt when given. The starting purse is drawn from
/// `config.starting_gold` using `rng`.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn play<R, W, G>(
    config: &ShopConfig,
    name: Option<String>,
    rng: &mut G,
    input: R,
    out: W,
) -> Result<ShopSummary, ShopError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut shop = Shop::new(input, out);
    shop.say(&format!("Welcome to {}!", config.shop_name))?;

    let name = match name {
        Some(name) => name,
        None => shop.ask_name()?.unwrap_or_else(|| {
            log::warn!("no name entered; using {DEFAULT_PLAYER_NAME}");
            DEFAULT_PLAYER_NAME.to_string()
        }),
    };

    let mut player = Player::with_random_gold(name, &config.starting_gold, rng);
    log::info!("{} arrives with {} gold", player.name(), player.gold());

    shop.greet(&player)?;
    let summary = shop.run(&mut player)?;
    shop.print_summary(&summary)?;
    shop.say(&format!("\nThanks for shopping at {}!", config.shop_name))?;
    Ok(summary)
}
