//! Centralized tuning constants and player-facing text for the emporium.
//!
//! Prices live with the catalog table; everything else the shop prints or
//! rolls against is kept here.

// Starting purse -------------------------------------------------------------
pub const MIN_STARTING_GOLD: u32 = 80;
pub const MAX_STARTING_GOLD: u32 = 120;

// Identity -------------------------------------------------------------------
pub const DEFAULT_SHOP_NAME: &str = "Roscoe's potion emporium";
pub const DEFAULT_PLAYER_NAME: &str = "Stranger";

// Input ----------------------------------------------------------------------
pub const QUIT_SYMBOL: char = 'q';

// Prompts and feedback -------------------------------------------------------
pub(crate) const PROMPT_NAME: &str = "Enter your name: ";
pub(crate) const PROMPT_SELECTION: &str =
    "Enter the number of the potion you'd like to buy, or 'q' to quit: ";
pub(crate) const MSG_REPROMPT: &str = "I didn't understand what you said. Try again: ";
pub(crate) const MSG_CANNOT_AFFORD: &str = "You can not afford that.";
pub(crate) const MSG_INVENTORY_HEADING: &str = "Your inventory contains:";
