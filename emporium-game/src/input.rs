//! Console input validation for the shop prompts.
//!
//! A selection line goes through two stages. [`read_token`] extracts the first
//! non-whitespace character and reports whether the line was blank or left
//! unread characters behind. [`resolve_token`] then maps a clean token to a
//! [`Selection`]. Blank lines are skipped silently; every other rejection
//! re-prompts the player.
use std::io::{self, BufRead, Write};

use crate::catalog::PotionKind;
use crate::constants::{MSG_REPROMPT, PROMPT_NAME, PROMPT_SELECTION, QUIT_SYMBOL};

/// What the player asked for at the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Potion(PotionKind),
    Quit,
}

/// Outcome of extracting a single-character token from one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRead {
    Token(char),
    /// Nothing could be extracted from a blank or whitespace-only line.
    Malformed,
    /// A token was read but more characters follow it on the same line.
    TrailingGarbage,
}

/// What the prompt loop should do with one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    Retry,
    Reprompt,
    Select(Selection),
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Extract the first non-whitespace character of `line`.
///
/// Bytes that do not decode still count as characters, so they reach the
/// player as an invalid selection rather than being skipped.
#[must_use]
pub fn read_token(line: &[u8]) -> TokenRead {
    let text = String::from_utf8_lossy(strip_line_ending(line));
    let mut chars = text.trim_start().chars();
    match (chars.next(), chars.next()) {
        (None, _) => TokenRead::Malformed,
        (Some(token), None) => TokenRead::Token(token),
        (Some(_), Some(_)) => TokenRead::TrailingGarbage,
    }
}

/// Map a clean token to a selection, or `None` when it names nothing on sale.
#[must_use]
pub fn resolve_token(token: char) -> Option<Selection> {
    if token == QUIT_SYMBOL {
        return Some(Selection::Quit);
    }
    token
        .to_digit(10)
        .and_then(|digit| usize::try_from(digit).ok())
        .and_then(PotionKind::from_index)
        .map(Selection::Potion)
}

#[must_use]
pub fn classify_line(line: &[u8]) -> LineVerdict {
    match read_token(line) {
        TokenRead::Malformed => LineVerdict::Retry,
        TokenRead::TrailingGarbage => LineVerdict::Reprompt,
        TokenRead::Token(token) => {
            resolve_token(token).map_or(LineVerdict::Reprompt, LineVerdict::Select)
        }
    }
}

/// Prompt until the player picks a potion or quits.
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn read_selection<R, W>(input: &mut R, out: &mut W) -> io::Result<Selection>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{PROMPT_SELECTION}")?;
    out.flush()?;

    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            log::debug!("input closed at selection prompt; treating as quit");
            return Ok(Selection::Quit);
        }
        match classify_line(&line) {
            LineVerdict::Select(selection) => return Ok(selection),
            LineVerdict::Retry => {
                log::trace!("discarding unreadable selection line");
            }
            LineVerdict::Reprompt => {
                log::debug!(
                    "rejected selection input {:?}",
                    String::from_utf8_lossy(strip_line_ending(&line))
                );
                write!(out, "{MSG_REPROMPT}")?;
                out.flush()?;
            }
        }
    }
}

/// Prompt for the player's name, skipping blank lines.
///
/// Returns `None` when input ends before a name is given.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn read_name<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<String>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{PROMPT_NAME}")?;
    out.flush()?;

    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(strip_line_ending(&line));
        let name = text.trim_start();
        if !name.is_empty() {
            return Ok(Some(name.to_string()));
        }
    }
}
