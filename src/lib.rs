//! # Ten-pin bowling notation scorer
//!
//! This crate parses the compact notation commonly used to write down a
//! ten-pin bowling game and computes its final score. The notation must
//! describe a **complete, physically legal** game:
//!
//! - `X`: strike
//! - `/`: spare (fills the rack left by the previous roll)
//! - `-`: miss
//! - `0`..`9`: pins knocked down
//!
//! Letters are case-insensitive and whitespace anywhere is ignored.
//!
//! ## Pipeline
//! 1. [`notation`]: a single pass turns marks into pinfall values, rejecting
//!    impossible racks as soon as they appear.
//! 2. [`score`]: a frame walk adds strike/spare bonuses by looking ahead into
//!    later rolls. The tenth frame absorbs its own bonus rolls; anything left
//!    over is an error, as is any missing roll.
//!
//! ## Errors
//! Every failure is an [`Error`] carrying an [`ErrorKind`] and some context.
//! Nothing is recovered or defaulted.
//!
//! ## Example
//! ```rust
//! use tenpin_score::{calculate_score, ErrorKind, Game};
//!
//! assert_eq!(calculate_score("X7/9-X-88/-6X8/X11").unwrap(), 142);
//! assert_eq!(calculate_score("x x x x x x x x x x x x").unwrap(), 300);
//!
//! let game = Game::parse("9-9-9-9-9-9-9-9-9-9-").unwrap();
//! assert_eq!(game.frames().unwrap()[0].running_total, 9);
//!
//! let e = calculate_score("XXXXXXXX").unwrap_err();
//! assert_eq!(e.kind, ErrorKind::IncompleteGame);
//! ```

use core::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod notation;
pub mod score;

pub use notation::{normalize, parse_rolls, Mark};
pub use score::{frames, score_rolls, Frame, FrameKind};

/// Frames in a game.
pub const MAX_FRAMES: u8 = 10;

/// Pins in a full rack.
pub const PINS: u8 = 10;

/// Parse a game and return its total score.
pub fn calculate_score(game_notation: &str) -> Result<u16, Error> {
    let result = Game::parse(game_notation).and_then(|game| game.score());
    match &result {
        Ok(total) => debug!(total, "scored game"),
        Err(e) => debug!(error = %e, "rejected game"),
    }
    result
}

/// Error categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("Invalid game notation")]
    InvalidInput,
    #[error("Spare '/' must follow a numeric roll (0-9)")]
    IllegalSpare,
    #[error("Frame {0} exceeds 10 pins")]
    FrameOverflow(u8),
    #[error("Incomplete game")]
    IncompleteGame,
    #[error("Trailing data")]
    TrailingData,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.context)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// A parsed game: the marks as written and the pinfall they stand for.
///
/// Parsing only checks rack legality; completeness is checked when the game
/// is scored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    marks: Vec<Mark>,
    rolls: Vec<u8>,
}

impl Game {
    pub fn parse(notation: &str) -> Result<Self, Error> {
        let (marks, rolls) = notation::parse(notation)?;
        Ok(Self { marks, rolls })
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn frames(&self) -> Result<Vec<Frame>, Error> {
        score::frames(&self.rolls)
    }

    pub fn score(&self) -> Result<u16, Error> {
        score::score_rolls(&self.rolls)
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::parse(s)
    }
}

/// Canonical notation: uppercase, no whitespace.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}
