//! Notation lexing and roll-level validation.
//!
//! A game is written as a flat run of marks, one per roll:
//!
//! - `X`: strike (10 pins)
//! - `/`: spare (whatever the previous roll left standing)
//! - `-`: miss (0 pins)
//! - `0`..`9`: explicit pinfall
//!
//! Input is case-insensitive and whitespace is ignored. Parsing is a single
//! left-to-right pass that tracks the current frame and whether the next roll
//! is the first of a rack, so impossible racks (`83`, `X/`) fail as soon as
//! they are seen rather than at scoring time.

use core::fmt;
use tracing::trace;

use crate::{Error, ErrorKind, MAX_FRAMES, PINS};

/// One symbol of game notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Strike,   // X
    Spare,    // /
    Miss,     // -
    Pins(u8), // 0..=9
}

impl Mark {
    fn from_char(c: char) -> Result<Self, Error> {
        match c {
            'X' => Ok(Mark::Strike),
            '/' => Ok(Mark::Spare),
            '-' => Ok(Mark::Miss),
            '0'..='9' => Ok(Mark::Pins(c as u8 - b'0')),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("unrecognized character '{c}'"),
            )),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Strike => f.write_str("X"),
            Mark::Spare => f.write_str("/"),
            Mark::Miss => f.write_str("-"),
            Mark::Pins(n) => write!(f, "{n}"),
        }
    }
}

/// Uppercase the notation and drop every whitespace character.
pub fn normalize(notation: &str) -> String {
    notation
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Parse notation into its pinfall sequence.
pub fn parse_rolls(notation: &str) -> Result<Vec<u8>, Error> {
    parse(notation).map(|(_, rolls)| rolls)
}

/// Parse notation into its marks and the matching pinfall sequence.
pub(crate) fn parse(notation: &str) -> Result<(Vec<Mark>, Vec<u8>), Error> {
    let normalized = normalize(notation);
    if normalized.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "game string cannot be empty",
        ));
    }

    let state = normalized
        .chars()
        .try_fold(RackState::new(), |state, c| state.push(Mark::from_char(c)?))?;

    trace!(
        notation = %normalized,
        rolls = state.rolls.len(),
        frame = state.frame,
        "parsed notation"
    );

    Ok((state.marks, state.rolls))
}

/// Scan state threaded through the fold over the notation.
#[derive(Debug)]
struct RackState {
    /// 1-based, never advanced past the final frame.
    frame: u8,
    /// Set once the final frame has been closed by a two-roll rack; later
    /// rolls are left for the scorer to report as trailing data.
    finished: bool,
    first_roll: bool,
    marks: Vec<Mark>,
    rolls: Vec<u8>,
}

impl RackState {
    fn new() -> Self {
        Self {
            frame: 1,
            finished: false,
            first_roll: true,
            marks: Vec::new(),
            rolls: Vec::new(),
        }
    }

    fn push(mut self, mark: Mark) -> Result<Self, Error> {
        match mark {
            Mark::Strike => {
                self.record(mark, PINS);
                self.end_rack();
            }
            Mark::Spare => {
                // A miss counts as a numeric roll here: `-/` is a spare worth 10.
                let previous = match (self.marks.last(), self.rolls.last()) {
                    (Some(Mark::Strike), _) | (_, None) => {
                        return Err(Error::new(
                            ErrorKind::IllegalSpare,
                            format!("frame {}", self.frame),
                        ));
                    }
                    (_, Some(&pins)) => pins,
                };

                self.record(mark, PINS - previous);
                self.end_rack();
            }
            Mark::Miss => self.open_roll(mark, 0)?,
            Mark::Pins(pins) => self.open_roll(mark, pins)?,
        }

        Ok(self)
    }

    fn open_roll(&mut self, mark: Mark, pins: u8) -> Result<(), Error> {
        if pins >= PINS {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("digit {pins} must be less than {PINS}"),
            ));
        }

        self.check_rack(pins)?;
        self.record(mark, pins);

        self.first_roll = !self.first_roll;
        if self.first_roll {
            self.advance();
        }

        Ok(())
    }

    /// The second roll of a rack can only take what the first left standing.
    /// A roll straight after a strike is never checked.
    fn check_rack(&self, pins: u8) -> Result<(), Error> {
        if self.first_roll || self.finished || self.marks.last() == Some(&Mark::Strike) {
            return Ok(());
        }

        match self.rolls.last() {
            Some(&previous) if previous + pins > PINS => Err(Error::new(
                ErrorKind::FrameOverflow(self.frame),
                format!("{previous} + {pins}"),
            )),
            _ => Ok(()),
        }
    }

    fn record(&mut self, mark: Mark, pins: u8) {
        trace!(frame = self.frame, %mark, pins, "roll");
        self.marks.push(mark);
        self.rolls.push(pins);
    }

    /// A strike or spare ends frames 1-9. In the final frame it is just
    /// another roll and the frame stays open mid-rack.
    fn end_rack(&mut self) {
        if self.frame < MAX_FRAMES {
            self.first_roll = true;
            self.frame += 1;
        } else {
            self.first_roll = false;
        }
    }

    fn advance(&mut self) {
        if self.frame < MAX_FRAMES {
            self.frame += 1;
        } else {
            self.finished = true;
        }
    }
}
