//! Frame walk over a pinfall sequence.

use core::fmt;
use tracing::trace;

use crate::{Error, ErrorKind, MAX_FRAMES, PINS};

/// How a frame was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Strike => f.write_str("strike"),
            FrameKind::Spare => f.write_str("spare"),
            FrameKind::Open => f.write_str("open"),
        }
    }
}

/// A scored frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub number: u8,
    pub kind: FrameKind,
    /// Rolls bowled in this frame, including any final-frame bonus rolls.
    pub rolls: Vec<u8>,
    /// Pins plus strike/spare bonus.
    pub score: u16,
    pub running_total: u16,
}

/// Score every frame of a complete game.
///
/// Strike and spare bonuses look ahead into the following rolls; a missing
/// bonus roll is an incomplete game, never zero. Rolls left over after the
/// tenth frame are rejected.
pub fn frames(rolls: &[u8]) -> Result<Vec<Frame>, Error> {
    let mut frames = Vec::with_capacity(usize::from(MAX_FRAMES));
    let mut cursor = 0;
    let mut running_total = 0u16;

    for number in 1..=MAX_FRAMES {
        let last = number == MAX_FRAMES;
        let first = roll_at(rolls, cursor, "missing required rolls")?;

        let (kind, score, width) = if first == PINS {
            let bonus = bonus_at(rolls, cursor + 1)? + bonus_at(rolls, cursor + 2)?;
            (FrameKind::Strike, u16::from(PINS) + bonus, if last { 3 } else { 1 })
        } else if is_spare(rolls, cursor) {
            let bonus = bonus_at(rolls, cursor + 2)?;
            (FrameKind::Spare, u16::from(PINS) + bonus, if last { 3 } else { 2 })
        } else {
            let second = roll_at(rolls, cursor + 1, "missing required rolls")?;
            (FrameKind::Open, u16::from(first) + u16::from(second), 2)
        };

        running_total += score;
        trace!(number, %kind, score, running_total, "frame");

        frames.push(Frame {
            number,
            kind,
            rolls: rolls[cursor..cursor + width].to_vec(),
            score,
            running_total,
        });
        cursor += width;
    }

    if cursor < rolls.len() {
        return Err(Error::new(
            ErrorKind::TrailingData,
            format!("found {} extra roll(s)", rolls.len() - cursor),
        ));
    }

    Ok(frames)
}

/// Total score of a complete game.
pub fn score_rolls(rolls: &[u8]) -> Result<u16, Error> {
    let frames = frames(rolls)?;
    Ok(frames.last().map_or(0, |f| f.running_total))
}

/// Strikes are checked first, so a spare never starts with a full rack.
fn is_spare(rolls: &[u8], idx: usize) -> bool {
    match (rolls.get(idx), rolls.get(idx + 1)) {
        (Some(&a), Some(&b)) => a < PINS && a + b == PINS,
        _ => false,
    }
}

fn roll_at(rolls: &[u8], idx: usize, missing: &'static str) -> Result<u8, Error> {
    rolls
        .get(idx)
        .copied()
        .ok_or_else(|| Error::new(ErrorKind::IncompleteGame, missing))
}

fn bonus_at(rolls: &[u8], idx: usize) -> Result<u16, Error> {
    roll_at(rolls, idx, "missing bonus rolls").map(u16::from)
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = render_rolls(&self.rolls);
        write!(
            f,
            "{:>2}  {:<5} {:>3}  {:>3}",
            self.number, marks, self.score, self.running_total
        )
    }
}

/// Render the rolls of one frame back into notation marks.
fn render_rolls(rolls: &[u8]) -> String {
    let mut out = String::new();
    let mut standing = None;

    for &pins in rolls {
        match standing {
            None if pins == PINS => out.push('X'),
            Some(first) if first + pins == PINS => {
                out.push('/');
                standing = None;
                continue;
            }
            _ if pins == 0 => out.push('-'),
            _ => out.push_str(&pins.to_string()),
        }

        standing = match standing {
            None if pins < PINS => Some(pins),
            _ => None,
        };
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn total(rolls: &[u8]) -> u16 {
        score_rolls(rolls).expect("should score")
    }

    fn err(rolls: &[u8]) -> Error {
        match score_rolls(rolls) {
            Ok(s) => panic!("expected error, got {s}"),
            Err(e) => e,
        }
    }

    #[test]
    fn scores_open_frames() {
        assert_eq!(total(&[0; 20]), 0);
        assert_eq!(total(&[9, 0].repeat(10)), 90);
        assert_eq!(total(&[1; 20]), 20);
    }

    #[test]
    fn strike_takes_next_two_rolls() {
        let mut rolls = vec![10, 3, 4];
        rolls.extend([0; 16]);
        assert_eq!(total(&rolls), 10 + 3 + 4 + 3 + 4);

        assert_eq!(total(&[10; 12]), 300);
    }

    #[test]
    fn spare_takes_next_roll() {
        let mut rolls = vec![6, 4, 5, 0];
        rolls.extend([0; 16]);
        assert_eq!(total(&rolls), 10 + 5 + 5);

        assert_eq!(total(&[5; 21]), 150);
    }

    #[test]
    fn final_frame_consumes_its_bonus_rolls() {
        let mut strike = vec![0; 18];
        strike.extend([10, 5, 2]);
        assert_eq!(total(&strike), 17);

        let mut spare = vec![0; 18];
        spare.extend([5, 5, 10]);
        assert_eq!(total(&spare), 20);
    }

    #[test]
    fn missing_rolls_are_incomplete() {
        assert!(matches!(err(&[]).kind, ErrorKind::IncompleteGame));
        assert!(matches!(err(&[10; 8]).kind, ErrorKind::IncompleteGame));

        let mut open = vec![0; 18];
        open.push(4);
        assert!(matches!(err(&open).kind, ErrorKind::IncompleteGame));

        let mut strike = vec![0; 18];
        strike.extend([10, 5]);
        let e = err(&strike);
        assert!(matches!(e.kind, ErrorKind::IncompleteGame));
        assert_eq!(e.context, "missing bonus rolls");

        let mut spare = vec![0; 18];
        spare.extend([3, 7]);
        assert!(matches!(err(&spare).kind, ErrorKind::IncompleteGame));
    }

    #[test]
    fn leftover_rolls_are_trailing_data() {
        let e = err(&[10; 13]);
        assert!(matches!(e.kind, ErrorKind::TrailingData));
        assert_eq!(e.context, "found 1 extra roll(s)");

        let mut open = [9, 0].repeat(10);
        open.extend([1, 2]);
        assert_eq!(err(&open).context, "found 2 extra roll(s)");
    }

    #[test]
    fn frames_carry_rolls_and_running_totals() {
        // X 7/ 9- X -8 8/ -6 X 8/ X11
        let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 8, 2, 10, 1, 1];
        let frames = frames(&rolls).expect("should score");

        let kinds: Vec<_> = frames.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FrameKind::Strike,
                FrameKind::Spare,
                FrameKind::Open,
                FrameKind::Strike,
                FrameKind::Open,
                FrameKind::Spare,
                FrameKind::Open,
                FrameKind::Strike,
                FrameKind::Spare,
                FrameKind::Strike,
            ]
        );

        let totals: Vec<_> = frames.iter().map(|f| f.running_total).collect();
        assert_eq!(totals, vec![20, 39, 48, 66, 74, 84, 90, 110, 130, 142]);
        assert_eq!(frames[9].rolls, vec![10, 1, 1]);
    }

    #[test]
    fn frame_display_renders_marks() {
        assert_eq!(render_rolls(&[10]), "X");
        assert_eq!(render_rolls(&[7, 3]), "7/");
        assert_eq!(render_rolls(&[0, 10]), "-/");
        assert_eq!(render_rolls(&[9, 0]), "9-");
        assert_eq!(render_rolls(&[10, 10, 10]), "XXX");
        assert_eq!(render_rolls(&[10, 8, 2]), "X8/");
        assert_eq!(render_rolls(&[5, 5, 10]), "5/X");

        let frame = Frame {
            number: 10,
            kind: FrameKind::Strike,
            rolls: vec![10, 1, 1],
            score: 12,
            running_total: 142,
        };
        assert_eq!(frame.to_string(), "10  X11    12  142");
    }
}
