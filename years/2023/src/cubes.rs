//! Decide which cube games are possible and how many cubes they need.
//!
//! A game is recorded as `Game <id>: <set>; <set>; ...` where each set lists
//! the cubes drawn from the bag as comma-separated `<count> <color>` pairs.


use core::num::ParseIntError;

use lib::input::IStrError;
use lib::prelude::*;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("expected `Game <id>: ...`")]
    MissingHeader,
    #[error("bad game id `{0}`: {1}")]
    BadId(Box<str>, ParseIntError),
    #[error("bad cube count `{0}`: {1}")]
    BadCount(Box<str>, ParseIntError),
    #[error("missing color after count `{0}`")]
    MissingColor(Box<str>),
    #[error("game power too large")]
    PowerOverflow,
    #[error("sum of possible game ids too large")]
    IdSumOverflow,
    #[error("sum of game powers too large")]
    PowerSumOverflow,
}

/// The number of cubes of each color in the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

/// Options accepted by the cubes puzzle.
pub const FLAGS: [Flag; 3] = [
    Flag::new("red").short("r"),
    Flag::new("green").short("g"),
    Flag::new("blue").short("b"),
];

impl Thresholds {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Thresholds passed with `--red`, `--green` and `--blue`, where missing
    /// colors keep their default.
    pub fn from_opts(opts: &Opts) -> Result<Self> {
        let base = Self::default();

        Ok(Self::new(
            opts.value("red")?.unwrap_or(base.red),
            opts.value("green")?.unwrap_or(base.green),
            opts.value("blue")?.unwrap_or(base.blue),
        ))
    }

    /// The number of cubes available for `color`, or `None` if the bag holds
    /// no such color.
    pub fn limit(&self, color: &str) -> Option<u32> {
        match color {
            "red" => Some(self.red),
            "green" => Some(self.green),
            "blue" => Some(self.blue),
            _ => None,
        }
    }
}

impl Default for Thresholds {
    #[inline]
    fn default() -> Self {
        Self::new(12, 13, 14)
    }
}

/// A number of cubes of one color revealed in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw<'a> {
    pub count: u32,
    pub color: &'a str,
}

/// A single game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<'a> {
    pub id: u32,
    pub sets: Vec<Vec<Draw<'a>>>,
}

/// The outcome of checking a game against [Thresholds].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    Possible,
    Exceeds {
        color: &'a str,
        count: u32,
        limit: u32,
    },
    UnknownColor(&'a str),
}

/// The fewest cubes of each color which make a game possible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Minimum {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Minimum {
    /// The power of a set of cubes, or `None` if it doesn't fit in a `u64`.
    #[inline]
    pub fn power(&self) -> Option<u64> {
        u64::from(self.red)
            .checked_mul(u64::from(self.green))?
            .checked_mul(u64::from(self.blue))
    }
}

impl<'a> Game<'a> {
    /// Parse a game from a single line.
    pub fn parse(line: &'a str) -> Result<Self, GameError> {
        let (header, rest) = line.split_once(':').ok_or(GameError::MissingHeader)?;

        let id = match header.trim().split_once(' ') {
            Some(("Game", id)) => id.trim(),
            _ => return Err(GameError::MissingHeader),
        };

        let id = id
            .parse::<u32>()
            .map_err(|e| GameError::BadId(id.into(), e))?;

        let mut sets = Vec::new();

        for set in rest.split(';') {
            let mut draws = Vec::new();

            for draw in set.split(',') {
                let draw = draw.trim();

                if draw.is_empty() {
                    continue;
                }

                let Some((count, color)) = draw.split_once(' ') else {
                    return Err(GameError::MissingColor(draw.into()));
                };

                let count = count
                    .parse::<u32>()
                    .map_err(|e| GameError::BadCount(count.into(), e))?;

                draws.push(Draw {
                    count,
                    color: color.trim(),
                });
            }

            if !draws.is_empty() {
                sets.push(draws);
            }
        }

        Ok(Self { id, sets })
    }

    /// Iterate over every draw in the game.
    pub fn draws(&self) -> impl Iterator<Item = &Draw<'a>> + '_ {
        self.sets.iter().flatten()
    }

    /// Check that every draw fits inside the bag described by `thresholds`.
    pub fn check(&self, thresholds: &Thresholds) -> Verdict<'a> {
        for draw in self.draws() {
            let Some(limit) = thresholds.limit(draw.color) else {
                return Verdict::UnknownColor(draw.color);
            };

            if draw.count > limit {
                return Verdict::Exceeds {
                    color: draw.color,
                    count: draw.count,
                    limit,
                };
            }
        }

        Verdict::Possible
    }

    /// Calculate the fewest cubes of each color needed to play the game.
    ///
    /// Colors other than red, green and blue are ignored.
    pub fn minimum(&self) -> Minimum {
        let mut m = Minimum::default();

        for draw in self.draws() {
            let c = match draw.color {
                "red" => &mut m.red,
                "green" => &mut m.green,
                "blue" => &mut m.blue,
                _ => continue,
            };

            *c = (*c).max(draw.count);
        }

        m
    }

    /// The power of the minimum set of cubes.
    #[inline]
    pub fn power(&self) -> Option<u64> {
        self.minimum().power()
    }
}

lib::from_input! {
    |line: &'static str| -> Game<'static> {
        Ok(Game::parse(line)?)
    }
}

/// The sums produced by an [Aggregator].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Sum of the ids of every possible game.
    pub possible: u64,
    /// Sum of the power of every game.
    pub power: u64,
}

/// Tallies up games according to the configured thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    thresholds: Thresholds,
}

impl Aggregator {
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Process every game in `input`.
    pub fn tally(&self, mut input: IStr) -> Result<Tally> {
        let mut tally = Tally::default();

        for line in input.lines::<IStr>() {
            let mut line = line?;
            let span = line.span();
            let game = line.next::<Game>()?;

            let overflow = |error: GameError| IStrError::any(span.clone(), error);

            match game.check(&self.thresholds) {
                Verdict::Possible => {
                    tally.possible = tally
                        .possible
                        .checked_add(u64::from(game.id))
                        .ok_or_else(|| overflow(GameError::IdSumOverflow))?;
                }
                Verdict::Exceeds {
                    color,
                    count,
                    limit,
                } => {
                    log::debug!("game {}: {count} {color} exceeds {limit}", game.id);
                }
                Verdict::UnknownColor(color) => {
                    log::warn!("game {}: unknown color `{color}`", game.id);
                }
            }

            let power = game
                .power()
                .ok_or_else(|| overflow(GameError::PowerOverflow))?;

            tally.power = tally
                .power
                .checked_add(power)
                .ok_or_else(|| overflow(GameError::PowerSumOverflow))?;
        }

        Ok(tally)
    }
}
