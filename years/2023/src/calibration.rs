//! Recover calibration values from lines of text.
//!
//! The calibration value of a line is made up of the first and the last digit
//! token found on it, where a token is either a digit character or, in
//! [Mode::Words], a digit spelled out in lowercase letters.

#[cfg(test)]
mod tests;

use core::str::FromStr;

use lib::input::IStrError;
use lib::prelude::*;
use thiserror::Error;

/// Which tokens count as digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only the characters `0` through `9`.
    #[default]
    Digits,
    /// Digit characters and the words `zero` through `nine`.
    Words,
}

/// Options accepted by the calibration puzzle.
pub const FLAGS: [Flag; 1] = [Flag::new("mode").short("m")];

impl Mode {
    /// The mode selected with `--mode`, or the default one.
    pub fn from_opts(opts: &Opts) -> Result<Self> {
        Ok(opts.value("mode")?.unwrap_or_default())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digits" => Ok(Mode::Digits),
            "words" => Ok(Mode::Words),
            other => Err(ModeError(other.into())),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown mode `{0}`, expected `digits` or `words`")]
pub struct ModeError(Box<str>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    #[error("no digit in line")]
    NoDigits,
    #[error("calibration total too large")]
    Overflow,
}

/// Extracts calibration values.
#[derive(Debug, Clone, Copy)]
pub struct Calibrator {
    mode: Mode,
}

impl Calibrator {
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// The value of the token starting at the beginning of `bytes`.
    pub fn token_at(&self, bytes: &[u8]) -> Option<u32> {
        if let [d @ b'0'..=b'9', ..] = bytes {
            return Some(u32::from(*d - b'0'));
        }

        if self.mode == Mode::Digits {
            return None;
        }

        let d = match bytes {
            [b'z', b'e', b'r', b'o', ..] => 0,
            [b'o', b'n', b'e', ..] => 1,
            [b't', b'w', b'o', ..] => 2,
            [b't', b'h', b'r', b'e', b'e', ..] => 3,
            [b'f', b'o', b'u', b'r', ..] => 4,
            [b'f', b'i', b'v', b'e', ..] => 5,
            [b's', b'i', b'x', ..] => 6,
            [b's', b'e', b'v', b'e', b'n', ..] => 7,
            [b'e', b'i', b'g', b'h', b't', ..] => 8,
            [b'n', b'i', b'n', b'e', ..] => 9,
            _ => return None,
        };

        Some(d)
    }

    /// Calculate the calibration value of a single line.
    ///
    /// Every byte offset is tested for a token, so overlapping words such as
    /// `twone` yield both of their digits.
    pub fn value(&self, line: &[u8]) -> Result<u32, CalibrationError> {
        let mut tokens = (0..line.len()).filter_map(|n| self.token_at(line.get(n..)?));

        let first = tokens.next().ok_or(CalibrationError::NoDigits)?;
        let last = tokens.last().unwrap_or(first);
        Ok(first * 10 + last)
    }

    /// Sum the calibration values of every non-blank line in `input`.
    pub fn total(&self, mut input: IStr) -> Result<u64> {
        let mut total = 0u64;

        while let Some(line) = input.try_filled_line::<IStr>()? {
            let value = self
                .value(line.as_data())
                .map_err(|error| IStrError::any(line.span(), error))?;

            log::debug!("{line}: {value}", line = line.as_bstr());

            total = total
                .checked_add(u64::from(value))
                .ok_or_else(|| IStrError::any(line.span(), CalibrationError::Overflow))?;
        }

        Ok(total)
    }
}
