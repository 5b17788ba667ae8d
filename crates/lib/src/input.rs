//! Input parser.

mod error;
mod iter;


use core::mem;
use core::ops::Range;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Lines;

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';
const CR: u8 = b'\r';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Byte offset of `data` in the original input.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"first\nsecond\n");
    /// assert_eq!(input.try_line::<&str>()?, Some("first"));
    /// assert_eq!(input.index(), 6);
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The span covered by the remaining input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.index..self.index.saturating_add(self.data.len())
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if the remaining input only consists of whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator over the non-blank lines of the current input.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, T> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there are no more
    /// lines to process.
    ///
    /// A trailing carriage return is not part of the line.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        if let [rest @ .., CR] = line.data {
            line.data = rest;
        }

        line.try_next()
    }

    /// Parse the next line which is not blank as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"\n  \nvalue\n\n");
    /// assert_eq!(input.try_filled_line::<&str>()?, Some("value"));
    /// assert_eq!(input.try_filled_line::<&str>()?, None);
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    pub fn try_filled_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        while let Some(mut line) = self.try_line::<IStr>()? {
            if line.is_blank() {
                continue;
            }

            return line.try_next();
        }

        Ok(None)
    }

    /// Split once at the given byte or until the end of string, returning
    /// the input before the split.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let index = self.index;
            self.index = self.index.saturating_add(self.data.len());
            let data = mem::take(&mut self.data);
            return Some(IStr { data, index });
        };

        let head = self.slice(0..at)?;
        self.advance(at.checked_add(1)?);
        Some(head)
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Optionally try to consume input, returning `None` if there is nothing
    /// to process.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, ErrorKind::UnexpectedEof));
        };

        Ok(value)
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = mem::take(&mut p.data);
        p.index = p.index.saturating_add(data.len());
        Ok(Some(data))
    }
}

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(IStr { data, index }))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}
