use core::fmt;
use core::ops::Range;
use std::path::Path;

use crate::input::{IStr, IStrError, NL};

/// Associate the position of an input error with the error.
///
/// If `error` wraps an [IStrError], its span is translated into a line and
/// column of `input`. Other errors only get the path as context.
pub fn error_context<E>(path: &Path, input: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let pos = find_range(&error).map(|span| LineCol::from_span(input.as_data(), span));

    error.context(ErrorContext {
        path: path.display().to_string(),
        pos,
    })
}

/// A one-based line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl LineCol {
    /// Compute the position where `span` starts in `data`.
    pub fn from_span(data: &[u8], span: Range<usize>) -> Self {
        let start = span.start.min(data.len());
        let head = data.get(..start).unwrap_or_default();

        let line = memchr::memchr_iter(NL, head).count();

        let line_start = memchr::memrchr(NL, head)
            .map(|n| n.saturating_add(1))
            .unwrap_or_default();

        Self {
            line: line.saturating_add(1),
            column: start.saturating_sub(line_start).saturating_add(1),
        }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Option<Range<usize>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{}:{pos}", self.path),
            None => self.path.fmt(f),
        }
    }
}
