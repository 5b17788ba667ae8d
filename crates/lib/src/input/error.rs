use core::fmt;
use core::ops::Range;

/// The kind of an [IStrError].
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotUtf8,
    UnexpectedEof,
    /// An error raised by a custom parser, see [from_input!][crate::from_input].
    Any(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Any(error) => write!(f, "{error:#}"),
        }
    }
}

/// Error raised through string processing.
///
/// The span is a byte range into the original input, which is used by
/// [error_context][crate::cli::error_context] to point at the offending line.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Wrap an arbitrary error which happened while processing the given span.
    #[inline]
    pub fn any<E>(span: Range<usize>, error: E) -> Self
    where
        anyhow::Error: From<E>,
    {
        Self::new(span, ErrorKind::Any(error.into()))
    }

    /// The span of input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for IStrError {}
