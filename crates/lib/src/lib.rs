pub mod cli;
pub mod grid;
pub mod input;
mod macros;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::input::IStr;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::{Answer, Flag, Opts};
    pub use crate::grid::{Adjacency, Grid, GridExt};
    pub use crate::input::{FromInput, IStr};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
}

/// Read the input file at the given path.
///
/// The contents are leaked into static storage, since it's much easier to
/// deal with than lifetimes and the memory is freed once the process exits
/// *anyway*.
pub fn read_input(path: &Path) -> Result<IStr> {
    let data = fs::read(path).with_context(|| path.display().to_string())?;
    Ok(IStr::new(Vec::leak(data)))
}

/// The default input file for a puzzle, which is the named file in the
/// `inputs/` directory of the calling crate.
#[macro_export]
macro_rules! default_input {
    ($file:literal) => {
        ::std::path::Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $file))
    };
}
