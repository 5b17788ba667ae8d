//! Solutions for Advent of Code 2023.
//!
//! Each module holds the parsing and aggregation for one puzzle. The
//! binaries in `src/bin` wire them up to [lib::cli].

pub mod calibration;
pub mod cubes;
pub mod schematic;
