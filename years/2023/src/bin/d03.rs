use std::process::ExitCode;

use lib::prelude::*;
use y2023::schematic::Schematic;

fn main() -> ExitCode {
    lib::cli::main(&[], lib::default_input!("d03.txt"), |_| {
        Ok(|input: IStr| -> Result<_> {
            let schematic = Schematic::parse(input)?;
            let scan = schematic.scan(&Adjacency::MOORE)?;

            Ok([
                Answer::new("sum of part numbers", scan.part_sum()?),
                Answer::new("sum of gear ratios", scan.gear_ratio_sum()?),
            ])
        })
    })
}
