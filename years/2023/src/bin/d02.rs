use std::process::ExitCode;

use lib::prelude::*;
use y2023::cubes::{self, Aggregator, Thresholds};

fn main() -> ExitCode {
    lib::cli::main(&cubes::FLAGS, lib::default_input!("d02.txt"), |opts| {
        let aggregator = Aggregator::new(Thresholds::from_opts(opts)?);

        Ok(move |input: IStr| -> Result<_> {
            let tally = aggregator.tally(input)?;

            Ok([
                Answer::new("sum of possible game ids", tally.possible),
                Answer::new("sum of game powers", tally.power),
            ])
        })
    })
}
