use std::process::ExitCode;

use lib::prelude::*;
use y2023::calibration::{self, Calibrator, Mode};

fn main() -> ExitCode {
    lib::cli::main(&calibration::FLAGS, lib::default_input!("d01.txt"), |opts| {
        let calibrator = Calibrator::new(Mode::from_opts(opts)?);

        Ok(move |input: IStr| -> Result<_> {
            let total = calibrator.total(input)?;
            Ok([Answer::new("calibration total", total)])
        })
    })
}
