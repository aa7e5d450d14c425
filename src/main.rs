/*
Copyright 2024 RSOC Contributors

This file is part of Remote Sensing Optics Calculator (RSOC).

Remote Sensing Optics Calculator (RSOC) is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

Remote Sensing Optics Calculator (RSOC) is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Remote Sensing Optics Calculator (RSOC). If not, see https://www.gnu.org/licenses/.
*/

//! Remote Sensing Optics Calculator (RSOC) converts the basic
//! parameters of an airborne camera (field of view, altitude,
//! sensor size, wavelength and pixel pitch) into the quantities
//! needed to design its optics: ground swath, focal length,
//! ground sampling distance, required f-number and entrance
//! pupil diameter.
//!
//! Inputs are read from `config.yaml` (or a file given with `--config`)
//! and can be overridden with `field=value` arguments:
//!
//! ```text
//! rsoc --config mission.yaml altitude=400 hfov=84
//! ```

mod constants;
mod errors;
mod model;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::process;

type Float = f64;

/// The main program function.
/// Prepares the runtime environment and calls the [`model::main`].
///
/// The logger is initiated before anything else so that
/// configuration errors are reported in the same format
/// as the rest of the run. Any error ends the process
/// with non-zero exit code.
fn main() {
    #[cfg(not(feature = "debug"))]
    let logger_env = Env::new().filter_or("RSOC_LOG_LEVEL", "info");

    #[cfg(feature = "debug")]
    let logger_env = Env::new().filter_or("RSOC_LOG_LEVEL", "debug");

    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    let arguments = model::Arguments::parse();

    match model::main(&arguments) {
        Ok(_) => info!("Calculation finished."),
        Err(err) => {
            error!("Calculation failed with error: {}", err);
            process::exit(1);
        }
    }
}
