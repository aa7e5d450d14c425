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

//! Module containing the calculator code.
//!
//! A run of the calculator reads the configuration, applies command
//! line overrides, checks the inputs and then computes the optics
//! once. There is no state carried between runs, all values are
//! passed explicitly from one step to the next.

mod configuration;
mod diagram;
pub(crate) mod optics;
mod overrides;
mod report;


use crate::{
    constants::DEFAULT_CONFIG,
    errors::{ConfigError, ModelError},
    model::{
        configuration::Config,
        diagram::DiagramLayout,
        optics::{compute, OpticsOutputs},
        report::Report,
    },
};

pub use overrides::Arguments;
use log::{debug, info};
use std::path::Path;

/// Structure containing checked calculator parameters.
#[derive(Debug)]
pub struct Core {
    pub config: Config,
}

/// Result of one calculation.
#[derive(Debug)]
pub struct Calculation {
    pub outputs: OpticsOutputs,
    pub report: String,
}

impl Core {
    /// Calculator [`Core`] constructor.
    ///
    /// Configuration is read from the path given in arguments,
    /// from `default_config` if it exists, or falls back to the
    /// reference camera. Overrides are applied afterwards
    /// and the result is checked again.
    pub fn new(arguments: &Arguments, default_config: &Path) -> Result<Self, ModelError> {
        let config = load_config(arguments.config.as_deref(), default_config)?;

        debug!("Applying {} input override(s)", arguments.overrides.len());
        let config = Config {
            inputs: arguments.apply(config.inputs),
            ..config
        };

        config.check_bounds()?;
        debug!("Inputs: {:?}", config.inputs);

        Ok(Core { config })
    }

    /// Computes the optics, formats the report
    /// and writes the diagram if requested.
    pub fn run(&self) -> Result<Calculation, ModelError> {
        let inputs = &self.config.inputs;

        debug!("Computing optics");
        let outputs = compute(inputs)?;
        debug!("Outputs: {:?}", outputs);

        let report = Report::new(
            inputs,
            &outputs,
            self.config.output.precision,
            self.config.output.echo_inputs,
        )
        .to_string();

        if let Some(path) = &self.config.output.diagram {
            debug!("Drawing diagram");
            let layout = DiagramLayout::new(inputs.hfov, inputs.altitude, outputs.focal_length)?;
            layout.write_svg(path)?;
            info!("Diagram written to {}", path.display());
        }

        Ok(Calculation { outputs, report })
    }
}

/// Main calculator function, responsible for all steps.
///
/// Only the report is written to the standard output,
/// everything else goes to the log.
pub fn main(arguments: &Arguments) -> Result<OpticsOutputs, ModelError> {
    info!("Preparing the calculator");

    let core = Core::new(arguments, Path::new(DEFAULT_CONFIG))?;
    let calculation = core.run()?;

    print!("{}", calculation.report);

    Ok(calculation.outputs)
}

fn load_config(path: Option<&Path>, default_path: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        debug!("Reading configuration from {}", path.display());
        return Config::new_from_file(path);
    }

    if default_path.exists() {
        debug!("Reading configuration from {}", default_path.display());
        Config::new_from_file(default_path)
    } else {
        info!(
            "No {} found, using reference camera",
            default_path.display()
        );
        Ok(Config::default())
    }
}
