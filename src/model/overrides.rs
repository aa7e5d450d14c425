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

//! Module with command line arguments: the configuration
//! file path and `field=value` overrides of the inputs.

use crate::errors::{ConfigError, OpticsError};
use crate::model::optics::{InputField, OpticsInputs};
use crate::Float;
use clap::Parser;
use std::path::PathBuf;

/// One input replaced from the command line.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Override {
    pub field: InputField,
    pub value: Float,
}

/// Parses `field=value`, validating the value
/// as an entry of the calculator form.
pub fn parse_override(arg: &str) -> Result<Override, ConfigError> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedOverride(arg.to_string()))?;

    if name.trim().is_empty() {
        return Err(ConfigError::MalformedOverride(arg.to_string()));
    }

    let field: InputField = name.parse()?;

    if !field.validate_entry(value) {
        return Err(OpticsError::InvalidInput(field).into());
    }
    let value = field.parse_value(value)?;

    Ok(Override { field, value })
}

/// Converts camera and flight parameters into swath, focal length,
/// ground sampling distance, f-number and entrance pupil diameter.
#[derive(Parser, Clone, PartialEq, Debug, Default)]
#[command(name = "rsoc", version)]
pub struct Arguments {
    /// Configuration file [default: config.yaml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input overrides, e.g. `altitude=400 hfov=84`
    /// (fields: hfov, altitude, image_diameter, wavelength, pixel_size)
    #[arg(value_name = "FIELD=VALUE", value_parser = parse_override)]
    pub overrides: Vec<Override>,
}

impl Arguments {
    /// Applies overrides in order, so the last one for a field wins.
    pub fn apply(&self, inputs: OpticsInputs) -> OpticsInputs {
        self.overrides
            .iter()
            .fold(inputs, |inputs, o| inputs.with(o.field, o.value))
    }
}
