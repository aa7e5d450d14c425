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

//! Module responsible for parsing and checking the configuration file.
//!
//! The configuration file uses [YAML](https://en.wikipedia.org/wiki/YAML)
//! and `serde` to enforce strong typing and automatic type checking.
//!
//! The structures and their fields in this module directly correspond to
//! the fields inside `config.yaml` so you can check this documentation
//! for more details how to set the config file. Every field is optional:
//!
//! ```yaml
//! inputs:
//!   hfov: 60.0
//!   altitude: 120.0
//!   image_diameter: 35.9
//!   wavelength: 0.54
//!   pixel_size: 4.4
//! output:
//!   precision: 2
//!   echo_inputs: false
//!   diagram: diagram.svg
//! ```

use crate::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::errors::ConfigError;
use crate::model::optics::OpticsInputs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// _(Optional)_ Fields controlling what is written
/// by the calculator and how.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    /// _(Optional)_ Number of decimal places of values in the report.
    ///
    /// Defaults to `2`. Cannot be larger than `10`.
    #[serde(default = "Output::default_precision")]
    pub precision: usize,

    /// _(Optional)_ Print the inputs before the results.
    ///
    /// Defaults to `false`.
    #[serde(default)]
    pub echo_inputs: bool,

    /// _(Optional)_ Path of SVG file to which the diagram
    /// of the optical path is written.
    ///
    /// No diagram is written when not set.
    #[serde(default)]
    pub diagram: Option<PathBuf>,
}

impl Output {
    fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    /// Checks if report precision is within limits.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::OutOfBounds(
                "Report precision cannot exceed 10 decimal places",
            ));
        }

        Ok(())
    }
}

impl Default for Output {
    fn default() -> Self {
        Output {
            precision: Output::default_precision(),
            echo_inputs: false,
            diagram: None,
        }
    }
}

/// Main config structure representing the fields in
/// configuration file.
#[derive(Clone, PartialEq, PartialOrd, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub inputs: OpticsInputs,

    #[serde(default)]
    pub output: Output,
}

impl Config {
    /// Config structure constructor, responsible for
    /// deserializing configuration and checking it.
    pub fn new_from_file(file_path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read(file_path)?;
        let config: Config = serde_yaml::from_slice(data.as_slice())?;

        config.check_bounds()?;

        Ok(config)
    }

    /// Checks inputs and output settings.
    ///
    /// Must be called again after inputs are overridden.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        self.inputs.check_bounds()?;
        self.output.check_bounds()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, Output};
    use crate::errors::OpticsError;
    use crate::model::optics::{InputField, OpticsInputs};
    use std::{fs, path::PathBuf};

    #[test]
    fn missing_fields_default() {
        let config: Config = serde_yaml::from_str("inputs:\n  altitude: 400.0\n").unwrap();

        assert_eq!(config.inputs.altitude, 400.0);
        assert_eq!(config.inputs.hfov, OpticsInputs::default().hfov);
        assert_eq!(config.output, Output::default());
    }

    #[test]
    fn full_file() {
        let yaml = "
inputs:
  hfov: 84.0
  altitude: 250.0
  image_diameter: 13.2
  wavelength: 0.55
  pixel_size: 2.4
output:
  precision: 3
  echo_inputs: true
  diagram: out/diagram.svg
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.inputs,
            OpticsInputs {
                hfov: 84.0,
                altitude: 250.0,
                image_diameter: 13.2,
                wavelength: 0.55,
                pixel_size: 2.4,
            }
        );
        assert_eq!(config.output.precision, 3);
        assert!(config.output.echo_inputs);
        assert_eq!(
            config.output.diagram,
            Some(PathBuf::from("out/diagram.svg"))
        );
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("inputs:\n  focal: 35.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn bounds_checked_on_load() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("fov.yaml");
        fs::write(&path, "inputs:\n  hfov: 200.0\n").unwrap();
        assert!(matches!(
            Config::new_from_file(&path),
            Err(ConfigError::Input(OpticsError::InvalidInput(InputField::Hfov)))
        ));

        let path = dir.path().join("precision.yaml");
        fs::write(&path, "output:\n  precision: 11\n").unwrap();
        assert!(matches!(
            Config::new_from_file(&path),
            Err(ConfigError::OutOfBounds(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::new_from_file(&dir.path().join("absent.yaml"));

        assert!(matches!(result, Err(ConfigError::CantOpenFile(_))));
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "inputs:\n  hfov: wide\n").unwrap();

        assert!(matches!(
            Config::new_from_file(&path),
            Err(ConfigError::CantDeserialize(_))
        ));
    }
}
