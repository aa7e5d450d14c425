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

use crate::model::optics::{InputField, Quantity};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Error while reading configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Error while computing optics: {0}")]
    Optics(#[from] OpticsError),

    #[error("Cannot write diagram: {0}")]
    Diagram(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot open configuration file: {0}")]
    CantOpenFile(#[from] std::io::Error),

    #[error("Cannot deserialize configuration file: {0}")]
    CantDeserialize(#[from] serde_yaml::Error),

    #[error("Configuration component is out of bounds: {0}")]
    OutOfBounds(&'static str),

    #[error("Unknown input field '{0}'")]
    UnknownField(String),

    #[error("Argument '{0}' is not in the form field=value")]
    MalformedOverride(String),

    #[error("{0}")]
    Input(#[from] OpticsError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpticsError {
    #[error("Invalid input: {0} is not a finite number within its bounds")]
    InvalidInput(InputField),

    #[error("Singular geometry: {0} cannot be computed for these inputs")]
    SingularGeometry(Quantity),
}
