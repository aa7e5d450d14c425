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

//! Text report of the calculation, printed to standard output.

use crate::model::optics::{InputField, OpticsInputs, OpticsOutputs};
use std::fmt;

/// Report of one calculation.
///
/// Values are rounded only here, the transform
/// itself works in full precision.
#[derive(Copy, Clone, Debug)]
pub struct Report<'a> {
    inputs: &'a OpticsInputs,
    outputs: &'a OpticsOutputs,
    precision: usize,
    echo_inputs: bool,
}

impl<'a> Report<'a> {
    pub fn new(
        inputs: &'a OpticsInputs,
        outputs: &'a OpticsOutputs,
        precision: usize,
        echo_inputs: bool,
    ) -> Self {
        Report {
            inputs,
            outputs,
            precision,
            echo_inputs,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        let out = self.outputs;

        if self.echo_inputs {
            writeln!(f, "Inputs:")?;
            for field in InputField::ALL {
                writeln!(
                    f,
                    "{} = {:.*} {}",
                    field.label(),
                    p,
                    self.inputs.get(field),
                    field.unit()
                )?;
            }
        }

        writeln!(f, "Calculated Swath, Focal Length and Ground Sampling Distance:")?;
        writeln!(f, "Swath = {:.*} meters", p, out.swath)?;
        writeln!(f, "Focal Length = {:.*} mm", p, out.focal_length)?;
        writeln!(f, "GSD = {:.*} cm", p, out.gsd)?;

        writeln!(
            f,
            "Required F/# and Entrance Pupil Diameter to resolve GSD (Airy Disk Radius < 1 pixel):"
        )?;
        writeln!(f, "F/# = {:.*}", p, out.f_number)?;
        writeln!(f, "EPD = {:.*} mm", p, out.entrance_pupil_diameter)
    }
}
