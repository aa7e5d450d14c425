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

//! Module with the optics transform: conversion of camera
//! and flight parameters into the quantities needed to
//! design the lens.
//!
//! The transform follows the thin-lens model with the usual
//! sign convention of an inverted real image, so that object
//! distance and magnification are negative. Signs are kept as
//! they are because rounding and zero-crossing of the outputs
//! depend on them.
//!
//! Units of inputs and outputs are fixed:
//!
//! | quantity | unit |
//! |---|---|
//! | horizontal field of view | degrees |
//! | altitude, swath | meters |
//! | image diameter, focal length, entrance pupil diameter | millimeters |
//! | wavelength, pixel size | micrometers |
//! | ground sampling distance | centimeters |

use crate::constants::{
    AIRY_RADIUS_FACTOR, GSD_TO_CM, HFOV_MAX, HFOV_MIN, MM_PER_M, REF_ALTITUDE, REF_HFOV,
    REF_IMAGE_DIAMETER, REF_PIXEL_SIZE, REF_WAVELENGTH, TAN_POLE_TOLERANCE,
};
use crate::errors::{ConfigError, OpticsError};
use crate::Float;
use serde::Deserialize;
use std::{f64::consts::PI, fmt, str::FromStr};

/// Enum naming the inputs of the transform.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InputField {
    Hfov,
    Altitude,
    ImageDiameter,
    Wavelength,
    PixelSize,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::Hfov,
        InputField::Altitude,
        InputField::ImageDiameter,
        InputField::Wavelength,
        InputField::PixelSize,
    ];

    /// Name of the field as used in configuration and overrides.
    pub fn name(self) -> &'static str {
        match self {
            InputField::Hfov => "hfov",
            InputField::Altitude => "altitude",
            InputField::ImageDiameter => "image_diameter",
            InputField::Wavelength => "wavelength",
            InputField::PixelSize => "pixel_size",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Hfov => "HFOV",
            InputField::Altitude => "Altitude",
            InputField::ImageDiameter => "Image Diameter",
            InputField::Wavelength => "Wavelength",
            InputField::PixelSize => "Pixel Size",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            InputField::Hfov => "deg",
            InputField::Altitude => "m",
            InputField::ImageDiameter => "mm",
            InputField::Wavelength | InputField::PixelSize => "um",
        }
    }

    /// Parses the text of the field into a finite value.
    ///
    /// Bounds are not checked here, see [`OpticsInputs::check_bounds`].
    pub fn parse_value(self, text: &str) -> Result<Float, OpticsError> {
        let value: Float = text
            .trim()
            .parse()
            .map_err(|_| OpticsError::InvalidInput(self))?;

        if !value.is_finite() {
            return Err(OpticsError::InvalidInput(self));
        }

        Ok(value)
    }

    /// Checks partially typed text of the field.
    ///
    /// Empty text is accepted as the entry is still being edited.
    /// Field of view must additionally lie within `[0, 180]`.
    pub fn validate_entry(self, text: &str) -> bool {
        if text.trim().is_empty() {
            return true;
        }

        match self.parse_value(text) {
            Ok(value) => self != InputField::Hfov || (HFOV_MIN..=HFOV_MAX).contains(&value),
            Err(_) => false,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        InputField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownField(s.to_string()))
    }
}

/// Enum naming the quantities which can
/// become singular during the transform.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Quantity {
    Swath,
    Magnification,
    ImageDistance,
    FocalLength,
    Gsd,
    FNumber,
    EntrancePupilDiameter,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Swath => "swath",
            Quantity::Magnification => "magnification",
            Quantity::ImageDistance => "image distance",
            Quantity::FocalLength => "focal length",
            Quantity::Gsd => "ground sampling distance",
            Quantity::FNumber => "f-number",
            Quantity::EntrancePupilDiameter => "entrance pupil diameter",
        };

        f.write_str(name)
    }
}

/// Camera and flight parameters.
///
/// Fields missing in the configuration file default to
/// a full-frame camera flown at 120 m (see [`Default`]).
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpticsInputs {
    /// Horizontal field of view (full angle) in degrees.
    ///
    /// Must meet the condition: `0 <= hfov <= 180`
    pub hfov: Float,

    /// Altitude above ground in meters.
    pub altitude: Float,

    /// Horizontal dimension of the sensor image in millimeters.
    pub image_diameter: Float,

    /// Wavelength of observation in micrometers.
    pub wavelength: Float,

    /// Pixel pitch in micrometers.
    pub pixel_size: Float,
}

impl Default for OpticsInputs {
    fn default() -> Self {
        OpticsInputs {
            hfov: REF_HFOV,
            altitude: REF_ALTITUDE,
            image_diameter: REF_IMAGE_DIAMETER,
            wavelength: REF_WAVELENGTH,
            pixel_size: REF_PIXEL_SIZE,
        }
    }
}

impl OpticsInputs {
    pub fn get(&self, field: InputField) -> Float {
        match field {
            InputField::Hfov => self.hfov,
            InputField::Altitude => self.altitude,
            InputField::ImageDiameter => self.image_diameter,
            InputField::Wavelength => self.wavelength,
            InputField::PixelSize => self.pixel_size,
        }
    }

    /// Returns a copy of inputs with one field replaced.
    #[must_use]
    pub fn with(mut self, field: InputField, value: Float) -> Self {
        match field {
            InputField::Hfov => self.hfov = value,
            InputField::Altitude => self.altitude = value,
            InputField::ImageDiameter => self.image_diameter = value,
            InputField::Wavelength => self.wavelength = value,
            InputField::PixelSize => self.pixel_size = value,
        }

        self
    }

    /// Checks if all inputs are finite and the field
    /// of view lies within its limits.
    pub fn check_bounds(&self) -> Result<(), OpticsError> {
        check_finite(self)?;

        if !(HFOV_MIN..=HFOV_MAX).contains(&self.hfov) {
            return Err(OpticsError::InvalidInput(InputField::Hfov));
        }

        Ok(())
    }
}

/// Quantities derived from [`OpticsInputs`], in full precision.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct OpticsOutputs {
    /// Ground footprint width in meters.
    pub swath: Float,

    /// Lens focal length in millimeters.
    pub focal_length: Float,

    /// Ground sampling distance in centimeters.
    pub gsd: Float,

    /// F-number at which Airy disk radius equals one pixel.
    pub f_number: Float,

    /// Entrance pupil diameter in millimeters.
    pub entrance_pupil_diameter: Float,
}

/// Computes the optics of the camera from its inputs.
///
/// Swath comes from the field of view and altitude, focal length
/// from the thin lens equation `F = s*s'/(s - s')` with magnification
/// of sensor onto swath, and f-number from the condition that
/// the Airy disk radius `Ra = 1.22 * lambda * N` equals one pixel.
///
/// Field of view bounds are not checked. Any degenerate geometry
/// (zero or infinite swath, zero focal length or f-number,
/// non-finite result) is reported as [`OpticsError::SingularGeometry`].
pub fn compute(inputs: &OpticsInputs) -> Result<OpticsOutputs, OpticsError> {
    check_finite(inputs)?;

    let half_fov = inputs.hfov * (PI / 180.0) / 2.0;

    if half_fov.cos().abs() < TAN_POLE_TOLERANCE {
        return Err(OpticsError::SingularGeometry(Quantity::Swath));
    }

    let swath = nonzero(2.0 * inputs.altitude * half_fov.tan(), Quantity::Swath)?;

    let magnification = divide(
        -inputs.image_diameter,
        MM_PER_M * swath,
        Quantity::Magnification,
    )?;
    let object_distance = -inputs.altitude * MM_PER_M;
    let image_distance = finite(object_distance * magnification, Quantity::ImageDistance)?;

    let focal_length = nonzero(
        divide(
            object_distance * image_distance,
            object_distance - image_distance,
            Quantity::FocalLength,
        )?,
        Quantity::FocalLength,
    )?;

    let gsd = divide(
        inputs.altitude * inputs.pixel_size,
        GSD_TO_CM * focal_length,
        Quantity::Gsd,
    )?;

    let f_number = nonzero(
        divide(
            inputs.pixel_size,
            AIRY_RADIUS_FACTOR * inputs.wavelength,
            Quantity::FNumber,
        )?,
        Quantity::FNumber,
    )?;

    let entrance_pupil_diameter =
        divide(focal_length, f_number, Quantity::EntrancePupilDiameter)?;

    Ok(OpticsOutputs {
        swath,
        focal_length,
        gsd,
        f_number,
        entrance_pupil_diameter,
    })
}

fn check_finite(inputs: &OpticsInputs) -> Result<(), OpticsError> {
    match InputField::ALL
        .iter()
        .find(|field| !inputs.get(**field).is_finite())
    {
        Some(field) => Err(OpticsError::InvalidInput(*field)),
        None => Ok(()),
    }
}

fn finite(value: Float, quantity: Quantity) -> Result<Float, OpticsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OpticsError::SingularGeometry(quantity))
    }
}

fn nonzero(value: Float, quantity: Quantity) -> Result<Float, OpticsError> {
    if value == 0.0 {
        return Err(OpticsError::SingularGeometry(quantity));
    }

    finite(value, quantity)
}

fn divide(numerator: Float, denominator: Float, quantity: Quantity) -> Result<Float, OpticsError> {
    if denominator == 0.0 {
        return Err(OpticsError::SingularGeometry(quantity));
    }

    finite(numerator / denominator, quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn reference() -> OpticsInputs {
        OpticsInputs::default()
    }

    #[test]
    fn reference_camera() {
        let out = compute(&reference()).unwrap();

        assert!(approx_eq!(f64, out.swath, 138.564_064_605_510_17, epsilon = 1e-9));
        assert!(approx_eq!(f64, out.focal_length, 31.082_259_019_774_17, epsilon = 1e-9));
        assert!(approx_eq!(f64, out.gsd, 1.698_718_229_148_314_3, epsilon = 1e-9));
        assert!(approx_eq!(f64, out.f_number, 6.678_809_957_498_482_5, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            out.entrance_pupil_diameter,
            4.653_861_873_233_46,
            epsilon = 1e-9
        ));
    }

    #[test]
    fn follows_thin_lens_formulas() {
        let inputs = OpticsInputs {
            hfov: 90.0,
            altitude: 400.0,
            image_diameter: 23.5,
            wavelength: 0.55,
            pixel_size: 3.76,
        };
        let out = compute(&inputs).unwrap();

        let theta = 90.0 * (PI / 180.0) / 2.0;
        let swath = 2.0 * 400.0 * f64::tan(theta);
        let s = -400.0 * 1000.0;
        let s_prime = s * (-23.5 / (1000.0 * swath));
        let focal = (s * s_prime) / (s - s_prime);
        let f_number: f64 = 3.76 / (1.22 * 0.55);

        assert_eq!(out.swath.to_bits(), swath.to_bits());
        assert_eq!(out.focal_length.to_bits(), focal.to_bits());
        assert_eq!(
            out.gsd.to_bits(),
            ((400.0 * 3.76) / (10.0 * focal)).to_bits()
        );
        assert_eq!(out.f_number.to_bits(), f_number.to_bits());
        assert_eq!(
            out.entrance_pupil_diameter.to_bits(),
            (focal / f_number).to_bits()
        );
    }

    #[test]
    fn idempotent() {
        let first = compute(&reference()).unwrap();
        let second = compute(&reference()).unwrap();

        assert_eq!(first.swath.to_bits(), second.swath.to_bits());
        assert_eq!(first.focal_length.to_bits(), second.focal_length.to_bits());
        assert_eq!(first.gsd.to_bits(), second.gsd.to_bits());
        assert_eq!(first.f_number.to_bits(), second.f_number.to_bits());
        assert_eq!(
            first.entrance_pupil_diameter.to_bits(),
            second.entrance_pupil_diameter.to_bits()
        );
    }

    #[test]
    fn swath_grows_with_altitude() {
        let mut previous = 0.0;

        for altitude in [1.0, 10.0, 120.0, 500.0, 2_000.0, 35_786_000.0] {
            let out = compute(&reference().with(InputField::Altitude, altitude)).unwrap();
            assert!(out.swath > previous);
            previous = out.swath;
        }
    }

    #[test]
    fn zero_fov_is_singular() {
        let result = compute(&reference().with(InputField::Hfov, 0.0));
        assert_eq!(result, Err(OpticsError::SingularGeometry(Quantity::Swath)));
    }

    #[test]
    fn straight_angle_fov_is_singular() {
        let result = compute(&reference().with(InputField::Hfov, 180.0));
        assert_eq!(result, Err(OpticsError::SingularGeometry(Quantity::Swath)));
    }

    #[test]
    fn wide_fov_below_pole_is_computed() {
        let out = compute(&reference().with(InputField::Hfov, 179.0)).unwrap();
        assert!(out.swath.is_finite());
        assert!(out.swath > 10_000.0);
    }

    #[test]
    fn zero_altitude_is_singular() {
        let result = compute(&reference().with(InputField::Altitude, 0.0));
        assert_eq!(result, Err(OpticsError::SingularGeometry(Quantity::Swath)));
    }

    #[test]
    fn zero_wavelength_is_singular() {
        let result = compute(&reference().with(InputField::Wavelength, 0.0));
        assert_eq!(result, Err(OpticsError::SingularGeometry(Quantity::FNumber)));
    }

    #[test]
    fn zero_pixel_size_is_singular() {
        let result = compute(&reference().with(InputField::PixelSize, 0.0));
        assert_eq!(result, Err(OpticsError::SingularGeometry(Quantity::FNumber)));
    }

    #[test]
    fn zero_image_diameter_is_singular() {
        let result = compute(&reference().with(InputField::ImageDiameter, 0.0));
        assert_eq!(
            result,
            Err(OpticsError::SingularGeometry(Quantity::FocalLength))
        );
    }

    #[test]
    fn non_finite_input_is_invalid() {
        let result = compute(&reference().with(InputField::Wavelength, f64::NAN));
        assert_eq!(
            result,
            Err(OpticsError::InvalidInput(InputField::Wavelength))
        );

        let result = compute(&reference().with(InputField::Altitude, f64::INFINITY));
        assert_eq!(result, Err(OpticsError::InvalidInput(InputField::Altitude)));
    }

    #[test]
    fn focal_length_recovered_from_gsd() {
        for (hfov, altitude) in [(60.0, 120.0), (20.0, 3_000.0), (120.0, 50.0)] {
            let inputs = reference()
                .with(InputField::Hfov, hfov)
                .with(InputField::Altitude, altitude);
            let out = compute(&inputs).unwrap();

            let recovered = inputs.altitude * inputs.pixel_size / (10.0 * out.gsd);
            assert!(approx_eq!(f64, recovered, out.focal_length, epsilon = 1e-9));
        }
    }

    #[test]
    fn check_bounds() {
        assert!(reference().check_bounds().is_ok());
        assert!(reference().with(InputField::Hfov, 0.0).check_bounds().is_ok());
        assert!(reference().with(InputField::Hfov, 180.0).check_bounds().is_ok());

        assert_eq!(
            reference().with(InputField::Hfov, 180.5).check_bounds(),
            Err(OpticsError::InvalidInput(InputField::Hfov))
        );
        assert_eq!(
            reference().with(InputField::Hfov, -1.0).check_bounds(),
            Err(OpticsError::InvalidInput(InputField::Hfov))
        );
        assert_eq!(
            reference()
                .with(InputField::PixelSize, f64::NEG_INFINITY)
                .check_bounds(),
            Err(OpticsError::InvalidInput(InputField::PixelSize))
        );
    }

    #[test]
    fn parse_value() {
        assert_eq!(InputField::Altitude.parse_value(" 120.5 "), Ok(120.5));
        assert_eq!(InputField::Hfov.parse_value("1e1"), Ok(10.0));

        assert_eq!(
            InputField::Altitude.parse_value("high"),
            Err(OpticsError::InvalidInput(InputField::Altitude))
        );
        assert_eq!(
            InputField::Wavelength.parse_value("inf"),
            Err(OpticsError::InvalidInput(InputField::Wavelength))
        );
        assert_eq!(
            InputField::PixelSize.parse_value(""),
            Err(OpticsError::InvalidInput(InputField::PixelSize))
        );
    }

    #[test]
    fn validate_entry() {
        assert!(InputField::Hfov.validate_entry(""));
        assert!(InputField::Hfov.validate_entry("0"));
        assert!(InputField::Hfov.validate_entry("180"));
        assert!(!InputField::Hfov.validate_entry("180.1"));
        assert!(!InputField::Hfov.validate_entry("-5"));
        assert!(!InputField::Hfov.validate_entry("6o"));

        assert!(InputField::Altitude.validate_entry("-5"));
        assert!(InputField::Altitude.validate_entry("  "));
        assert!(!InputField::Altitude.validate_entry("NaN"));
    }

    #[test]
    fn field_names() {
        assert_eq!("hfov".parse::<InputField>().unwrap(), InputField::Hfov);
        assert_eq!(
            "Image-Diameter".parse::<InputField>().unwrap(),
            InputField::ImageDiameter
        );
        assert_eq!(
            "pixel_size".parse::<InputField>().unwrap(),
            InputField::PixelSize
        );
        assert!("focal".parse::<InputField>().is_err());

        for field in InputField::ALL {
            assert_eq!(field.name().parse::<InputField>().unwrap(), field);
        }
    }
}
