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

//! Module containing constants used by the calculator.

use crate::Float;

///Millimeters in one meter
pub const MM_PER_M: Float = 1000.0;

///Converts `m * um / mm` (which is millimeters) into centimeters
pub const GSD_TO_CM: Float = 10.0;

///First zero of the Airy pattern in units of `lambda * F/#`
///
///Radius of the Airy disk is `Ra = 1.22 * lambda * N`
pub const AIRY_RADIUS_FACTOR: Float = 1.22;

///Half-angles whose cosine falls below this value
///are treated as the pole of the tangent
pub const TAN_POLE_TOLERANCE: Float = Float::EPSILON;

///Lower inclusive limit of the horizontal field of view (degrees)
pub const HFOV_MIN: Float = 0.0;

///Upper inclusive limit of the horizontal field of view (degrees)
pub const HFOV_MAX: Float = 180.0;

///Reference horizontal field of view (degrees)
pub const REF_HFOV: Float = 60.0;

///Reference altitude (meters)
pub const REF_ALTITUDE: Float = 120.0;

///Reference image diameter (millimeters), full-frame sensor width
pub const REF_IMAGE_DIAMETER: Float = 35.9;

///Reference wavelength (micrometers)
pub const REF_WAVELENGTH: Float = 0.54;

///Reference pixel size (micrometers)
pub const REF_PIXEL_SIZE: Float = 4.4;

///Decimal places used in the report unless configured otherwise
pub const DEFAULT_PRECISION: usize = 2;

///Largest precision accepted in configuration
pub const MAX_PRECISION: usize = 10;

///Scaling applied to every diagram dimension
pub const DIAGRAM_SCALE: Float = 1.4;

///Diagram canvas width (pixels), before scaling
pub const DIAGRAM_WIDTH: Float = 500.0;

///Diagram canvas height (pixels), before scaling
pub const DIAGRAM_HEIGHT: Float = 350.0;

///Diagram margin (pixels), before scaling
pub const DIAGRAM_MARGIN: Float = 40.0;

///Fraction of the ray length drawn when the swath does not fit the canvas
pub const CLIPPED_RAY_FRACTION: Float = 0.85;

///Configuration file read when no path is given
pub const DEFAULT_CONFIG: &str = "config.yaml";
