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

//! Module drawing the schematic of the optical path:
//! the drone with its camera, the field of view arc and rays,
//! the altitude arrow and the swath on the ground.
//!
//! The layout is computed first as a list of primitives in
//! canvas pixels (y pointing down) and only then written
//! as SVG. The diagram is only a visualization, it takes
//! already computed values and has no data of its own.

use crate::constants::{
    CLIPPED_RAY_FRACTION, DIAGRAM_HEIGHT, DIAGRAM_MARGIN, DIAGRAM_SCALE, DIAGRAM_WIDTH,
};
use crate::errors::OpticsError;
use crate::model::optics::{InputField, Quantity};
use crate::Float;
use std::{f64::consts::PI, fmt, fs, io, path::Path};

/// Scales the canvas dimension, truncating to whole pixels.
fn scaled(value: Float) -> Float {
    (value * DIAGRAM_SCALE).trunc()
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LineKind {
    Ray,
    Altitude,
    Ground,
    SwathArrow,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Anchor {
    Start,
    Middle,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
    /// Drone carrying the camera, centred at the point.
    Drone { x: Float, y: Float },

    Line {
        kind: LineKind,
        from: (Float, Float),
        to: (Float, Float),
    },

    /// Arc with angles in degrees, counter-clockwise from the
    /// positive x axis as seen on the screen.
    Arc {
        center: (Float, Float),
        radius: Float,
        start: Float,
        extent: Float,
    },

    Text {
        x: Float,
        y: Float,
        anchor: Anchor,
        text: String,
    },
}

/// Diagram of the optical path ready to be rendered.
#[derive(Clone, PartialEq, Debug)]
pub struct DiagramLayout {
    pub width: Float,
    pub height: Float,

    /// Set when the swath would not fit the canvas. Rays are
    /// then cut short and the ground is drawn across the canvas.
    pub clipped: bool,

    pub primitives: Vec<Primitive>,
}

impl DiagramLayout {
    pub fn new(hfov: Float, altitude: Float, focal_length: Float) -> Result<Self, OpticsError> {
        if !hfov.is_finite() {
            return Err(OpticsError::InvalidInput(InputField::Hfov));
        }
        if !altitude.is_finite() {
            return Err(OpticsError::InvalidInput(InputField::Altitude));
        }
        if !focal_length.is_finite() {
            return Err(OpticsError::SingularGeometry(Quantity::FocalLength));
        }

        let theta = hfov * (PI / 180.0) / 2.0;
        let tan_theta = theta.tan();
        let swath = 2.0 * altitude * tan_theta;

        if !swath.is_finite() {
            return Err(OpticsError::SingularGeometry(Quantity::Swath));
        }

        let width = scaled(DIAGRAM_WIDTH);
        let height = scaled(DIAGRAM_HEIGHT);
        let margin = scaled(DIAGRAM_MARGIN);

        let top_y = margin;
        let bottom_y = height - margin;
        let center_x = (width / 2.0).floor();

        let lens_y = top_y + 80.0;
        let arc_radius = scaled(60.0);
        let ground_y = bottom_y;
        let ray_length = ground_y - lens_y;

        let left_x = center_x - ray_length * tan_theta;
        let right_x = center_x + ray_length * tan_theta;

        let max_span = width - 2.0 * margin;
        let clipped = right_x - left_x > max_span;

        let mut primitives = vec![
            Primitive::Drone {
                x: center_x,
                y: top_y + 30.0,
            },
            Primitive::Text {
                x: center_x + 60.0,
                y: top_y + 70.0,
                anchor: Anchor::Start,
                text: format!("Focal Length = {:.1}mm", focal_length),
            },
            Primitive::Arc {
                center: (center_x, lens_y),
                radius: arc_radius,
                start: 270.0 - theta.to_degrees(),
                extent: 2.0 * theta.to_degrees(),
            },
            Primitive::Text {
                x: center_x + scaled(5.0),
                y: lens_y + arc_radius + scaled(6.0),
                anchor: Anchor::Start,
                text: format!("HFOV = {:.1}°", hfov),
            },
        ];

        let (ground_left, ground_right) = if clipped {
            let ray_short = ray_length * CLIPPED_RAY_FRACTION;
            let ray_y = lens_y + ray_short;

            for sign in [-1.0, 1.0] {
                primitives.push(Primitive::Line {
                    kind: LineKind::Ray,
                    from: (center_x, lens_y),
                    to: (center_x + sign * ray_short * tan_theta, ray_y),
                });
            }

            (center_x - max_span / 2.0, center_x + max_span / 2.0)
        } else {
            for x in [left_x, right_x] {
                primitives.push(Primitive::Line {
                    kind: LineKind::Ray,
                    from: (center_x, lens_y),
                    to: (x, ground_y),
                });
            }

            (left_x, right_x)
        };

        primitives.push(Primitive::Line {
            kind: LineKind::Altitude,
            from: (center_x, lens_y),
            to: (center_x, ground_y),
        });
        primitives.push(Primitive::Text {
            x: center_x + scaled(5.0),
            y: ((lens_y + ground_y) / 2.0).floor(),
            anchor: Anchor::Start,
            text: format!("Altitude = {:.0} meters", altitude),
        });

        primitives.push(Primitive::Line {
            kind: LineKind::Ground,
            from: (ground_left, ground_y),
            to: (ground_right, ground_y),
        });
        primitives.push(Primitive::Line {
            kind: LineKind::SwathArrow,
            from: (ground_left, ground_y + scaled(5.0)),
            to: (ground_right, ground_y + scaled(5.0)),
        });
        primitives.push(Primitive::Text {
            x: center_x,
            y: ground_y + scaled(15.0),
            anchor: Anchor::Middle,
            text: format!("SWATH = {:.1} meters", swath),
        });

        Ok(DiagramLayout {
            width,
            height,
            clipped,
            primitives,
        })
    }

    /// Lines of given kind, in drawing order.
    #[cfg(test)]
    pub fn lines(&self, kind: LineKind) -> Vec<((Float, Float), (Float, Float))> {
        self.primitives
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::Line {
                    kind: line_kind,
                    from,
                    to,
                } if *line_kind == kind => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Serialises the layout into a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    pub fn write_svg(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_svg())
    }
}

impl fmt::Display for DiagramLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
<defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="black"/></marker></defs>
<rect width="100%" height="100%" fill="white"/>
"#,
            self.width, self.height, self.width, self.height
        )?;

        let label_size = scaled(8.0);

        for primitive in &self.primitives {
            match primitive {
                Primitive::Drone { x, y } => writeln!(
                    f,
                    r#"<g stroke="black" stroke-width="2" fill="none"><rect x="{}" y="{}" width="40" height="14" rx="4" fill="gray"/><line x1="{}" y1="{}" x2="{}" y2="{}"/><ellipse cx="{}" cy="{}" rx="14" ry="4"/><ellipse cx="{}" cy="{}" rx="14" ry="4"/></g>"#,
                    x - 20.0,
                    y - 7.0,
                    x - 40.0,
                    y - 10.0,
                    x + 40.0,
                    y - 10.0,
                    x - 40.0,
                    y - 14.0,
                    x + 40.0,
                    y - 14.0
                )?,
                Primitive::Line { kind, from, to } => {
                    let style = match kind {
                        LineKind::Ray => r#"stroke="blue" stroke-width="1" stroke-dasharray="2,2""#,
                        LineKind::Altitude => {
                            r#"stroke="black" stroke-width="1" marker-end="url(#arrow)""#
                        }
                        LineKind::Ground => r#"stroke="black" stroke-width="2""#,
                        LineKind::SwathArrow => {
                            r#"stroke="black" stroke-width="1" marker-start="url(#arrow)" marker-end="url(#arrow)""#
                        }
                    };
                    writeln!(
                        f,
                        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                        from.0, from.1, to.0, to.1, style
                    )?;
                }
                Primitive::Arc {
                    center,
                    radius,
                    start,
                    extent,
                } => {
                    let point = |angle: Float| {
                        let angle = angle.to_radians();
                        (
                            center.0 + radius * angle.cos(),
                            center.1 - radius * angle.sin(),
                        )
                    };
                    let (x1, y1) = point(*start);
                    let (x2, y2) = point(start + extent);
                    let large_arc = u8::from(*extent > 180.0);

                    writeln!(
                        f,
                        r#"<path d="M {:.2} {:.2} A {} {} 0 {} 0 {:.2} {:.2}" stroke="black" stroke-width="2" fill="none"/>"#,
                        x1, y1, radius, radius, large_arc, x2, y2
                    )?;
                }
                Primitive::Text {
                    x,
                    y,
                    anchor,
                    text,
                } => {
                    let anchor = match anchor {
                        Anchor::Start => "start",
                        Anchor::Middle => "middle",
                    };
                    writeln!(
                        f,
                        r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" font-family="Segoe UI, sans-serif" font-size="{}" font-weight="bold" fill="blue">{}</text>"#,
                        x, y, anchor, label_size, text
                    )?;
                }
            }
        }

        writeln!(f, "</svg>")
    }
}
