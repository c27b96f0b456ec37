//! # Area From Dimensions
//!
//! Derives a floor area from two linear measurements, for clients that know
//! the room dimensions but not the area. An exact product: no rounding, and
//! no coupling to the grid-system catalog.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Meters;

/// Input parameters for an area calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaInput {
    /// Room length in meters
    pub length_m: f64,

    /// Room width in meters
    pub width_m: f64,
}

impl AreaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "must be > 0",
            ));
        }
        if !self.width_m.is_finite() || self.width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_m",
                self.width_m.to_string(),
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Result of an area calculation: the area plus the echoed inputs.
///
/// Field names serialize to the keys the front-end client expects.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vierkante_meters": 10.0,
///   "lengte": 4.0,
///   "breedte": 2.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    /// Computed floor area in square meters
    #[serde(rename = "vierkante_meters")]
    pub area_m2: f64,

    /// Echoed room length
    #[serde(rename = "lengte")]
    pub length_m: f64,

    /// Echoed room width
    #[serde(rename = "breedte")]
    pub width_m: f64,
}

/// Calculate a floor area from room dimensions.
///
/// # Example
///
/// ```rust
/// use plafond_core::calculations::area::{self, AreaInput};
///
/// let input = AreaInput { length_m: 4.0, width_m: 2.5 };
/// let result = area::calculate(&input).unwrap();
/// assert_eq!(result.area_m2, 10.0);
/// ```
pub fn calculate(input: &AreaInput) -> CalcResult<AreaResult> {
    input.validate()?;

    let area = Meters(input.length_m) * Meters(input.width_m);

    Ok(AreaResult {
        area_m2: area.value(),
        length_m: input.length_m,
        width_m: input.width_m,
    })
}
