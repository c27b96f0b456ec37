//! # Material Takeoff Calculation
//!
//! Converts a ceiling area and wall perimeter into discrete material counts
//! for one grid system, using the yield factors from the catalog.
//!
//! Every count is rounded up to the next whole unit: fractional profiles or
//! tiles cannot be purchased, and the estimate must never under-provision.
//!
//! ## Example
//!
//! ```rust
//! use plafond_core::calculations::takeoff::{self, TakeoffInput};
//! use plafond_core::materials::GridSystem;
//!
//! let input = TakeoffInput {
//!     area_m2: 10.0,
//!     perimeter_m: 5.0,
//!     system: GridSystem::Grid600x600,
//! };
//!
//! let result = takeoff::calculate(&input).unwrap();
//! assert_eq!(result.main_profiles, 3);
//! assert_eq!(result.ceiling_tiles, 28);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{GridSystem, SystemCatalog};

/// Input parameters for a material takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 10.0,
///   "perimeter_m": 5.0,
///   "system": "600x600"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeoffInput {
    /// Floor area in square meters
    pub area_m2: f64,

    /// Trim-relevant wall perimeter in linear meters
    pub perimeter_m: f64,

    /// Grid system to take factors from
    pub system: GridSystem,
}

impl TakeoffInput {
    /// Validate input parameters.
    ///
    /// Both measurements must be finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.area_m2.is_finite() || self.area_m2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "area_m2",
                self.area_m2.to_string(),
                "must be > 0",
            ));
        }
        if !self.perimeter_m.is_finite() || self.perimeter_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "perimeter_m",
                self.perimeter_m.to_string(),
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Material counts for one takeoff.
///
/// Field names serialize to the keys the front-end client expects. The
/// 600 mm cross profile is present only for the fine (600x600) grid and is
/// omitted from the JSON entirely for the coarse grid.
///
/// ## JSON Example
///
/// ```json
/// {
///   "hoofdprofielen": 3,
///   "tussenprofiel_1200": 14,
///   "tussenprofiel_600": 14,
///   "plafondplaten": 28,
///   "hoeklijn": 2,
///   "kantlat": 2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeoffResult {
    /// Main profiles (area-driven)
    #[serde(rename = "hoofdprofielen")]
    pub main_profiles: u64,

    /// Cross profiles, 1200 mm spacing (area-driven)
    #[serde(rename = "tussenprofiel_1200")]
    pub cross_profiles_1200: u64,

    /// Cross profiles, 600 mm spacing (area-driven, fine grid only)
    #[serde(
        rename = "tussenprofiel_600",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cross_profiles_600: Option<u64>,

    /// Ceiling tiles (area-driven)
    #[serde(rename = "plafondplaten")]
    pub ceiling_tiles: u64,

    /// Corner trim lengths (perimeter-driven)
    #[serde(rename = "hoeklijn")]
    pub corner_trims: u64,

    /// Edge battens (perimeter-driven)
    #[serde(rename = "kantlat")]
    pub edge_battens: u64,
}

/// Round a measurement times a yield factor up to a whole count.
///
/// `ceil` returns the smallest integer not less than the product, so exact
/// integers map to themselves. A non-finite product can only come from
/// overflow of two finite inputs.
fn ceil_count(measurement: f64, factor: f64) -> CalcResult<u64> {
    let raw = measurement * factor;
    if !raw.is_finite() {
        return Err(CalcError::calculation_failed(
            "takeoff",
            format!("count overflowed: {} x {}", measurement, factor),
        ));
    }
    Ok(raw.ceil() as u64)
}

/// Calculate material counts for a ceiling.
///
/// Area-driven kinds (main profile, cross profiles, ceiling tile) are
/// computed from `area_m2`; perimeter-driven kinds (corner trim, edge
/// batten) from `perimeter_m`. Each count is `ceil(measurement x factor)`.
///
/// # Returns
///
/// * `Ok(TakeoffResult)` - One count per material kind the system defines
/// * `Err(CalcError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use plafond_core::calculations::takeoff::{self, TakeoffInput};
/// use plafond_core::materials::GridSystem;
///
/// let input = TakeoffInput {
///     area_m2: 10.0,
///     perimeter_m: 5.0,
///     system: GridSystem::Grid600x1200,
/// };
///
/// let result = takeoff::calculate(&input).expect("valid input");
/// // The coarse grid has no 600 mm cross profile.
/// assert_eq!(result.cross_profiles_600, None);
/// assert_eq!(result.ceiling_tiles, 14);
/// ```
pub fn calculate(input: &TakeoffInput) -> CalcResult<TakeoffResult> {
    input.validate()?;

    let factors = &SystemCatalog::global().get(input.system).factors;

    let cross_profiles_600 = match factors.cross_profile_600_per_m2 {
        Some(factor) => Some(ceil_count(input.area_m2, factor)?),
        None => None,
    };

    Ok(TakeoffResult {
        main_profiles: ceil_count(input.area_m2, factors.main_profile_per_m2)?,
        cross_profiles_1200: ceil_count(input.area_m2, factors.cross_profile_1200_per_m2)?,
        cross_profiles_600,
        ceiling_tiles: ceil_count(input.area_m2, factors.ceiling_tile_per_m2)?,
        corner_trims: ceil_count(input.perimeter_m, factors.corner_trim_per_m)?,
        edge_battens: ceil_count(input.perimeter_m, factors.edge_batten_per_m)?,
    })
}
