//! # Grid System Catalog
//!
//! Yield factors for the supported suspended-ceiling grid systems. A yield
//! factor is the number of material units required per square meter of
//! ceiling (profiles, tiles) or per linear meter of wall perimeter (trim).
//!
//! The catalog is fixed: two grid systems, loaded once at process start and
//! immutable afterwards, so concurrent lookups need no synchronization.
//!
//! ## Supported Systems
//!
//! - **600x600**: fine grid; cross profiles at both 1200 mm and 600 mm
//!   spacing, one 600x600 tile per grid cell
//! - **600x1200**: coarse grid; no 600 mm cross profile, one 600x1200 tile
//!   per grid cell
//!
//! ## Example
//!
//! ```rust
//! use plafond_core::materials::SystemCatalog;
//!
//! let catalog = SystemCatalog::global();
//! let system = catalog.lookup("600x600").unwrap();
//! assert_eq!(system.factors.ceiling_tile_per_m2, 2.78);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Suspended-ceiling grid systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridSystem {
    /// 600x600 mm grid (fine)
    #[serde(rename = "600x600")]
    Grid600x600,
    /// 600x1200 mm grid (coarse)
    #[serde(rename = "600x1200")]
    Grid600x1200,
}

impl GridSystem {
    /// All grid system variants for UI selection
    pub const ALL: [GridSystem; 2] = [GridSystem::Grid600x600, GridSystem::Grid600x1200];

    /// Get the catalog key, as sent by the client (e.g., "600x600")
    pub fn key(&self) -> &'static str {
        match self {
            GridSystem::Grid600x600 => "600x600",
            GridSystem::Grid600x1200 => "600x1200",
        }
    }

    /// Parse from a catalog key
    pub fn from_key(s: &str) -> CalcResult<Self> {
        match s {
            "600x600" => Ok(GridSystem::Grid600x600),
            "600x1200" => Ok(GridSystem::Grid600x1200),
            _ => Err(CalcError::system_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GridSystem::Grid600x600 => "600x600 systeem",
            GridSystem::Grid600x1200 => "600x1200 systeem",
        }
    }
}

impl std::fmt::Display for GridSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-unit material yield factors for one grid system.
///
/// Area-driven factors are items per square meter of ceiling; length-driven
/// factors are items per linear meter of wall perimeter. The values are
/// domain-derived physical rates (grid spacing divided by covered area) and
/// are reproduced exactly, not approximated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldFactors {
    /// Main profiles per m²
    pub main_profile_per_m2: f64,
    /// Cross profiles (1200 mm spacing) per m²
    pub cross_profile_1200_per_m2: f64,
    /// Cross profiles (600 mm spacing) per m²; only the fine grid uses these
    pub cross_profile_600_per_m2: Option<f64>,
    /// Ceiling tiles per m²
    pub ceiling_tile_per_m2: f64,
    /// Corner trim lengths per linear meter of perimeter
    pub corner_trim_per_m: f64,
    /// Edge battens per linear meter of perimeter
    pub edge_batten_per_m: f64,
}

/// One catalog entry: a grid system with its yield factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSystem {
    /// Which grid system this entry describes
    pub system: GridSystem,
    /// Human-readable label (informational only, not used in computation)
    pub display_name: String,
    /// Conversion factors from area/length to material counts
    pub factors: YieldFactors,
}

/// The fixed catalog of supported grid systems.
///
/// Built once with [`SystemCatalog::builtin`] and shared process-wide via
/// [`SystemCatalog::global`]. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCatalog {
    fine: MaterialSystem,
    coarse: MaterialSystem,
}

static CATALOG: Lazy<SystemCatalog> = Lazy::new(SystemCatalog::builtin);

impl SystemCatalog {
    /// Build the catalog with the built-in system definitions.
    pub fn builtin() -> Self {
        SystemCatalog {
            fine: MaterialSystem {
                system: GridSystem::Grid600x600,
                display_name: GridSystem::Grid600x600.display_name().to_string(),
                factors: YieldFactors {
                    main_profile_per_m2: 0.28,
                    cross_profile_1200_per_m2: 1.39,
                    cross_profile_600_per_m2: Some(1.39),
                    ceiling_tile_per_m2: 2.78,
                    corner_trim_per_m: 1.0 / 3.0,
                    edge_batten_per_m: 1.0 / 3.0,
                },
            },
            coarse: MaterialSystem {
                system: GridSystem::Grid600x1200,
                display_name: GridSystem::Grid600x1200.display_name().to_string(),
                factors: YieldFactors {
                    main_profile_per_m2: 0.28,
                    cross_profile_1200_per_m2: 1.39,
                    cross_profile_600_per_m2: None,
                    ceiling_tile_per_m2: 1.39,
                    corner_trim_per_m: 1.0 / 3.0,
                    edge_batten_per_m: 1.0 / 3.0,
                },
            },
        }
    }

    /// Get the process-wide catalog instance.
    pub fn global() -> &'static SystemCatalog {
        &CATALOG
    }

    /// Get the entry for a grid system. Infallible: the catalog defines
    /// every variant of [`GridSystem`].
    pub fn get(&self, system: GridSystem) -> &MaterialSystem {
        match system {
            GridSystem::Grid600x600 => &self.fine,
            GridSystem::Grid600x1200 => &self.coarse,
        }
    }

    /// Look up an entry by its catalog key (e.g., "600x600").
    ///
    /// An unknown key is a client-input error, not a system fault.
    pub fn lookup(&self, key: &str) -> CalcResult<&MaterialSystem> {
        let system = GridSystem::from_key(key)?;
        Ok(self.get(system))
    }

    /// All catalog entries, in declaration order.
    pub fn all(&self) -> [&MaterialSystem; 2] {
        [&self.fine, &self.coarse]
    }
}
