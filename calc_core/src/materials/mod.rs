//! # Material Registry
//!
//! Static lookup tables for the estimating engine: densities, thicknesses,
//! stock-sheet sizes, roll allowances, tube unit weights and marker component
//! weights.
//!
//! The registry is an ordinary immutable value. The engine takes it by
//! reference, so every calculation is a pure function of (input, registry).
//!
//! ## Overrides
//!
//! A shop can override any constant from a TOML document. Tables and fields
//! that are left out keep their standard values:
//!
//! ```toml
//! [densities]
//! aluminum = 0.0975
//!
//! [sheets.standard]
//! width = 96.0
//! height = 48.0
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::MaterialRegistry;
//!
//! let registry = MaterialRegistry::standard();
//! assert_eq!(registry.sheets.standard.width.0, 96.0);
//!
//! let custom = MaterialRegistry::from_toml_str("[densities]\naluminum = 0.1\n").unwrap();
//! assert_eq!(custom.densities.aluminum.0, 0.1);
//! assert_eq!(custom.densities.acm, registry.densities.acm);
//! ```

pub mod marker_parts;
pub mod roll_stock;
pub mod sheet_stock;

pub use marker_parts::{BulletComponents, SleeveLength, TubeGauge, TubeLength, TubeWeights};
pub use roll_stock::{MagnetThickness, RollAllowances};
pub use sheet_stock::{
    AcmSheetSize, AluminumGauge, HdpeSheetSize, SheetSize, SheetStock, StockSheets,
};

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, LbPerIn3};

static STANDARD: Lazy<MaterialRegistry> = Lazy::new(MaterialRegistry::default);

/// Whether an entered selector names `code`. Numeric codes compare by value,
/// so ".040", "0.04" and a JSON `0.040` all pick the same gauge.
pub(crate) fn code_matches(entered: &str, code: &str) -> bool {
    let entered = entered.trim();
    if entered == code {
        return true;
    }
    match (entered.parse::<f64>(), code.parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Material densities (lb/in³)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Densities {
    pub aluminum: LbPerIn3,
    pub corrugated: LbPerIn3,
    pub acm: LbPerIn3,
    /// .110 HDPE board
    pub hdpe: LbPerIn3,
    /// .023 HDPE film
    pub hdpe_thin: LbPerIn3,
    pub magnet: LbPerIn3,
}

impl Default for Densities {
    fn default() -> Self {
        Densities {
            aluminum: LbPerIn3(0.097),
            corrugated: LbPerIn3(0.0066522),
            acm: LbPerIn3(0.0484),
            hdpe: LbPerIn3(0.0348011),
            hdpe_thin: LbPerIn3(0.068),
            magnet: LbPerIn3(0.1292),
        }
    }
}

/// Fixed material thicknesses (in)
///
/// Aluminum is absent on purpose: its thickness is the gauge the estimator
/// picks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thicknesses {
    /// 4mm corrugated plastic
    pub corrugated: Inches,
    /// 3mm aluminum composite
    pub acm: Inches,
    pub hdpe: Inches,
    pub hdpe_thin: Inches,
    pub magnet_30_mil: Inches,
    pub magnet_60_mil: Inches,
}

impl Default for Thicknesses {
    fn default() -> Self {
        Thicknesses {
            corrugated: Inches(0.15748),
            acm: Inches(0.118),
            hdpe: Inches(0.110),
            hdpe_thin: Inches(0.023),
            magnet_30_mil: Inches(0.030),
            magnet_60_mil: Inches(0.060),
        }
    }
}

/// Banner square-footage, tape and grommet constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerRules {
    /// Hem allowance added to each dimension
    pub hem: Inches,
    /// Doubled hemmed height must stay under this to be priced at size
    pub roll_limit: Inches,
    /// Height substituted once the roll limit is reached
    pub capped_height: Inches,
    pub grommet_spacing: Inches,
    /// Corner inset removed from the width before spacing grommets
    pub grommet_inset: Inches,
    pub min_grommets: u32,
}

impl Default for BannerRules {
    fn default() -> Self {
        BannerRules {
            hem: Inches(3.0),
            roll_limit: Inches(52.5),
            capped_height: Inches(54.0),
            grommet_spacing: Inches(30.0),
            grommet_inset: Inches(2.0),
            min_grommets: 4,
        }
    }
}

/// VHB tape layout constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VhbRules {
    /// Distance the tape runs inside each edge
    pub inset: Inches,
    /// Panels at or over this size get reinforcement strips
    pub strip_threshold: Inches,
    pub strip_spacing: Inches,
}

impl Default for VhbRules {
    fn default() -> Self {
        VhbRules {
            inset: Inches(2.0),
            strip_threshold: Inches(48.0),
            strip_spacing: Inches(16.0),
        }
    }
}

/// Opus cutter sheet constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpusRules {
    /// Registration margin taken off the sheet width
    pub margin: Inches,
    /// Sheet used when the estimator does not enter one
    pub default_sheet: SheetSize,
}

impl Default for OpusRules {
    fn default() -> Self {
        OpusRules {
            margin: Inches(1.5),
            default_sheet: SheetSize::new(12.0, 18.0),
        }
    }
}

/// The complete set of shop constants used by the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRegistry {
    pub densities: Densities,
    pub thicknesses: Thicknesses,
    pub sheets: StockSheets,
    pub rolls: RollAllowances,
    pub banner: BannerRules,
    pub vhb: VhbRules,
    pub opus: OpusRules,
    pub tubes: TubeWeights,
    pub bullet_parts: BulletComponents,
}

impl MaterialRegistry {
    /// Shared registry with the standard shop constants.
    pub fn standard() -> &'static MaterialRegistry {
        &STANDARD
    }

    /// Build a registry from a TOML override document.
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let registry: MaterialRegistry = toml::from_str(source)?;
        registry.check()?;
        Ok(registry)
    }

    /// Load a TOML override document from disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| CalcError::registry(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Reject overrides that would make nesting math meaningless.
    fn check(&self) -> CalcResult<()> {
        let sheets = [
            ("sheets.standard", self.sheets.standard),
            ("sheets.acm_large", self.sheets.acm_large),
            ("sheets.hdpe_thin", self.sheets.hdpe_thin),
            ("sheets.hdpe_96", self.sheets.hdpe_96),
            ("sheets.hdpe_40", self.sheets.hdpe_40),
            ("sheets.hdpe_24", self.sheets.hdpe_24),
            ("opus.default_sheet", self.opus.default_sheet),
        ];
        for (name, sheet) in sheets {
            if !(sheet.width.0 > 0.0 && sheet.height.0 > 0.0) {
                return Err(CalcError::registry(format!(
                    "{} must have positive width and height",
                    name
                )));
            }
        }
        if self.rolls.digital_print_widths.is_empty() || self.rolls.magnet_widths.is_empty() {
            return Err(CalcError::registry("roll width lists cannot be empty"));
        }
        if self.vhb.strip_spacing.0 <= 0.0 || self.banner.grommet_spacing.0 <= 0.0 {
            return Err(CalcError::registry("strip and grommet spacing must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_densities() {
        let reg = MaterialRegistry::standard();
        assert_eq!(reg.densities.aluminum.0, 0.097);
        assert_eq!(reg.densities.corrugated.0, 0.0066522);
        assert_eq!(reg.densities.acm.0, 0.0484);
        assert_eq!(reg.densities.hdpe.0, 0.0348011);
        assert_eq!(reg.densities.hdpe_thin.0, 0.068);
        assert_eq!(reg.densities.magnet.0, 0.1292);
    }

    #[test]
    fn test_standard_is_shared() {
        let a = MaterialRegistry::standard() as *const MaterialRegistry;
        let b = MaterialRegistry::standard() as *const MaterialRegistry;
        assert_eq!(a, b);
        assert_eq!(*MaterialRegistry::standard(), MaterialRegistry::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [thicknesses]
            acm = 0.157

            [bullet_parts]
            rain_cap = 0.07
        "#;
        let reg = MaterialRegistry::from_toml_str(toml).unwrap();
        assert_eq!(reg.thicknesses.acm.0, 0.157);
        assert_eq!(reg.thicknesses.corrugated.0, 0.15748);
        assert_eq!(reg.bullet_parts.rain_cap.0, 0.07);
        assert_eq!(reg.bullet_parts.t3_head.0, 0.6);
    }

    #[test]
    fn test_empty_override_is_standard() {
        let reg = MaterialRegistry::from_toml_str("").unwrap();
        assert_eq!(reg, MaterialRegistry::default());
    }

    #[test]
    fn test_malformed_override() {
        let err = MaterialRegistry::from_toml_str("[densities\naluminum = ").unwrap_err();
        assert_eq!(err.error_code(), "REGISTRY_ERROR");
    }

    #[test]
    fn test_degenerate_sheet_rejected() {
        let toml = "[sheets.standard]\nwidth = 0.0\nheight = 48.0\n";
        let err = MaterialRegistry::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("sheets.standard"));
    }

    #[test]
    fn test_missing_file() {
        let err = MaterialRegistry::from_toml_file("/nonexistent/registry.toml").unwrap_err();
        assert_eq!(err.error_code(), "REGISTRY_ERROR");
    }

    #[test]
    fn test_code_matches_by_value() {
        assert!(code_matches(".040", ".040"));
        assert!(code_matches("0.04", ".040"));
        assert!(code_matches(" 0.100 ", "0.100"));
        assert!(code_matches("120", "120"));
        assert!(code_matches(".110_96", ".110_96"));
        assert!(!code_matches("0.11", ".110_96"));
        assert!(!code_matches("0.041", ".040"));
        assert!(!code_matches("abc", ".040"));
    }
}
