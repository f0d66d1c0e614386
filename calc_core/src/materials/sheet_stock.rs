//! Rigid sheet stock: aluminum, ACM, HDPE and corrugated plastic.
//!
//! Sign blanks are cut from fixed-size sheets. Aluminum and corrugated always
//! come on the standard 96 x 48 sheet; ACM and HDPE have a size choice, and
//! the thin HDPE film also changes gauge and density.

use serde::{Deserialize, Serialize};

use super::{code_matches, MaterialRegistry};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, LbPerIn3};

/// Stock sheet dimensions (in)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    pub width: Inches,
    pub height: Inches,
}

impl SheetSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        SheetSize {
            width: Inches(width_in),
            height: Inches(height_in),
        }
    }
}

impl std::fmt::Display for SheetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}in x {}in", self.width.0, self.height.0)
    }
}

/// Every stock sheet the shop buys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSheets {
    /// Aluminum, corrugated and standard ACM
    pub standard: SheetSize,
    pub acm_large: SheetSize,
    pub hdpe_thin: SheetSize,
    pub hdpe_96: SheetSize,
    pub hdpe_40: SheetSize,
    pub hdpe_24: SheetSize,
}

impl Default for StockSheets {
    fn default() -> Self {
        StockSheets {
            standard: SheetSize::new(96.0, 48.0),
            acm_large: SheetSize::new(120.0, 60.0),
            hdpe_thin: SheetSize::new(45.0, 24.0),
            hdpe_96: SheetSize::new(48.0, 96.0),
            hdpe_40: SheetSize::new(48.0, 40.0),
            hdpe_24: SheetSize::new(48.0, 24.0),
        }
    }
}

/// A sheet together with the gauge and density of the material on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetStock {
    pub sheet: SheetSize,
    pub thickness: Inches,
    pub density: LbPerIn3,
}

/// Aluminum sheet gauges. The gauge is the sheet thickness in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AluminumGauge {
    #[default]
    #[serde(rename = ".024")]
    G024,
    #[serde(rename = ".040")]
    G040,
    #[serde(rename = ".050")]
    G050,
    #[serde(rename = ".063")]
    G063,
    #[serde(rename = ".080")]
    G080,
    #[serde(rename = ".090")]
    G090,
    #[serde(rename = ".125")]
    G125,
}

impl AluminumGauge {
    pub const ALL: [AluminumGauge; 7] = [
        AluminumGauge::G024,
        AluminumGauge::G040,
        AluminumGauge::G050,
        AluminumGauge::G063,
        AluminumGauge::G080,
        AluminumGauge::G090,
        AluminumGauge::G125,
    ];

    /// Selector code as shown in the gauge dropdown (".024")
    pub fn code(&self) -> &'static str {
        match self {
            AluminumGauge::G024 => ".024",
            AluminumGauge::G040 => ".040",
            AluminumGauge::G050 => ".050",
            AluminumGauge::G063 => ".063",
            AluminumGauge::G080 => ".080",
            AluminumGauge::G090 => ".090",
            AluminumGauge::G125 => ".125",
        }
    }

    /// Parse a selector code; "0.040" and "0.04" name the same gauge as ".040".
    pub fn from_code(code: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|g| code_matches(code, g.code()))
            .ok_or_else(|| {
                CalcError::invalid_option("aluminum_gauge", code, "Not a stocked aluminum gauge")
            })
    }

    pub fn thickness(&self) -> Inches {
        match self {
            AluminumGauge::G024 => Inches(0.024),
            AluminumGauge::G040 => Inches(0.040),
            AluminumGauge::G050 => Inches(0.050),
            AluminumGauge::G063 => Inches(0.063),
            AluminumGauge::G080 => Inches(0.080),
            AluminumGauge::G090 => Inches(0.090),
            AluminumGauge::G125 => Inches(0.125),
        }
    }
}

/// ACM (3mm aluminum composite) sheet sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AcmSheetSize {
    /// 96in x 48in
    #[default]
    #[serde(rename = "96")]
    Standard,
    /// 120in x 60in
    #[serde(rename = "120")]
    Large,
}

impl AcmSheetSize {
    pub const ALL: [AcmSheetSize; 2] = [AcmSheetSize::Standard, AcmSheetSize::Large];

    pub fn code(&self) -> &'static str {
        match self {
            AcmSheetSize::Standard => "96",
            AcmSheetSize::Large => "120",
        }
    }

    pub fn from_code(code: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| code_matches(code, s.code()))
            .ok_or_else(|| CalcError::invalid_option("acm_sheet_size", code, "Expected 96 or 120"))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AcmSheetSize::Standard => "3mm x 96in x 48in",
            AcmSheetSize::Large => "3mm x 120in x 60in",
        }
    }

    pub fn stock(&self, registry: &MaterialRegistry) -> SheetStock {
        let sheet = match self {
            AcmSheetSize::Standard => registry.sheets.standard,
            AcmSheetSize::Large => registry.sheets.acm_large,
        };
        SheetStock {
            sheet,
            thickness: registry.thicknesses.acm,
            density: registry.densities.acm,
        }
    }
}

/// HDPE sheet sizes. The .023 film is a different gauge and density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HdpeSheetSize {
    /// .023in x 45in x 24in
    #[default]
    #[serde(rename = ".023")]
    Thin,
    /// .110in x 48in x 96in
    #[serde(rename = ".110_96")]
    Board96,
    /// .110in x 48in x 40in
    #[serde(rename = ".110_40")]
    Board40,
    /// .110in x 48in x 24in
    #[serde(rename = ".110_24")]
    Board24,
}

impl HdpeSheetSize {
    pub const ALL: [HdpeSheetSize; 4] = [
        HdpeSheetSize::Thin,
        HdpeSheetSize::Board96,
        HdpeSheetSize::Board40,
        HdpeSheetSize::Board24,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HdpeSheetSize::Thin => ".023",
            HdpeSheetSize::Board96 => ".110_96",
            HdpeSheetSize::Board40 => ".110_40",
            HdpeSheetSize::Board24 => ".110_24",
        }
    }

    pub fn from_code(code: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| code_matches(code, s.code()))
            .ok_or_else(|| {
                CalcError::invalid_option(
                    "hdpe_sheet_size",
                    code,
                    "Expected .023, .110_96, .110_40 or .110_24",
                )
            })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HdpeSheetSize::Thin => ".023in x 45in x 24in",
            HdpeSheetSize::Board96 => ".110in x 48in x 96in",
            HdpeSheetSize::Board40 => ".110in x 48in x 40in",
            HdpeSheetSize::Board24 => ".110in x 48in x 24in",
        }
    }

    pub fn stock(&self, registry: &MaterialRegistry) -> SheetStock {
        let board = |sheet| SheetStock {
            sheet,
            thickness: registry.thicknesses.hdpe,
            density: registry.densities.hdpe,
        };
        match self {
            HdpeSheetSize::Thin => SheetStock {
                sheet: registry.sheets.hdpe_thin,
                thickness: registry.thicknesses.hdpe_thin,
                density: registry.densities.hdpe_thin,
            },
            HdpeSheetSize::Board96 => board(registry.sheets.hdpe_96),
            HdpeSheetSize::Board40 => board(registry.sheets.hdpe_40),
            HdpeSheetSize::Board24 => board(registry.sheets.hdpe_24),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_codes() {
        assert_eq!(AluminumGauge::from_code(".024").unwrap(), AluminumGauge::G024);
        assert_eq!(AluminumGauge::from_code("0.063").unwrap(), AluminumGauge::G063);
        assert_eq!(AluminumGauge::from_code(" .125 ").unwrap(), AluminumGauge::G125);
        assert!(AluminumGauge::from_code(".032").is_err());
        assert_eq!(AluminumGauge::from_code("0.04").unwrap(), AluminumGauge::G040);
        assert_eq!(AluminumGauge::from_code("0.09").unwrap(), AluminumGauge::G090);
        for gauge in AluminumGauge::ALL {
            assert_eq!(AluminumGauge::from_code(gauge.code()).unwrap(), gauge);
        }
    }

    #[test]
    fn test_gauge_is_thickness() {
        for gauge in AluminumGauge::ALL {
            let parsed: f64 = gauge.code().parse().unwrap();
            assert_eq!(gauge.thickness().0, parsed);
        }
    }

    #[test]
    fn test_acm_sheets() {
        let reg = MaterialRegistry::default();
        let large = AcmSheetSize::Large.stock(&reg);
        assert_eq!(large.sheet, SheetSize::new(120.0, 60.0));
        assert_eq!(large.thickness.0, 0.118);
        assert_eq!(AcmSheetSize::Standard.stock(&reg).sheet, SheetSize::new(96.0, 48.0));
        assert!(AcmSheetSize::from_code("48").is_err());
        assert_eq!(AcmSheetSize::from_code("120.0").unwrap(), AcmSheetSize::Large);
    }

    #[test]
    fn test_hdpe_thin_uses_film_gauge() {
        let reg = MaterialRegistry::default();
        let thin = HdpeSheetSize::Thin.stock(&reg);
        assert_eq!(thin.sheet, SheetSize::new(45.0, 24.0));
        assert_eq!(thin.thickness.0, 0.023);
        assert_eq!(thin.density.0, 0.068);

        let board = HdpeSheetSize::Board40.stock(&reg);
        assert_eq!(board.sheet, SheetSize::new(48.0, 40.0));
        assert_eq!(board.thickness.0, 0.110);
        assert_eq!(board.density.0, 0.0348011);
    }

    #[test]
    fn test_hdpe_codes() {
        for size in HdpeSheetSize::ALL {
            assert_eq!(HdpeSheetSize::from_code(size.code()).unwrap(), size);
        }
        assert!(HdpeSheetSize::from_code(".110").is_err());
        assert_eq!(HdpeSheetSize::from_code("0.023").unwrap(), HdpeSheetSize::Thin);
    }
}
