//! Roll stock: digital print media and magnet sheeting.

use serde::{Deserialize, Serialize};

use super::{code_matches, MaterialRegistry};
use crate::errors::{CalcError, CalcResult};
use crate::units::Inches;

/// Allowances and stocked widths for roll-fed material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollAllowances {
    /// Unprintable width lost to the printer's pinch rollers
    pub print_margin: Inches,
    /// Bleed added to each printed dimension when requested
    pub bleed: Inches,
    /// Lead added to the run length of each row
    pub run_lead: Inches,
    /// Laminate footage per square foot of printed material
    pub laminate_factor: f64,
    pub digital_print_widths: Vec<Inches>,
    pub magnet_widths: Vec<Inches>,
}

impl Default for RollAllowances {
    fn default() -> Self {
        RollAllowances {
            print_margin: Inches(1.5),
            bleed: Inches(0.5),
            run_lead: Inches(1.0),
            laminate_factor: 1.05,
            digital_print_widths: [54.0, 48.0, 36.0, 30.0, 24.0, 22.0, 18.0, 16.0]
                .into_iter()
                .map(Inches)
                .collect(),
            magnet_widths: vec![Inches(24.0), Inches(30.0)],
        }
    }
}

impl RollAllowances {
    /// Resolve a digital print roll width selector ("54") against the stocked rolls.
    pub fn digital_print_roll(&self, code: &str) -> CalcResult<Inches> {
        stocked_width("roll_width", code, &self.digital_print_widths)
    }

    /// Resolve a magnet roll width selector ("24") against the stocked rolls.
    pub fn magnet_roll(&self, code: &str) -> CalcResult<Inches> {
        stocked_width("roll_width", code, &self.magnet_widths)
    }
}

fn stocked_width(option: &str, code: &str, stocked: &[Inches]) -> CalcResult<Inches> {
    let width: f64 = code
        .trim()
        .trim_end_matches('"')
        .parse()
        .map_err(|_| {
            CalcError::invalid_option(option, code, "Roll width must be a number of inches")
        })?;
    stocked
        .iter()
        .copied()
        .find(|w| w.0 == width)
        .ok_or_else(|| {
            let list = stocked
                .iter()
                .map(|w| w.0.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            CalcError::invalid_option(option, code, format!("Stocked widths are {}", list))
        })
}

/// Magnet sheeting thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MagnetThickness {
    #[default]
    #[serde(rename = "0.030")]
    Mil30,
    #[serde(rename = "0.060")]
    Mil60,
}

impl MagnetThickness {
    pub const ALL: [MagnetThickness; 2] = [MagnetThickness::Mil30, MagnetThickness::Mil60];

    pub fn code(&self) -> &'static str {
        match self {
            MagnetThickness::Mil30 => "0.030",
            MagnetThickness::Mil60 => "0.060",
        }
    }

    fn mils(&self) -> &'static str {
        match self {
            MagnetThickness::Mil30 => "30",
            MagnetThickness::Mil60 => "60",
        }
    }

    /// Accepts the thickness in inches ("0.030", ".03") or the mil count ("30").
    pub fn from_code(code: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| code_matches(code, t.code()) || code_matches(code, t.mils()))
            .ok_or_else(|| {
                CalcError::invalid_option(
                    "magnet_thickness",
                    code,
                    "Expected 0.030 (30 mil) or 0.060 (60 mil)",
                )
            })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MagnetThickness::Mil30 => "30 mil",
            MagnetThickness::Mil60 => "60 mil",
        }
    }

    pub fn thickness(&self, registry: &MaterialRegistry) -> Inches {
        match self {
            MagnetThickness::Mil30 => registry.thicknesses.magnet_30_mil,
            MagnetThickness::Mil60 => registry.thicknesses.magnet_60_mil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digital_print_rolls() {
        let rolls = RollAllowances::default();
        assert_eq!(rolls.digital_print_roll("54").unwrap(), Inches(54.0));
        assert_eq!(rolls.digital_print_roll("18\"").unwrap(), Inches(18.0));
        assert!(rolls.digital_print_roll("20").is_err());
        assert!(rolls.digital_print_roll("wide").is_err());
    }

    #[test]
    fn test_magnet_rolls() {
        let rolls = RollAllowances::default();
        assert_eq!(rolls.magnet_roll("30").unwrap(), Inches(30.0));
        let err = rolls.magnet_roll("54").unwrap_err();
        assert!(err.to_string().contains("24, 30"));
    }

    #[test]
    fn test_magnet_thickness() {
        let reg = MaterialRegistry::default();
        assert_eq!(MagnetThickness::from_code("0.060").unwrap(), MagnetThickness::Mil60);
        assert_eq!(MagnetThickness::from_code("30").unwrap(), MagnetThickness::Mil30);
        assert_eq!(MagnetThickness::Mil60.thickness(&reg).0, 0.060);
        assert!(MagnetThickness::from_code("0.045").is_err());
        // JSON numbers arrive without trailing zeros
        assert_eq!(MagnetThickness::from_code("0.06").unwrap(), MagnetThickness::Mil60);
        assert_eq!(MagnetThickness::from_code(".03").unwrap(), MagnetThickness::Mil30);
    }
}
