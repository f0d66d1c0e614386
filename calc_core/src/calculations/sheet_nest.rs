//! # Rectangular Sheet Nesting
//!
//! Yield and weight for sign blanks cut from rigid stock sheets (aluminum,
//! ACM, HDPE, corrugated).
//!
//! ## Method
//!
//! The item is laid out as a plain grid in both axis-aligned orientations and
//! the larger count wins:
//!
//! ```text
//! num_up = max( ⌊W/w⌋·⌊H/h⌋ , ⌊W/h⌋·⌊H/w⌋ )
//! ```
//!
//! No kerf or margin between items and no mixed-orientation packing.
//! Waste is reported as the share of a sheet one item consumes (`1/num_up`),
//! and weight as item area × gauge × density.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::sheet_nest::num_up;
//! use calc_core::calculations::Dimensions;
//! use calc_core::materials::SheetSize;
//!
//! let sheet = SheetSize::new(96.0, 48.0);
//! assert_eq!(num_up(sheet, Dimensions::new(48.0, 24.0)), 4);
//! assert_eq!(num_up(sheet, Dimensions::new(30.0, 20.0)), 6);
//! ```

use serde::{Deserialize, Serialize};

use super::input::Dimensions;
use super::part_type::PartType;
use super::result::CalculationResult;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{SheetSize, SheetStock};
use crate::units::Pounds;

/// Results from sheet nesting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetNestResult {
    /// Items per stock sheet
    pub num_up: u64,
    /// Fraction of a sheet charged to one item (1 / num_up)
    pub percent_waste: f64,
    /// Finished item weight
    pub weight: Pounds,
}

impl SheetNestResult {
    pub fn to_calculation_result(&self, part_type: PartType) -> CalculationResult {
        CalculationResult::new()
            .with("qty", self.num_up, "# Up / Inverse Qty:")
            .with("percentWaste", self.percent_waste, "% Out of Material:")
            .with("weight", self.weight.0, weight_label(part_type))
    }
}

fn weight_label(part_type: PartType) -> &'static str {
    match part_type {
        PartType::AluminumSign => "Aluminum Weight:",
        PartType::AcmSign => "ACM Weight:",
        PartType::HdpeSign => "HDPE Weight:",
        PartType::Corrugated => "Corrugated Weight:",
        _ => "Weight:",
    }
}

/// Grid count for one orientation
fn grid_count(sheet: SheetSize, across: f64, down: f64) -> f64 {
    (sheet.width.0 / across).floor() * (sheet.height.0 / down).floor()
}

/// Best grid count of the item on the sheet over both orientations.
pub fn num_up(sheet: SheetSize, item: Dimensions) -> u64 {
    let upright = grid_count(sheet, item.width.0, item.height.0);
    let turned = grid_count(sheet, item.height.0, item.width.0);
    upright.max(turned) as u64
}

/// Nest an item on a stock sheet.
///
/// # Errors
///
/// * `CalcError::NoYield` - the item is larger than the sheet both ways
pub fn calculate(
    part_type: PartType,
    item: Dimensions,
    stock: SheetStock,
) -> CalcResult<SheetNestResult> {
    let count = num_up(stock.sheet, item);
    tracing::debug!(%part_type, sheet = %stock.sheet, num_up = count, "sheet nest");
    if count == 0 {
        return Err(CalcError::no_yield(part_type.code(), item.width.0, item.height.0));
    }

    let volume_in3 = (item.width * item.height).0 * stock.thickness.0;
    Ok(SheetNestResult {
        num_up: count,
        percent_waste: 1.0 / count as f64,
        weight: Pounds(volume_in3 * stock.density.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{AcmSheetSize, AluminumGauge, HdpeSheetSize, MaterialRegistry};
    use crate::units::{Inches, LbPerIn3};

    fn aluminum(gauge: AluminumGauge) -> SheetStock {
        let reg = MaterialRegistry::default();
        SheetStock {
            sheet: reg.sheets.standard,
            thickness: gauge.thickness(),
            density: reg.densities.aluminum,
        }
    }

    #[test]
    fn test_aluminum_48_by_24() {
        let result = calculate(
            PartType::AluminumSign,
            Dimensions::new(48.0, 24.0),
            aluminum(AluminumGauge::G024),
        )
        .unwrap();

        // max(2*2, 4*1) = 4
        assert_eq!(result.num_up, 4);
        assert_eq!(result.percent_waste, 0.25);
        // 48 * 24 * 0.024 * 0.097
        assert!((result.weight.0 - 2.681856).abs() < 1e-9);
    }

    #[test]
    fn test_turned_orientation_wins() {
        // upright: floor(96/50)*floor(48/10) = 1*4 = 4
        // turned:  floor(96/10)*floor(48/50) = 9*0 = 0
        assert_eq!(num_up(SheetSize::new(96.0, 48.0), Dimensions::new(50.0, 10.0)), 4);
        // upright: floor(96/10)*floor(48/50) = 0; turned: floor(96/50)*floor(48/10) = 4
        assert_eq!(num_up(SheetSize::new(96.0, 48.0), Dimensions::new(10.0, 50.0)), 4);
    }

    #[test]
    fn test_orientation_invariance() {
        let sheet = SheetSize::new(120.0, 60.0);
        for (w, h) in [(7.0, 13.0), (24.0, 18.0), (60.0, 11.5), (0.75, 2.25)] {
            let item = Dimensions::new(w, h);
            assert_eq!(num_up(sheet, item), num_up(sheet, item.rotated()));
        }
    }

    #[test]
    fn test_oversize_item_is_no_yield() {
        let err = calculate(
            PartType::AluminumSign,
            Dimensions::new(100.0, 50.0),
            aluminum(AluminumGauge::G040),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "NO_YIELD");
    }

    #[test]
    fn test_fits_one_way_only_still_yields() {
        // 40 x 90 only fits turned on 96 x 48
        let result = calculate(
            PartType::AluminumSign,
            Dimensions::new(40.0, 90.0),
            aluminum(AluminumGauge::G063),
        )
        .unwrap();
        assert_eq!(result.num_up, 1);
        assert_eq!(result.percent_waste, 1.0);
    }

    #[test]
    fn test_acm_large_sheet() {
        let reg = MaterialRegistry::default();
        let result = calculate(
            PartType::AcmSign,
            Dimensions::new(30.0, 20.0),
            AcmSheetSize::Large.stock(&reg),
        )
        .unwrap();
        // upright: 4*3 = 12; turned: 6*2 = 12
        assert_eq!(result.num_up, 12);
        assert!((result.weight.0 - 30.0 * 20.0 * 0.118 * 0.0484).abs() < 1e-9);
    }

    #[test]
    fn test_hdpe_thin_sheet() {
        let reg = MaterialRegistry::default();
        let result = calculate(
            PartType::HdpeSign,
            Dimensions::new(12.0, 18.0),
            HdpeSheetSize::Thin.stock(&reg),
        )
        .unwrap();
        // 45x24: upright 3*1 = 3; turned 2*2 = 4
        assert_eq!(result.num_up, 4);
        assert!((result.weight.0 - 12.0 * 18.0 * 0.023 * 0.068).abs() < 1e-9);
    }

    #[test]
    fn test_result_rows() {
        let stock = SheetStock {
            sheet: SheetSize::new(96.0, 48.0),
            thickness: Inches(0.15748),
            density: LbPerIn3(0.0066522),
        };
        let result = calculate(PartType::Corrugated, Dimensions::new(24.0, 18.0), stock).unwrap();
        let rows = result.to_calculation_result(PartType::Corrugated);
        let keys: Vec<&str> = rows.keys().collect();
        assert_eq!(keys, vec!["qty", "percentWaste", "weight"]);
        assert_eq!(rows.get("weight").unwrap().label, "Corrugated Weight:");
        // upright 4*2 = 8; turned 5*2 = 10
        assert_eq!(rows.value("qty"), Some(10.0));
    }
}
