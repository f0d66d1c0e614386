//! # Opus Cut Decal
//!
//! Decals kiss-cut on the Opus cutter from a sheet the estimator sizes.
//!
//! The cutter needs a 1.5" registration strip along the sheet width only, and
//! decals run in a single orientation:
//!
//! ```text
//! across = ⌊(W - 1.5) / w⌋
//! down   = ⌊H / h⌋
//! area per decal = (W·H/144) / (across·down)   (0 when nothing fits)
//! ```

use serde::{Deserialize, Serialize};

use super::input::Dimensions;
use super::result::CalculationResult;
use crate::materials::{OpusRules, SheetSize};
use crate::units::SqFt;

/// Results from Opus decal layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpusDecalResult {
    pub num_across: u64,
    pub num_down: u64,
    pub num_up: u64,
    pub sheet_area: SqFt,
    /// Sheet area charged to each decal; zero when none fit
    pub area_per_decal: SqFt,
}

impl OpusDecalResult {
    pub fn to_calculation_result(&self) -> CalculationResult {
        CalculationResult::new()
            .with("numUpStandard", self.num_up, "# Up (Standard):")
            .with("sheetAreaSqFt", self.sheet_area.0, "Sheet Area (sq ft):")
            .with("areaPerDecal", self.area_per_decal.0, "Area per Decal:")
    }
}

pub fn calculate(item: Dimensions, sheet: SheetSize, rules: &OpusRules) -> OpusDecalResult {
    // A sheet narrower than the margin fits nothing rather than a negative count
    let num_across = ((sheet.width - rules.margin).0 / item.width.0).floor().max(0.0) as u64;
    let num_down = (sheet.height.0 / item.height.0).floor() as u64;
    let num_up = num_across * num_down;
    let sheet_area: SqFt = (sheet.width * sheet.height).into();
    tracing::debug!(num_across, num_down, "opus decal layout");

    let area_per_decal = if num_up > 0 {
        sheet_area / num_up as f64
    } else {
        SqFt(0.0)
    };

    OpusDecalResult {
        num_across,
        num_down,
        num_up,
        sheet_area,
        area_per_decal,
    }
}
