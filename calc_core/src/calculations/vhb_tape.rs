//! # VHB Tape
//!
//! Double-sided VHB tape for mounting a panel: a loop 2" in from every edge,
//! plus reinforcement strips across large panels.
//!
//! Panels with either side at 48" or more get strips laid across the short
//! side, one per 16" of long side beyond 48" (at least one). The long side is
//! the width only when width is strictly greater; a square panel counts its
//! height as the long side.

use serde::{Deserialize, Serialize};

use super::input::Dimensions;
use super::result::CalculationResult;
use crate::materials::VhbRules;
use crate::units::{Feet, Inches};

/// Results from VHB tape calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VhbTapeResult {
    pub perimeter: Feet,
    pub additional_strips: u64,
    pub total_length: Feet,
}

impl VhbTapeResult {
    pub fn to_calculation_result(&self) -> CalculationResult {
        CalculationResult::new()
            .with("vhbPerimeterLength", self.perimeter.0, "Perimeter Length (ft):")
            .with("vhbAdditionalStrips", self.additional_strips, "Additional Strips:")
            .with("vhbTapeLength", self.total_length.0, "Total Length (ft):")
    }
}

pub fn calculate(item: Dimensions, rules: &VhbRules) -> VhbTapeResult {
    let Dimensions { width, height } = item;
    let perimeter = (width - rules.inset) * 2.0 + (height - rules.inset) * 2.0;

    let (additional_strips, additional_length) =
        if width >= rules.strip_threshold || height >= rules.strip_threshold {
            let (long, short) = if width > height { (width, height) } else { (height, width) };
            let strips = ((long - rules.strip_threshold).0 / rules.strip_spacing.0)
                .floor()
                .max(1.0) as u64;
            (strips, (short - rules.inset) * strips as f64)
        } else {
            (0, Inches(0.0))
        };

    VhbTapeResult {
        perimeter: perimeter.into(),
        additional_strips,
        total_length: (perimeter + additional_length).into(),
    }
}
