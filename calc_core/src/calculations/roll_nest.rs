//! # Roll Nesting
//!
//! Material footage for items printed or cut across a roll (digital print
//! media, magnet sheeting).
//!
//! ## Method
//!
//! Items are lined up across the usable roll width. For each orientation the
//! number that fit across is
//!
//! ```text
//! n1 = ⌊usable / w⌋   (1 if zero)
//! n2 = ⌊usable / h⌋   (1 if zero)
//! ```
//!
//! and the footage of one item is the run length (item dimension plus a 1"
//! lead) times the full roll width, shared by the items in that row. The run
//! goes along the *other* axis, so the width run is shared by `n2` items and
//! the height run by `n1`:
//!
//! ```text
//! sqft1 = ceil3( (w + 1)·R / 144 / n2 )
//! sqft2 = ceil3( (h + 1)·R / 144 / n1 )
//! ```
//!
//! where `ceil3` rounds up to three decimals. Material footage is the mean of
//! the two candidates.
//!
//! Digital print loses 1.5" of the roll to the printer and can add 0.5" bleed
//! to each dimension before nesting; magnet uses the full roll width.

use serde::{Deserialize, Serialize};

use super::input::Dimensions;
use super::result::CalculationResult;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{MagnetThickness, MaterialRegistry};
use crate::units::{Inches, Pounds, SqFt};

/// Round up to three decimal places.
pub fn ceil3(value: f64) -> f64 {
    (value * 1000.0).ceil() / 1000.0
}

/// Count that fits across the usable width, never less than one
fn across(usable: Inches, dim: Inches) -> u64 {
    match (usable.0 / dim.0).floor() as u64 {
        0 => 1,
        n => n,
    }
}

/// Both orientation candidates for one item on one roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollLayout {
    /// Items across when the width runs across the roll
    pub num_up_1: u64,
    /// Items across when the height runs across the roll
    pub num_up_2: u64,
    pub sq_ft_1: SqFt,
    pub sq_ft_2: SqFt,
}

impl RollLayout {
    /// Lay out an item across a roll.
    ///
    /// `nest` is the footprint used to count items across `usable`; `run` is
    /// the size used for the run length (they differ when bleed is added).
    pub fn new(
        roll_width: Inches,
        usable: Inches,
        nest: Dimensions,
        run: Dimensions,
        lead: Inches,
    ) -> Self {
        let num_up_1 = across(usable, nest.width);
        let num_up_2 = across(usable, nest.height);
        let sq_ft_1 = ceil3(((run.width.0 + lead.0) * roll_width.0) / 144.0 / num_up_2 as f64);
        let sq_ft_2 = ceil3(((run.height.0 + lead.0) * roll_width.0) / 144.0 / num_up_1 as f64);
        RollLayout {
            num_up_1,
            num_up_2,
            sq_ft_1: SqFt(sq_ft_1),
            sq_ft_2: SqFt(sq_ft_2),
        }
    }

    /// Mean of the two candidate footages
    pub fn material(&self) -> SqFt {
        (self.sq_ft_1 + self.sq_ft_2) / 2.0
    }

    pub fn max_up_per_row(&self) -> u64 {
        self.num_up_1.max(self.num_up_2)
    }
}

/// Results from digital print nesting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitalPrintResult {
    pub material_sq_ft: SqFt,
    pub laminate_sq_ft: SqFt,
    pub max_up_per_row: u64,
    pub layout: RollLayout,
}

impl DigitalPrintResult {
    pub fn to_calculation_result(&self) -> CalculationResult {
        CalculationResult::new()
            .with("materialSqFt", self.material_sq_ft.0, "Material Sq. ft.:")
            .with("laminateSqFt", self.laminate_sq_ft.0, "Laminate Sq. ft.:")
            .with("maxUpPerRow", self.max_up_per_row, "Max # Up per Row:")
    }
}

/// Nest a printed item across a print roll.
///
/// # Errors
///
/// * `CalcError::InfeasibleLayout` - with bleed, the item is wider than the
///   printable width in both orientations
pub fn digital_print(
    item: Dimensions,
    roll_width: Inches,
    include_bleed: bool,
    registry: &MaterialRegistry,
) -> CalcResult<DigitalPrintResult> {
    let rolls = &registry.rolls;
    let printable = roll_width - rolls.print_margin;
    let bleed = if include_bleed { rolls.bleed } else { Inches(0.0) };
    let bled = Dimensions {
        width: item.width + bleed,
        height: item.height + bleed,
    };

    if bled.width > printable && bled.height > printable {
        return Err(CalcError::infeasible_layout(bled.width.0, bled.height.0, printable.0));
    }

    let layout = RollLayout::new(roll_width, printable, bled, item, rolls.run_lead);
    tracing::debug!(
        roll_width = roll_width.0,
        num_up_1 = layout.num_up_1,
        num_up_2 = layout.num_up_2,
        "digital print layout"
    );
    let material = layout.material();
    Ok(DigitalPrintResult {
        material_sq_ft: material,
        laminate_sq_ft: material * rolls.laminate_factor,
        max_up_per_row: layout.max_up_per_row(),
        layout,
    })
}

/// Results from magnet nesting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnetResult {
    pub material_sq_ft: SqFt,
    pub max_up_per_row: u64,
    pub weight: Pounds,
    pub layout: RollLayout,
}

impl MagnetResult {
    pub fn to_calculation_result(&self) -> CalculationResult {
        CalculationResult::new()
            .with("materialSqFt", self.material_sq_ft.0, "Material Sq. ft.:")
            .with("maxUpPerRow", self.max_up_per_row, "Max # Up per Row:")
            .with("weight", self.weight.0, "Mag Weight:")
    }
}

/// Nest a magnet across a magnet roll and weigh it.
pub fn magnet(
    item: Dimensions,
    roll_width: Inches,
    thickness: MagnetThickness,
    registry: &MaterialRegistry,
) -> MagnetResult {
    let layout = RollLayout::new(roll_width, roll_width, item, item, registry.rolls.run_lead);
    tracing::debug!(
        roll_width = roll_width.0,
        num_up_1 = layout.num_up_1,
        num_up_2 = layout.num_up_2,
        "magnet layout"
    );
    let volume_in3 = (item.width * item.height).0 * thickness.thickness(registry).0;
    MagnetResult {
        material_sq_ft: layout.material(),
        max_up_per_row: layout.max_up_per_row(),
        weight: Pounds(volume_in3 * registry.densities.magnet.0),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MaterialRegistry {
        MaterialRegistry::default()
    }

    /// Three decimals, never rounded down
    fn is_ceil3(value: f64) -> bool {
        ((value * 1000.0).round() - value * 1000.0).abs() < 1e-6
    }

    #[test]
    fn test_ceil3_rounds_up() {
        assert_eq!(ceil3(1.0001), 1.001);
        assert_eq!(ceil3(2.5), 2.5);
        assert_eq!(ceil3(0.0000001), 0.001);
    }

    #[test]
    fn test_digital_print_with_bleed() {
        // 54" roll: printable 52.5; bled item 10.5 x 20.5
        // n1 = floor(52.5/10.5) = 5, n2 = floor(52.5/20.5) = 2
        // sqft1 = ceil3(11*54/144/2) = ceil3(2.0625) = 2.063
        // sqft2 = ceil3(21*54/144/5) = ceil3(1.575) = 1.575
        let result =
            digital_print(Dimensions::new(10.0, 20.0), Inches(54.0), true, &registry()).unwrap();
        assert_eq!(result.layout.num_up_1, 5);
        assert_eq!(result.layout.num_up_2, 2);
        assert!((result.layout.sq_ft_1.0 - 2.063).abs() < 1e-9);
        assert!((result.layout.sq_ft_2.0 - 1.575).abs() < 1e-9);
        assert!((result.material_sq_ft.0 - 1.819).abs() < 1e-9);
        assert!((result.laminate_sq_ft.0 - 1.819 * 1.05).abs() < 1e-9);
        assert_eq!(result.max_up_per_row, 5);
    }

    #[test]
    fn test_digital_print_without_bleed() {
        // 24" roll: printable 22.5; n1 = floor(22.5/10) = 2, n2 = floor(22.5/30) = 0 -> 1
        let result =
            digital_print(Dimensions::new(10.0, 30.0), Inches(24.0), false, &registry()).unwrap();
        assert_eq!(result.layout.num_up_1, 2);
        assert_eq!(result.layout.num_up_2, 1);
        // sqft1 = ceil3(11*24/144/1) = 1.834, sqft2 = ceil3(31*24/144/2) = 2.584
        assert!((result.layout.sq_ft_1.0 - 1.834).abs() < 1e-9);
        assert!((result.layout.sq_ft_2.0 - 2.584).abs() < 1e-9);
    }

    #[test]
    fn test_digital_print_too_wide() {
        let err = digital_print(Dimensions::new(53.0, 60.0), Inches(54.0), true, &registry())
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::InfeasibleLayout {
                item_width_in: 53.5,
                item_height_in: 60.5,
                printable_width_in: 52.5,
            }
        );
    }

    #[test]
    fn test_digital_print_exactly_printable_is_feasible() {
        // bled width equals printable width: fits once across
        let result =
            digital_print(Dimensions::new(52.0, 80.0), Inches(54.0), true, &registry()).unwrap();
        assert_eq!(result.layout.num_up_1, 1);
    }

    #[test]
    fn test_orientation_invariance() {
        let reg = registry();
        for (w, h) in [(10.0, 20.0), (3.25, 7.75), (40.0, 12.0)] {
            let a = digital_print(Dimensions::new(w, h), Inches(54.0), true, &reg).unwrap();
            let b = digital_print(Dimensions::new(h, w), Inches(54.0), true, &reg).unwrap();
            assert_eq!(a.material_sq_ft, b.material_sq_ft);
            assert_eq!(a.max_up_per_row, b.max_up_per_row);

            let a = magnet(Dimensions::new(w, h), Inches(24.0), MagnetThickness::Mil30, &reg);
            let b = magnet(Dimensions::new(h, w), Inches(24.0), MagnetThickness::Mil30, &reg);
            assert_eq!(a.material_sq_ft, b.material_sq_ft);
        }
    }

    #[test]
    fn test_footage_is_three_decimal_ceiling() {
        let reg = registry();
        for (w, h) in [(7.3, 11.9), (1.1, 2.2), (33.3, 4.4)] {
            let r = digital_print(Dimensions::new(w, h), Inches(48.0), true, &reg).unwrap();
            assert!(is_ceil3(r.layout.sq_ft_1.0));
            assert!(is_ceil3(r.layout.sq_ft_2.0));
        }
    }

    #[test]
    fn test_magnet() {
        // 24" roll, 12 x 18: n1 = 2, n2 = 1
        // sqft1 = ceil3(13*24/144/1) = 2.167, sqft2 = ceil3(19*24/144/2) = 1.584
        let result = magnet(
            Dimensions::new(12.0, 18.0),
            Inches(24.0),
            MagnetThickness::Mil30,
            &registry(),
        );
        assert_eq!(result.max_up_per_row, 2);
        assert!((result.layout.sq_ft_1.0 - 2.167).abs() < 1e-9);
        assert!((result.layout.sq_ft_2.0 - 1.584).abs() < 1e-9);
        assert!((result.weight.0 - 12.0 * 18.0 * 0.030 * 0.1292).abs() < 1e-9);

        let rows = result.to_calculation_result();
        let keys: Vec<&str> = rows.keys().collect();
        assert_eq!(keys, vec!["materialSqFt", "maxUpPerRow", "weight"]);
        assert_eq!(rows.get("weight").unwrap().label, "Mag Weight:");
    }

    #[test]
    fn test_magnet_wider_than_roll_counts_one() {
        let result = magnet(
            Dimensions::new(30.0, 36.0),
            Inches(24.0),
            MagnetThickness::Mil60,
            &registry(),
        );
        assert_eq!(result.layout.num_up_1, 1);
        assert_eq!(result.layout.num_up_2, 1);
        assert!(result.material_sq_ft.0.is_finite());
    }
}
