//! # Banner
//!
//! Vinyl banner material, hem tape and grommet count.
//!
//! ## Formulas
//!
//! - Square footage adds a 3" hem to both dimensions. Once the doubled
//!   hemmed height reaches 52.5" the height is priced at the 54" capped roll
//!   height instead:
//!
//!   ```text
//!   (h+3)·2 < 52.5  →  (w+3)(h+3)/144
//!   otherwise       →  (w+3)·54/144
//!   ```
//!
//! - Tape runs the full perimeter: `2(w+h)/12` ft.
//! - Grommets go every 30" along the width less a 2" inset, top and bottom,
//!   with at least one per corner: `max(4, round((w-2)/30 · 2))`.

use serde::{Deserialize, Serialize};

use super::input::Dimensions;
use super::result::CalculationResult;
use crate::materials::BannerRules;
use crate::units::{Feet, Inches, SqFt, SqIn};

/// Results from banner calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BannerResult {
    pub sq_ft: SqFt,
    /// Hem tape length
    pub tape: Feet,
    pub grommets: u64,
}

impl BannerResult {
    pub fn to_calculation_result(&self) -> CalculationResult {
        CalculationResult::new()
            .with("bannerSqFt", self.sq_ft.0, "Banner Sq. ft.:")
            .with("bannerTape", self.tape.0, "Banner Tape:")
            .with("grommets", self.grommets, "Grommets:")
    }
}

pub fn calculate(item: Dimensions, rules: &BannerRules) -> BannerResult {
    let hemmed_width = item.width + rules.hem;
    let hemmed_height = item.height + rules.hem;

    // The cap is keyed on height alone and always substitutes the capped
    // height, whichever way the banner is hung.
    let area: SqIn = if (hemmed_height * 2.0) < rules.roll_limit {
        hemmed_width * hemmed_height
    } else {
        hemmed_width * rules.capped_height
    };

    let tape: Feet = Inches((item.width.0 + item.height.0) * 2.0).into();

    let spaced = ((item.width - rules.grommet_inset).0 / rules.grommet_spacing.0 * 2.0).round();
    let grommets = spaced.max(rules.min_grommets as f64) as u64;

    BannerResult {
        sq_ft: area.into(),
        tape,
        grommets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> BannerRules {
        BannerRules::default()
    }

    #[test]
    fn test_short_banner_priced_at_size() {
        // (20+3)*2 = 46 < 52.5 -> (72+3)(20+3)/144
        let result = calculate(Dimensions::new(72.0, 20.0), &rules());
        assert!((result.sq_ft.0 - 75.0 * 23.0 / 144.0).abs() < 1e-12);
    }

    #[test]
    fn test_tall_banner_priced_at_capped_height() {
        // (36+3)*2 = 78 >= 52.5 -> (96+3)*54/144
        let result = calculate(Dimensions::new(96.0, 36.0), &rules());
        assert!((result.sq_ft.0 - 99.0 * 54.0 / 144.0).abs() < 1e-12);
    }

    #[test]
    fn test_cap_boundary() {
        // (23.25+3)*2 = 52.5 is not under the limit
        let at_limit = calculate(Dimensions::new(10.0, 23.25), &rules());
        assert!((at_limit.sq_ft.0 - 13.0 * 54.0 / 144.0).abs() < 1e-12);

        let under = calculate(Dimensions::new(10.0, 23.0), &rules());
        assert!((under.sq_ft.0 - 13.0 * 26.0 / 144.0).abs() < 1e-12);
    }

    #[test]
    fn test_tape_is_perimeter_in_feet() {
        let result = calculate(Dimensions::new(72.0, 36.0), &rules());
        assert!((result.tape.0 - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_grommets() {
        // (122-2)/30*2 = 8
        assert_eq!(calculate(Dimensions::new(122.0, 36.0), &rules()).grommets, 8);
        // (47-2)/30*2 = 3 -> minimum 4
        assert_eq!(calculate(Dimensions::new(47.0, 36.0), &rules()).grommets, 4);
        // (55-2)/30*2 = 3.53 -> 4; (70-2)/30*2 = 4.53 -> 5
        assert_eq!(calculate(Dimensions::new(55.0, 36.0), &rules()).grommets, 4);
        assert_eq!(calculate(Dimensions::new(70.0, 36.0), &rules()).grommets, 5);
        // narrower than the inset still gets corners
        assert_eq!(calculate(Dimensions::new(1.0, 36.0), &rules()).grommets, 4);
    }

    #[test]
    fn test_result_rows() {
        let rows = calculate(Dimensions::new(72.0, 36.0), &rules()).to_calculation_result();
        let keys: Vec<&str> = rows.keys().collect();
        assert_eq!(keys, vec!["bannerSqFt", "bannerTape", "grommets"]);
        assert_eq!(rows.get("grommets").unwrap().label, "Grommets:");
    }
}
