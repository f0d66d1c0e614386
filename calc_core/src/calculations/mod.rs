//! # Estimating Calculations
//!
//! Each algorithm family lives in its own module and follows the pattern:
//!
//! - typed inputs (already parsed, see [`input`])
//! - `*Result` - typed results (JSON-serializable)
//! - `to_calculation_result()` - the labeled rows shown to the estimator
//!
//! [`calculate`] is the single entry point: it resolves a raw
//! [`CalculationInput`], dispatches on the part type and returns the ordered
//! [`CalculationResult`] or one [`CalcError`](crate::errors::CalcError).
//!
//! ## Available Calculations
//!
//! - [`sheet_nest`] - aluminum, ACM, HDPE and corrugated signs on stock sheets
//! - [`roll_nest`] - digital print and magnet on rolls
//! - [`banner`] - banner area, hem tape and grommets
//! - [`opus_decal`] - Opus cut decals on an estimator-sized sheet
//! - [`vhb_tape`] - VHB mounting tape with reinforcement strips
//! - [`bullet`] - bullet marker bill of materials
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{calculate, CalculationInput};
//! use calc_core::materials::MaterialRegistry;
//!
//! let input = CalculationInput::new("aluminum_sign")
//!     .with_size("48", "24")
//!     .with_option("aluminum_gauge", ".024");
//!
//! let result = calculate(&input, MaterialRegistry::standard()).unwrap();
//! assert_eq!(result.value("qty"), Some(4.0));
//! assert_eq!(result.value("percentWaste"), Some(0.25));
//! ```

pub mod banner;
pub mod bullet;
pub mod input;
pub mod opus_decal;
pub mod part_type;
pub mod result;
pub mod roll_nest;
pub mod sheet_nest;
pub mod vhb_tape;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::{
    AcmSheetSize, AluminumGauge, HdpeSheetSize, MagnetThickness, MaterialRegistry, SheetSize,
    SheetStock,
};
use crate::units::Inches;

// Re-export commonly used types
pub use input::{validate, BulletOptions, CalculationInput, Dimensions, OptionValue};
pub use part_type::{PartFamily, PartGroup, PartType};
pub use result::{CalculationResult, ResultEntry, ResultValue};

/// A fully parsed calculation request: one variant per part type, each
/// carrying exactly what its algorithm needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    AluminumSign { size: Dimensions, gauge: AluminumGauge },
    AcmSign { size: Dimensions, sheet: AcmSheetSize },
    HdpeSign { size: Dimensions, sheet: HdpeSheetSize },
    Corrugated { size: Dimensions },
    DigitalPrint { size: Dimensions, roll_width: Inches, include_bleed: bool },
    Magnet { size: Dimensions, roll_width: Inches, thickness: MagnetThickness },
    Banner { size: Dimensions },
    OpusCutDecal { size: Dimensions, sheet: SheetSize },
    VhbTape { size: Dimensions },
    Bullet(BulletOptions),
    /// Recognized part type with no calculation; yields an empty result
    Unconfigured { part_type: PartType },
}

impl CalculationRequest {
    pub fn part_type(&self) -> PartType {
        match self {
            CalculationRequest::AluminumSign { .. } => PartType::AluminumSign,
            CalculationRequest::AcmSign { .. } => PartType::AcmSign,
            CalculationRequest::HdpeSign { .. } => PartType::HdpeSign,
            CalculationRequest::Corrugated { .. } => PartType::Corrugated,
            CalculationRequest::DigitalPrint { .. } => PartType::DigitalPrint,
            CalculationRequest::Magnet { .. } => PartType::Magnet,
            CalculationRequest::Banner { .. } => PartType::Banner,
            CalculationRequest::OpusCutDecal { .. } => PartType::OpusCutDecal,
            CalculationRequest::VhbTape { .. } => PartType::VhbTape,
            CalculationRequest::Bullet(_) => PartType::Bullet,
            CalculationRequest::Unconfigured { part_type } => *part_type,
        }
    }
}

/// Resolve a raw input record and run the matching calculation.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - labeled results in display order (empty for
///   part types with nothing to compute)
/// * `Err(CalcError)` - the single reason no result could be produced
pub fn calculate(
    input: &CalculationInput,
    registry: &MaterialRegistry,
) -> CalcResult<CalculationResult> {
    let request = input.resolve(registry)?;
    calculate_request(&request, registry)
}

/// Run an already-resolved request.
pub fn calculate_request(
    request: &CalculationRequest,
    registry: &MaterialRegistry,
) -> CalcResult<CalculationResult> {
    let part_type = request.part_type();
    tracing::debug!(%part_type, family = ?part_type.family(), "calculating");

    let result = match *request {
        CalculationRequest::AluminumSign { size, gauge } => {
            let stock = SheetStock {
                sheet: registry.sheets.standard,
                thickness: gauge.thickness(),
                density: registry.densities.aluminum,
            };
            sheet_nest::calculate(part_type, size, stock)?.to_calculation_result(part_type)
        }
        CalculationRequest::AcmSign { size, sheet } => {
            sheet_nest::calculate(part_type, size, sheet.stock(registry))?
                .to_calculation_result(part_type)
        }
        CalculationRequest::HdpeSign { size, sheet } => {
            sheet_nest::calculate(part_type, size, sheet.stock(registry))?
                .to_calculation_result(part_type)
        }
        CalculationRequest::Corrugated { size } => {
            let stock = SheetStock {
                sheet: registry.sheets.standard,
                thickness: registry.thicknesses.corrugated,
                density: registry.densities.corrugated,
            };
            sheet_nest::calculate(part_type, size, stock)?.to_calculation_result(part_type)
        }
        CalculationRequest::DigitalPrint {
            size,
            roll_width,
            include_bleed,
        } => roll_nest::digital_print(size, roll_width, include_bleed, registry)?
            .to_calculation_result(),
        CalculationRequest::Magnet {
            size,
            roll_width,
            thickness,
        } => roll_nest::magnet(size, roll_width, thickness, registry).to_calculation_result(),
        CalculationRequest::Banner { size } => {
            banner::calculate(size, &registry.banner).to_calculation_result()
        }
        CalculationRequest::OpusCutDecal { size, sheet } => {
            opus_decal::calculate(size, sheet, &registry.opus).to_calculation_result()
        }
        CalculationRequest::VhbTape { size } => {
            vhb_tape::calculate(size, &registry.vhb).to_calculation_result()
        }
        CalculationRequest::Bullet(ref options) => {
            bullet::calculate(options, registry).to_calculation_result()
        }
        CalculationRequest::Unconfigured { .. } => CalculationResult::new(),
    };
    Ok(result)
}
