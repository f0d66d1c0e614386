//! # Bullet Marker
//!
//! Weight of an assembled bullet line marker, summed from its bill of
//! materials: fiberglass tube, head (sleeve and dome cap plug) and optional
//! T3 head, rain cap and U-channel.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bullet::calculate;
//! use calc_core::calculations::BulletOptions;
//! use calc_core::materials::MaterialRegistry;
//!
//! // 72" of .100 tube with a 16" sleeve and dome cap plug
//! let result = calculate(&BulletOptions::default(), MaterialRegistry::standard());
//! assert!((result.total_weight.0 - 3.5614).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::input::BulletOptions;
use super::result::CalculationResult;
use crate::materials::MaterialRegistry;
use crate::units::{Feet, Pounds};

/// Results from bullet marker calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletResult {
    /// Sleeve plus dome cap plug
    pub head_weight: Pounds,
    pub tube_weight: Pounds,
    pub total_weight: Pounds,
}

impl BulletResult {
    pub fn to_calculation_result(&self) -> CalculationResult {
        CalculationResult::new()
            .with("bulletHeadWeight", self.head_weight.0, "Bullet Head Weight:")
            .with("tubeWeight", self.tube_weight.0, "Tube Weight:")
            .with("weight", self.total_weight.0, "Total Marker Weight:")
    }
}

pub fn calculate(options: &BulletOptions, registry: &MaterialRegistry) -> BulletResult {
    let parts = &registry.bullet_parts;
    let include = |on: bool, weight: Pounds| if on { weight } else { Pounds(0.0) };

    let tube_length: Feet = options.tube_length.inches().into();
    let tube_weight = registry.tubes.unit_weight(options.tube_gauge) * tube_length;

    let head_weight = include(options.include_sleeve, options.sleeve_length.weight(registry))
        + include(options.include_dome_cap_plug, parts.dome_cap_plug);

    let total_weight = tube_weight
        + head_weight
        + include(options.include_t3_head, parts.t3_head)
        + include(options.include_rain_cap, parts.rain_cap)
        + include(options.include_u_channel, parts.u_channel);

    BulletResult {
        head_weight,
        tube_weight,
        total_weight,
    }
}
