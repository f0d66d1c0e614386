//! Bullet line-marker components: fiberglass tube stock and head hardware.

use serde::{Deserialize, Serialize};

use super::{code_matches, MaterialRegistry};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, LbPerFt, Pounds};

/// Tube wall gauges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TubeGauge {
    #[default]
    #[serde(rename = "0.100")]
    G100,
    #[serde(rename = "0.110")]
    G110,
    #[serde(rename = "0.125")]
    G125,
    #[serde(rename = "0.218")]
    G218,
    #[serde(rename = "0.318")]
    G318,
}

impl TubeGauge {
    pub const ALL: [TubeGauge; 5] = [
        TubeGauge::G100,
        TubeGauge::G110,
        TubeGauge::G125,
        TubeGauge::G218,
        TubeGauge::G318,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TubeGauge::G100 => "0.100",
            TubeGauge::G110 => "0.110",
            TubeGauge::G125 => "0.125",
            TubeGauge::G218 => "0.218",
            TubeGauge::G318 => "0.318",
        }
    }

    /// Parse a gauge selector. Unknown gauges are `None`; callers price them
    /// at zero tube weight.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| code_matches(code, g.code()))
    }
}

/// Tube weight per linear foot, by gauge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeWeights {
    #[serde(rename = "0.100")]
    pub g100: LbPerFt,
    #[serde(rename = "0.110")]
    pub g110: LbPerFt,
    #[serde(rename = "0.125")]
    pub g125: LbPerFt,
    #[serde(rename = "0.218")]
    pub g218: LbPerFt,
    #[serde(rename = "0.318")]
    pub g318: LbPerFt,
}

impl Default for TubeWeights {
    fn default() -> Self {
        TubeWeights {
            g100: LbPerFt(0.4599),
            g110: LbPerFt(0.482195),
            g125: LbPerFt(0.5211),
            g218: LbPerFt(0.9073),
            g318: LbPerFt(1.29512),
        }
    }
}

impl TubeWeights {
    /// Unit weight for a gauge; an unknown gauge weighs nothing.
    pub fn unit_weight(&self, gauge: Option<TubeGauge>) -> LbPerFt {
        match gauge {
            Some(TubeGauge::G100) => self.g100,
            Some(TubeGauge::G110) => self.g110,
            Some(TubeGauge::G125) => self.g125,
            Some(TubeGauge::G218) => self.g218,
            Some(TubeGauge::G318) => self.g318,
            None => LbPerFt(0.0),
        }
    }
}

/// Bullet sleeve lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SleeveLength {
    #[default]
    #[serde(rename = "16")]
    In16,
    #[serde(rename = "22")]
    In22,
}

impl SleeveLength {
    pub fn code(&self) -> &'static str {
        match self {
            SleeveLength::In16 => "16",
            SleeveLength::In22 => "22",
        }
    }

    pub fn from_code(code: &str) -> CalcResult<Self> {
        [SleeveLength::In16, SleeveLength::In22]
            .into_iter()
            .find(|s| code_matches(code, s.code()))
            .ok_or_else(|| CalcError::invalid_option("sleeve_length", code, "Expected 16 or 22"))
    }

    pub fn weight(&self, registry: &MaterialRegistry) -> Pounds {
        match self {
            SleeveLength::In16 => registry.bullet_parts.sleeve_16,
            SleeveLength::In22 => registry.bullet_parts.sleeve_22,
        }
    }
}

/// Tube length: one of the cut lengths the shop stocks, or a custom cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "inches")]
pub enum TubeLength {
    Preset(Inches),
    Custom(Inches),
}

impl Default for TubeLength {
    fn default() -> Self {
        TubeLength::Preset(Inches(72.0))
    }
}

impl TubeLength {
    pub const PRESETS: [f64; 4] = [66.0, 72.0, 84.0, 96.0];

    /// Resolve the length dropdown. `custom` is only read when the dropdown
    /// says "custom"; unparseable custom text is a zero-length tube.
    pub fn from_selection(selection: &str, custom: Option<&str>) -> CalcResult<Self> {
        let selection = selection.trim();
        if selection.eq_ignore_ascii_case("custom") {
            let inches = custom
                .and_then(|text| text.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or_else(|| {
                    tracing::warn!(custom = ?custom, "custom tube length not a number, using 0");
                    0.0
                });
            return Ok(TubeLength::Custom(Inches(inches)));
        }
        selection
            .parse::<f64>()
            .ok()
            .filter(|v| Self::PRESETS.contains(v))
            .map(|v| TubeLength::Preset(Inches(v)))
            .ok_or_else(|| {
                CalcError::invalid_option(
                    "tube_length",
                    selection,
                    "Expected 66, 72, 84, 96 or custom",
                )
            })
    }

    pub fn inches(&self) -> Inches {
        match self {
            TubeLength::Preset(len) | TubeLength::Custom(len) => *len,
        }
    }
}

/// Head hardware and accessory weights (lb)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletComponents {
    pub sleeve_16: Pounds,
    pub sleeve_22: Pounds,
    pub dome_cap_plug: Pounds,
    pub t3_head: Pounds,
    pub rain_cap: Pounds,
    pub u_channel: Pounds,
}

impl Default for BulletComponents {
    fn default() -> Self {
        BulletComponents {
            sleeve_16: Pounds(0.65),
            sleeve_22: Pounds(0.95),
            dome_cap_plug: Pounds(0.152),
            t3_head: Pounds(0.6),
            rain_cap: Pounds(0.05),
            u_channel: Pounds(1.12),
        }
    }
}
