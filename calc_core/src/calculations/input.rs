//! # Calculation Input
//!
//! The raw input record as a form or API caller supplies it: a part type
//! selector, free-text width and height, and a bag of named options. All
//! parsing happens here; [`CalculationInput::resolve`] turns the record into
//! a typed [`CalculationRequest`] or fails with a single error.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "part_type": "aluminum_sign",
//!   "width": "48",
//!   "height": "24",
//!   "options": { "aluminum_gauge": ".040" }
//! }
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::part_type::PartType;
use super::CalculationRequest;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    AcmSheetSize, AluminumGauge, HdpeSheetSize, MagnetThickness, MaterialRegistry, SheetSize,
    SleeveLength, TubeGauge, TubeLength,
};
use crate::units::Inches;

/// Option keys understood by [`CalculationInput::resolve`]
pub mod keys {
    pub const ALUMINUM_GAUGE: &str = "aluminum_gauge";
    pub const ACM_SHEET_SIZE: &str = "acm_sheet_size";
    pub const HDPE_SHEET_SIZE: &str = "hdpe_sheet_size";
    pub const ROLL_WIDTH: &str = "roll_width";
    pub const MAGNET_THICKNESS: &str = "magnet_thickness";
    pub const INCLUDE_BLEED: &str = "include_bleed";
    pub const SHEET_WIDTH: &str = "sheet_width";
    pub const SHEET_HEIGHT: &str = "sheet_height";
    pub const SLEEVE_LENGTH: &str = "sleeve_length";
    pub const TUBE_GAUGE: &str = "tube_gauge";
    pub const TUBE_LENGTH: &str = "tube_length";
    pub const CUSTOM_TUBE_LENGTH: &str = "custom_tube_length";
    pub const INCLUDE_DOME_CAP_PLUG: &str = "include_dome_cap_plug";
    pub const INCLUDE_SLEEVE: &str = "include_sleeve";
    pub const INCLUDE_T3_HEAD: &str = "include_t3_head";
    pub const INCLUDE_RAIN_CAP: &str = "include_rain_cap";
    pub const INCLUDE_U_CHANNEL: &str = "include_u_channel";
}

/// An option value: a dropdown/text entry or a checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl OptionValue {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            OptionValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            OptionValue::Number(n) => Some(Cow::Owned(n.to_string())),
            OptionValue::Flag(_) => None,
        }
    }

    fn as_flag(&self) -> Option<bool> {
        match self {
            OptionValue::Flag(b) => Some(*b),
            OptionValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(true),
                "false" | "off" | "no" | "0" => Some(false),
                _ => None,
            },
            OptionValue::Number(_) => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

/// Item size in inches, already parsed and checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Inches,
    pub height: Inches,
}

impl Dimensions {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Dimensions {
            width: Inches(width_in),
            height: Inches(height_in),
        }
    }

    /// Same item turned 90 degrees
    pub fn rotated(&self) -> Self {
        Dimensions {
            width: self.height,
            height: self.width,
        }
    }
}

/// Raw input record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Part type selector code ("aluminum_sign", "bullet", ...)
    pub part_type: String,

    /// Item width as entered (inches)
    #[serde(default, deserialize_with = "text_or_number")]
    pub width: Option<String>,

    /// Item height as entered (inches)
    #[serde(default, deserialize_with = "text_or_number")]
    pub height: Option<String>,

    /// Part-specific options keyed by the names in [`keys`]
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }
    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

impl CalculationInput {
    pub fn new(part_type: impl Into<String>) -> Self {
        CalculationInput {
            part_type: part_type.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    pub fn with_option(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Parse and validate everything, producing a typed request.
    ///
    /// Missing options take the calculator's defaults. Unknown option codes
    /// are errors, except an unknown tube gauge or unreadable custom tube
    /// length, which price as zero.
    pub fn resolve(&self, registry: &MaterialRegistry) -> CalcResult<CalculationRequest> {
        let part_type = PartType::from_code(&self.part_type)?;
        let dims = validate(part_type, self.width.as_deref(), self.height.as_deref())?;
        let opts = Options(&self.options);
        let size = || {
            dims.ok_or_else(|| {
                CalcError::invalid_dimensions(self.width.as_deref(), self.height.as_deref())
            })
        };

        let request = match part_type {
            PartType::AluminumSign => CalculationRequest::AluminumSign {
                size: size()?,
                gauge: match opts.text(keys::ALUMINUM_GAUGE)? {
                    Some(code) => AluminumGauge::from_code(&code)?,
                    None => AluminumGauge::default(),
                },
            },
            PartType::AcmSign => CalculationRequest::AcmSign {
                size: size()?,
                sheet: match opts.text(keys::ACM_SHEET_SIZE)? {
                    Some(code) => AcmSheetSize::from_code(&code)?,
                    None => AcmSheetSize::default(),
                },
            },
            PartType::HdpeSign => CalculationRequest::HdpeSign {
                size: size()?,
                sheet: match opts.text(keys::HDPE_SHEET_SIZE)? {
                    Some(code) => HdpeSheetSize::from_code(&code)?,
                    None => HdpeSheetSize::default(),
                },
            },
            PartType::Corrugated => CalculationRequest::Corrugated { size: size()? },
            PartType::DigitalPrint => CalculationRequest::DigitalPrint {
                size: size()?,
                roll_width: registry.rolls.digital_print_roll(
                    &opts.text(keys::ROLL_WIDTH)?.unwrap_or(Cow::Borrowed("54")),
                )?,
                include_bleed: opts.flag(keys::INCLUDE_BLEED, true)?,
            },
            PartType::Magnet => CalculationRequest::Magnet {
                size: size()?,
                roll_width: registry
                    .rolls
                    .magnet_roll(&opts.text(keys::ROLL_WIDTH)?.unwrap_or(Cow::Borrowed("24")))?,
                thickness: match opts.text(keys::MAGNET_THICKNESS)? {
                    Some(code) => MagnetThickness::from_code(&code)?,
                    None => MagnetThickness::default(),
                },
            },
            PartType::Banner => CalculationRequest::Banner { size: size()? },
            PartType::OpusCutDecal => {
                let default_sheet = registry.opus.default_sheet;
                CalculationRequest::OpusCutDecal {
                    size: size()?,
                    sheet: SheetSize {
                        width: opts.length(keys::SHEET_WIDTH)?.unwrap_or(default_sheet.width),
                        height: opts.length(keys::SHEET_HEIGHT)?.unwrap_or(default_sheet.height),
                    },
                }
            }
            PartType::VhbTape => CalculationRequest::VhbTape { size: size()? },
            PartType::Bullet => CalculationRequest::Bullet(BulletOptions {
                sleeve_length: match opts.text(keys::SLEEVE_LENGTH)? {
                    Some(code) => SleeveLength::from_code(&code)?,
                    None => SleeveLength::default(),
                },
                tube_gauge: match opts.text(keys::TUBE_GAUGE)? {
                    Some(code) => {
                        let gauge = TubeGauge::from_code(&code);
                        if gauge.is_none() {
                            tracing::warn!(
                                tube_gauge = %code,
                                "unknown tube gauge, tube priced at 0 lb/ft"
                            );
                        }
                        gauge
                    }
                    None => Some(TubeGauge::default()),
                },
                tube_length: match opts.text(keys::TUBE_LENGTH)? {
                    Some(selection) => TubeLength::from_selection(
                        &selection,
                        opts.text(keys::CUSTOM_TUBE_LENGTH)?.as_deref(),
                    )?,
                    None => TubeLength::default(),
                },
                include_sleeve: opts.flag(keys::INCLUDE_SLEEVE, true)?,
                include_dome_cap_plug: opts.flag(keys::INCLUDE_DOME_CAP_PLUG, true)?,
                include_t3_head: opts.flag(keys::INCLUDE_T3_HEAD, false)?,
                include_rain_cap: opts.flag(keys::INCLUDE_RAIN_CAP, false)?,
                include_u_channel: opts.flag(keys::INCLUDE_U_CHANNEL, false)?,
            }),
            PartType::ScreenDecal
            | PartType::Delta
            | PartType::Drv
            | PartType::Frame
            | PartType::Accessories => CalculationRequest::Unconfigured { part_type },
        };
        Ok(request)
    }
}

/// Bullet marker build options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletOptions {
    pub sleeve_length: SleeveLength,
    /// `None` when the gauge was not recognized
    pub tube_gauge: Option<TubeGauge>,
    pub tube_length: TubeLength,
    pub include_sleeve: bool,
    pub include_dome_cap_plug: bool,
    pub include_t3_head: bool,
    pub include_rain_cap: bool,
    pub include_u_channel: bool,
}

impl Default for BulletOptions {
    fn default() -> Self {
        BulletOptions {
            sleeve_length: SleeveLength::default(),
            tube_gauge: Some(TubeGauge::default()),
            tube_length: TubeLength::default(),
            include_sleeve: true,
            include_dome_cap_plug: true,
            include_t3_head: false,
            include_rain_cap: false,
            include_u_channel: false,
        }
    }
}

/// Check the item size for a part type.
///
/// Returns the parsed size for part types that need one and `None` for the
/// dimension-free ones (bullet, frame, accessories), whose width and height
/// are ignored.
pub fn validate(
    part_type: PartType,
    width: Option<&str>,
    height: Option<&str>,
) -> CalcResult<Option<Dimensions>> {
    if !part_type.requires_dimensions() {
        return Ok(None);
    }
    match (width.and_then(parse_length), height.and_then(parse_length)) {
        (Some(w), Some(h)) => Ok(Some(Dimensions::new(w, h))),
        _ => Err(CalcError::invalid_dimensions(width, height)),
    }
}

/// Parse a length entry: a finite, strictly positive number of inches.
fn parse_length(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

struct Options<'a>(&'a BTreeMap<String, OptionValue>);

impl Options<'_> {
    fn text(&self, key: &str) -> CalcResult<Option<Cow<'_, str>>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => value.as_text().map(Some).ok_or_else(|| {
                CalcError::invalid_option(key, "true/false", "Expected a value, not a checkbox")
            }),
        }
    }

    fn flag(&self, key: &str, default: bool) -> CalcResult<bool> {
        match self.0.get(key) {
            None => Ok(default),
            Some(value) => value.as_flag().ok_or_else(|| {
                CalcError::invalid_option(key, format!("{:?}", value), "Expected true or false")
            }),
        }
    }

    fn length(&self, key: &str) -> CalcResult<Option<Inches>> {
        match self.text(key)? {
            None => Ok(None),
            Some(text) => parse_length(&text).map(|v| Some(Inches(v))).ok_or_else(|| {
                CalcError::invalid_option(
                    key,
                    text.to_string(),
                    "Expected a positive number of inches",
                )
            }),
        }
    }
}
