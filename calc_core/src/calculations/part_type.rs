//! Part catalog: the part types the shop quotes, grouped the way the
//! estimator picks them.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Algorithm family a part type is priced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartFamily {
    /// Rectangles nested on a fixed stock sheet
    SheetNest,
    /// Rectangles nested across a roll
    RollNest,
    /// Perimeter and strip lengths
    Tape,
    /// Grid on a user-sized sheet
    SheetArea,
    /// Additive bill of materials
    Assembly,
    /// Recognized selector with nothing to compute yet
    Unconfigured,
}

/// Every part type selector the calculator recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartType {
    #[serde(rename = "aluminum_sign")]
    AluminumSign,
    #[serde(rename = "acm_sign")]
    AcmSign,
    #[serde(rename = "hdpe_sign")]
    HdpeSign,
    #[serde(rename = "corrugated")]
    Corrugated,
    #[serde(rename = "digital_print")]
    DigitalPrint,
    #[serde(rename = "magnet")]
    Magnet,
    #[serde(rename = "banner")]
    Banner,
    #[serde(rename = "opus_cut_decal")]
    OpusCutDecal,
    #[serde(rename = "screenDecal")]
    ScreenDecal,
    #[serde(rename = "bullet")]
    Bullet,
    #[serde(rename = "delta")]
    Delta,
    #[serde(rename = "drv")]
    Drv,
    #[serde(rename = "vhbTape")]
    VhbTape,
    #[serde(rename = "frame")]
    Frame,
    #[serde(rename = "accessories")]
    Accessories,
}

impl PartType {
    pub const ALL: [PartType; 15] = [
        PartType::AluminumSign,
        PartType::AcmSign,
        PartType::HdpeSign,
        PartType::Corrugated,
        PartType::DigitalPrint,
        PartType::Magnet,
        PartType::Banner,
        PartType::OpusCutDecal,
        PartType::ScreenDecal,
        PartType::Bullet,
        PartType::Delta,
        PartType::Drv,
        PartType::VhbTape,
        PartType::Frame,
        PartType::Accessories,
    ];

    /// Selector code ("aluminum_sign", "vhbTape", ...)
    pub fn code(&self) -> &'static str {
        match self {
            PartType::AluminumSign => "aluminum_sign",
            PartType::AcmSign => "acm_sign",
            PartType::HdpeSign => "hdpe_sign",
            PartType::Corrugated => "corrugated",
            PartType::DigitalPrint => "digital_print",
            PartType::Magnet => "magnet",
            PartType::Banner => "banner",
            PartType::OpusCutDecal => "opus_cut_decal",
            PartType::ScreenDecal => "screenDecal",
            PartType::Bullet => "bullet",
            PartType::Delta => "delta",
            PartType::Drv => "drv",
            PartType::VhbTape => "vhbTape",
            PartType::Frame => "frame",
            PartType::Accessories => "accessories",
        }
    }

    pub fn from_code(code: &str) -> CalcResult<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| CalcError::unknown_part_type(code))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartType::AluminumSign => "Aluminum Sign",
            PartType::AcmSign => "ACM",
            PartType::HdpeSign => "HDPE",
            PartType::Corrugated => "Corrugated",
            PartType::DigitalPrint => "Digital Print (Roll)",
            PartType::Magnet => "Magnet Sheet",
            PartType::Banner => "Banner",
            PartType::OpusCutDecal => "Opus Cut Decal",
            PartType::ScreenDecal => "Screen (Decal)",
            PartType::Bullet => "Bullet Markers",
            PartType::Delta => "Delta Markers",
            PartType::Drv => "DRV Markers",
            PartType::VhbTape => "VHB Tape",
            PartType::Frame => "Frames",
            PartType::Accessories => "Accessories",
        }
    }

    pub fn group(&self) -> PartGroup {
        PartGroup::ALL
            .into_iter()
            .find(|g| g.members().contains(self))
            .unwrap_or(PartGroup::Other)
    }

    pub fn family(&self) -> PartFamily {
        match self {
            PartType::AluminumSign
            | PartType::AcmSign
            | PartType::HdpeSign
            | PartType::Corrugated => PartFamily::SheetNest,
            PartType::DigitalPrint | PartType::Magnet => PartFamily::RollNest,
            PartType::VhbTape | PartType::Banner => PartFamily::Tape,
            PartType::OpusCutDecal => PartFamily::SheetArea,
            PartType::Bullet => PartFamily::Assembly,
            PartType::ScreenDecal
            | PartType::Delta
            | PartType::Drv
            | PartType::Frame
            | PartType::Accessories => PartFamily::Unconfigured,
        }
    }

    /// Whether width and height must be entered before calculating
    pub fn requires_dimensions(&self) -> bool {
        !matches!(self, PartType::Bullet | PartType::Frame | PartType::Accessories)
    }

    /// Part types whose results are worth a detailed breakdown in the UI
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            PartType::DigitalPrint | PartType::Magnet | PartType::OpusCutDecal | PartType::VhbTape
        )
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Part groups, in dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartGroup {
    #[serde(rename = "signs")]
    Signs,
    #[serde(rename = "decals")]
    Decals,
    #[default]
    #[serde(rename = "lineMarkers")]
    LineMarkers,
    #[serde(rename = "other")]
    Other,
}

impl PartGroup {
    pub const ALL: [PartGroup; 4] = [
        PartGroup::Signs,
        PartGroup::Decals,
        PartGroup::LineMarkers,
        PartGroup::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PartGroup::Signs => "signs",
            PartGroup::Decals => "decals",
            PartGroup::LineMarkers => "lineMarkers",
            PartGroup::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == code.trim())
            .ok_or_else(|| CalcError::invalid_option("part_group", code, "Unknown part group"))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartGroup::Signs => "Signs",
            PartGroup::Decals => "Decals",
            PartGroup::LineMarkers => "Markers",
            PartGroup::Other => "Other",
        }
    }

    /// Member part types in dropdown order
    pub fn members(&self) -> &'static [PartType] {
        match self {
            PartGroup::Signs => &[
                PartType::AluminumSign,
                PartType::AcmSign,
                PartType::HdpeSign,
                PartType::Corrugated,
            ],
            PartGroup::Decals => &[
                PartType::DigitalPrint,
                PartType::Magnet,
                PartType::Banner,
                PartType::OpusCutDecal,
                PartType::ScreenDecal,
            ],
            PartGroup::LineMarkers => &[PartType::Bullet, PartType::Delta, PartType::Drv],
            PartGroup::Other => &[PartType::VhbTape, PartType::Frame, PartType::Accessories],
        }
    }

    /// The part type selected when the estimator switches to this group
    pub fn first_part_type(&self) -> PartType {
        self.members()[0]
    }
}
