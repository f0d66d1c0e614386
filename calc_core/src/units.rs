//! # Unit Types
//!
//! Type-safe wrappers for the shop's units. These are plain f64 newtypes that
//! serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! Everything on the shop floor is measured in US customary units:
//! - Length: inches (in), feet (ft)
//! - Area: square inches (in²), square feet (ft²)
//! - Weight: pounds (lb), pounds per linear foot (lb/ft)
//! - Density: pounds per cubic inch (lb/in³)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Feet, Inches, SqFt, SqIn};
//!
//! let run: Feet = Inches(36.0).into();
//! assert_eq!(run.0, 3.0);
//!
//! let area: SqFt = SqIn(288.0).into();
//! assert_eq!(area.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqFt> for SqIn {
    fn from(sqft: SqFt) -> Self {
        SqIn(sqft.0 * 144.0)
    }
}

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / 144.0)
    }
}

impl Mul for Inches {
    type Output = SqIn;
    fn mul(self, rhs: Inches) -> SqIn {
        SqIn(self.0 * rhs.0)
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Linear weight in pounds per foot (tube stock)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerFt(pub f64);

/// Density in pounds per cubic inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerIn3(pub f64);

impl Mul<Feet> for LbPerFt {
    type Output = Pounds;
    fn mul(self, rhs: Feet) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqFt);
impl_arithmetic!(Pounds);
impl_arithmetic!(LbPerFt);
impl_arithmetic!(LbPerIn3);
