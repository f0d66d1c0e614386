//! # calc_core - Sign Shop Estimating Engine
//!
//! `calc_core` turns an estimator's part selection and dimensions into
//! material quantities, waste, tape and hardware counts, and shipping weights.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate` is a pure function of the input record and a
//!   [`MaterialRegistry`]
//! - **JSON-First**: inputs, results and errors implement Serialize
//! - **Rich Errors**: one structured [`CalcError`] per failed calculation
//! - **Configurable**: shop constants live in the registry and can be
//!   overridden from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{calculate, CalculationInput, MaterialRegistry};
//!
//! let input = CalculationInput::new("aluminum_sign").with_size("48", "24");
//! let result = calculate(&input, MaterialRegistry::standard()).unwrap();
//!
//! for (label, value) in result.display_rows() {
//!     println!("{} {}", label, value);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Part types, input resolution and the estimating algorithms
//! - [`materials`] - Material registry: densities, stock sizes, shop rules
//! - [`session`] - Form state for an interactive calculator
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! The engine emits `tracing` events and never installs a subscriber; that is
//! left to the binary embedding it.

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod session;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationInput, CalculationResult, PartGroup, PartType};
pub use errors::{CalcError, CalcResult};
pub use materials::MaterialRegistry;
pub use session::CalculatorSession;
