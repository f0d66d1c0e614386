//! # Calculator Session
//!
//! State behind an estimating form: which part group and part type are
//! selected, the fields the estimator has typed, and the outcome of the last
//! calculation.
//!
//! The outcome is a single value, so a result and an error can never be shown
//! together. Changing the selection discards whatever was shown.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::session::{CalculatorSession, Outcome};
//! use calc_core::calculations::{PartGroup, PartType};
//! use calc_core::materials::MaterialRegistry;
//!
//! let mut session = CalculatorSession::new();
//! session.select_group(PartGroup::Signs);
//! assert_eq!(session.part_type(), PartType::AluminumSign);
//!
//! session.set_size("48", "24");
//! session.calculate(MaterialRegistry::standard());
//! assert!(matches!(session.outcome(), Outcome::Calculated(_)));
//! ```

use serde::Serialize;

use crate::calculations::{
    self, CalculationInput, CalculationResult, OptionValue, PartGroup, PartType,
};
use crate::errors::CalcError;
use crate::materials::MaterialRegistry;

/// What the form currently shows below the inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value")]
pub enum Outcome {
    #[default]
    Empty,
    Calculated(CalculationResult),
    Failed(CalcError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorSession {
    group: PartGroup,
    part_type: PartType,
    form: CalculationInput,
    outcome: Outcome,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        let group = PartGroup::default();
        let part_type = group.first_part_type();
        CalculatorSession {
            group,
            part_type,
            form: CalculationInput::new(part_type.code()),
            outcome: Outcome::Empty,
        }
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> PartGroup {
        self.group
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    pub fn form(&self) -> &CalculationInput {
        &self.form
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match &self.outcome {
            Outcome::Calculated(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CalcError> {
        match &self.outcome {
            Outcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Switch group; the part type resets to the group's first member.
    pub fn select_group(&mut self, group: PartGroup) {
        self.group = group;
        self.set_part_type(group.first_part_type());
    }

    /// Switch part type, following it into its own group if needed.
    pub fn select_part_type(&mut self, part_type: PartType) {
        self.group = part_type.group();
        self.set_part_type(part_type);
    }

    fn set_part_type(&mut self, part_type: PartType) {
        self.part_type = part_type;
        self.form.part_type = part_type.code().to_string();
        self.outcome = Outcome::Empty;
    }

    pub fn set_size(&mut self, width: impl Into<String>, height: impl Into<String>) {
        self.form.width = Some(width.into());
        self.form.height = Some(height.into());
    }

    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.form.options.insert(key.to_string(), value.into());
    }

    /// Run the selected calculation on the current form and store the outcome.
    pub fn calculate(&mut self, registry: &MaterialRegistry) -> &Outcome {
        self.outcome = match calculations::calculate(&self.form, registry) {
            Ok(result) => Outcome::Calculated(result),
            Err(error) => {
                tracing::debug!(code = error.error_code(), "calculation failed");
                Outcome::Failed(error)
            }
        };
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::input::keys;

    fn registry() -> MaterialRegistry {
        MaterialRegistry::default()
    }

    #[test]
    fn test_default_selection() {
        let session = CalculatorSession::new();
        assert_eq!(session.group(), PartGroup::LineMarkers);
        assert_eq!(session.part_type(), PartType::Bullet);
        assert_eq!(session.outcome(), &Outcome::Empty);
    }

    #[test]
    fn test_bullet_calculates_without_dimensions() {
        let mut session = CalculatorSession::new();
        session.calculate(&registry());
        let result = session.result().unwrap();
        assert!((result.value("weight").unwrap() - 3.5614).abs() < 1e-9);
    }

    #[test]
    fn test_select_group_resets_part_type_and_outcome() {
        let mut session = CalculatorSession::new();
        session.calculate(&registry());
        assert!(session.result().is_some());

        session.select_group(PartGroup::Decals);
        assert_eq!(session.part_type(), PartType::DigitalPrint);
        assert_eq!(session.form().part_type, "digital_print");
        assert_eq!(session.outcome(), &Outcome::Empty);
    }

    #[test]
    fn test_select_part_type_follows_group() {
        let mut session = CalculatorSession::new();
        session.select_part_type(PartType::VhbTape);
        assert_eq!(session.group(), PartGroup::Other);
        assert_eq!(session.part_type(), PartType::VhbTape);
    }

    #[test]
    fn test_result_and_error_are_exclusive() {
        let mut session = CalculatorSession::new();
        session.select_part_type(PartType::Corrugated);

        session.set_size("abc", "24");
        session.calculate(&registry());
        assert!(session.result().is_none());
        assert_eq!(session.error().unwrap().error_code(), "INVALID_DIMENSIONS");

        session.set_size("24", "18");
        session.calculate(&registry());
        assert!(session.error().is_none());
        assert_eq!(session.result().unwrap().value("qty"), Some(10.0));

        session.set_size("", "18");
        session.calculate(&registry());
        assert!(session.result().is_none());
        assert!(session.error().is_some());
    }

    #[test]
    fn test_options_are_kept_across_calculations() {
        let mut session = CalculatorSession::new();
        session.select_part_type(PartType::Magnet);
        session.set_size("12", "18");
        session.set_option(keys::ROLL_WIDTH, "30");
        session.calculate(&registry());
        assert!(session.result().is_some());
        assert_eq!(
            session.form().options.get(keys::ROLL_WIDTH),
            Some(&OptionValue::from("30"))
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let mut session = CalculatorSession::new();
        session.select_part_type(PartType::Frame);
        session.calculate(&registry());
        let json = serde_json::to_string(session.outcome()).unwrap();
        assert!(json.contains("\"state\":\"Calculated\""));
    }
}
