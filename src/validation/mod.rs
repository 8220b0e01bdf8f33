//! Rule-based field validation run by forms before submission.
//!
//! A [`Validator`] holds an ordered list of fields, each with a value and the
//! rules it must satisfy. [`Validator::validate`] runs every rule and keeps the
//! messages per field so the form can show them next to its inputs.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod rules;

type RuleFn = dyn Fn(&Value) -> Option<String> + Send + Sync;

/// A pure check mapping a value to an error message, or `None` when valid.
#[derive(Clone)]
pub struct Rule(Arc<RuleFn>);

impl Rule {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Runs the rule. Empty messages count as valid.
    pub fn check(&self, value: &Value) -> Option<String> {
        (self.0)(value).filter(|msg| !msg.is_empty())
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Rule")
    }
}

/// One field registered for validation.
#[derive(Clone, Debug)]
pub struct FieldValidation {
    pub name: String,
    pub value: Value,
    pub rules: Vec<Rule>,
}

impl FieldValidation {
    pub fn new(name: impl Into<String>, value: impl Into<Value>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            rules,
        }
    }

    fn run(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(&self.value))
            .collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("field `{0}` is already registered")]
    DuplicateField(String),
    #[error("field `{0}` could not be converted for validation: {1}")]
    Value(String, String),
}

/// Messages produced by the last validation run, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Messages for `name`, empty when the field is unknown or valid.
    pub fn get(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any field has at least one message.
    pub fn has_errors(&self) -> bool {
        self.0.values().any(|messages| !messages.is_empty())
    }

    /// Fields with messages, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    fn set(&mut self, name: &str, messages: Vec<String>) {
        self.0.insert(name.to_string(), messages);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (name, messages) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{name}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A validation session for one form submission.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    fields: Vec<FieldValidation>,
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from prebuilt fields, rejecting repeated names.
    pub fn with_fields(fields: Vec<FieldValidation>) -> Result<Self, ValidatorError> {
        let mut validator = Self::new();
        for field in fields {
            validator.push_field(field)?;
        }
        Ok(validator)
    }

    /// Registers a field with its current value and rules.
    ///
    /// Field names are unique within a session; a second registration under
    /// the same name fails and leaves the session untouched.
    pub fn add_validation(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        rules: Vec<Rule>,
    ) -> Result<&mut Self, ValidatorError> {
        self.push_field(FieldValidation::new(name, value, rules))?;
        Ok(self)
    }

    /// Like [`Validator::add_validation`] for any serializable value.
    pub fn add_serialized<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
        rules: Vec<Rule>,
    ) -> Result<&mut Self, ValidatorError> {
        let name = name.into();
        let value = serde_json::to_value(value)
            .map_err(|e| ValidatorError::Value(name.clone(), e.to_string()))?;
        self.add_validation(name, value, rules)
    }

    fn push_field(&mut self, field: FieldValidation) -> Result<(), ValidatorError> {
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(ValidatorError::DuplicateField(field.name));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Runs every rule of every field in registration order.
    ///
    /// Results replace those of any previous run. Returns `true` when at
    /// least one field produced a message.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for field in &self.fields {
            let messages = field.run();
            self.errors.set(&field.name, messages);
        }
        self.errors.has_errors()
    }

    /// Messages stored for `name` by the last [`Validator::validate`] run.
    pub fn get_error(&self, name: &str) -> &[String] {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validates and turns the outcome into a `Result`.
    pub fn into_result(mut self) -> Result<(), ValidationErrors> {
        if self.validate() {
            Err(self.errors)
        } else {
            Ok(())
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::{min, required};
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_reports_whether_any_field_failed() {
        let mut validator = Validator::new();
        validator
            .add_validation("name", "Sari", vec![min(3)])
            .unwrap()
            .add_validation("age", 12, vec![min(1)])
            .unwrap();
        assert!(!validator.validate());

        let mut validator = Validator::new();
        validator
            .add_validation("name", "Sari", vec![min(3)])
            .unwrap()
            .add_validation("age", 0, vec![min(1)])
            .unwrap();
        assert!(validator.validate());
        assert_eq!(validator.get_error("age"), &["minimal 1".to_string()]);
        assert!(validator.get_error("name").is_empty());
    }

    #[test]
    fn every_failing_rule_contributes_a_message_in_order() {
        let mut validator = Validator::new();
        validator
            .add_validation("address", "", vec![required(), min(5)])
            .unwrap();
        assert!(validator.validate());
        assert_eq!(
            validator.get_error("address"),
            &["wajib diisi".to_string(), "minimal 5 karakter".to_string()]
        );
    }

    #[test]
    fn unknown_fields_have_no_errors() {
        let mut validator = Validator::new();
        assert!(validator.get_error("missing").is_empty());
        assert!(!validator.validate());
        assert!(validator.get_error("missing").is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut validator = Validator::new();
        validator.add_validation("email", "a@b.c", vec![]).unwrap();
        let err = validator
            .add_validation("email", "", vec![required()])
            .unwrap_err();
        assert_eq!(err, ValidatorError::DuplicateField("email".to_string()));
        assert_eq!(validator.field_names().count(), 1);
        assert!(!validator.validate());
    }

    #[test]
    fn validate_is_idempotent() {
        let mut validator = Validator::new();
        validator
            .add_validation("telp", "08", vec![min(10), min(12)])
            .unwrap();
        assert!(validator.validate());
        assert!(validator.validate());
        assert_eq!(validator.get_error("telp").len(), 2);
    }

    #[test]
    fn empty_messages_count_as_valid() {
        let always_empty = Rule::new(|_| Some(String::new()));
        let mut validator = Validator::new();
        validator
            .add_validation("notes", json!(null), vec![always_empty])
            .unwrap();
        assert!(!validator.validate());
    }

    #[test]
    fn into_result_exposes_error_map() {
        let mut validator = Validator::new();
        validator
            .add_serialized("clinic_id", &0, vec![min(1)])
            .unwrap();
        let errors = validator.into_result().unwrap_err();
        assert_eq!(errors.get("clinic_id"), &["minimal 1".to_string()]);
        assert_eq!(errors.to_string(), "clinic_id: minimal 1");
    }
}
