use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, StateError};

/// One structured validation error record.
///
/// The field names are part of the wire contract: schema rejection payloads
/// embed these records verbatim for client tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// JSON Pointer to the offending location in the input.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

/// Result of running a compiled validator against raw input.
///
/// Never partially valid: a single issue rejects the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<ValidationIssue>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// A compiled schema, ready to test arbitrary JSON input.
pub struct SchemaValidator {
    compiled: Validator,
}

impl SchemaValidator {
    /// Compile a JSON Schema definition.
    pub(crate) fn from_definition(definition: &Value) -> Result<Self> {
        let compiled = jsonschema::validator_for(definition)
            .map_err(|err| StateError::CompileFailed(err.to_string()))?;
        Ok(Self { compiled })
    }

    /// Validate input, collecting every reported error with its location.
    pub fn validate(&self, input: &Value) -> ValidationOutcome {
        let issues: Vec<ValidationIssue> = self
            .compiled
            .iter_errors(input)
            .map(|err| ValidationIssue {
                path: err.instance_path().to_string(),
                message: err.to_string(),
            })
            .collect();

        if issues.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(issues)
        }
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_input_passes() {
        let validator = SchemaValidator::from_definition(&json!({
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name"]
        }))
        .unwrap();

        assert!(validator.validate(&json!({"name": "Ada"})).is_valid());
    }

    #[test]
    fn invalid_input_reports_path_and_message() {
        let validator = SchemaValidator::from_definition(&json!({
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name"]
        }))
        .unwrap();

        let outcome = validator.validate(&json!({"name": 123}));
        let ValidationOutcome::Invalid(issues) = outcome else {
            panic!("expected invalid outcome");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "/name");
        assert!(!issues[0].message.is_empty());
    }

    #[test]
    fn every_violation_is_collected() {
        let validator = SchemaValidator::from_definition(&json!({
            "type": "object",
            "properties": {
                "a": { "type": "integer" },
                "b": { "type": "string" }
            },
            "required": ["a", "b"]
        }))
        .unwrap();

        let outcome = validator.validate(&json!({"a": "x", "b": 1}));
        let ValidationOutcome::Invalid(issues) = outcome else {
            panic!("expected invalid outcome");
        };
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn issue_serializes_with_wire_field_names() {
        let issue = ValidationIssue {
            path: "/name".to_string(),
            message: "not a string".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&issue).unwrap(),
            json!({"path": "/name", "message": "not a string"})
        );
    }

    #[test]
    fn bad_definition_fails_compile() {
        let result = SchemaValidator::from_definition(&json!({"type": "definitely-not-a-type"}));
        assert!(matches!(result, Err(StateError::CompileFailed(_))));
    }
}
