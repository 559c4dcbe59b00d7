use std::fmt;

/// Why [`validate_key`](crate::RedactionEngine::validate_key) judged a value
/// invalid.
///
/// The three variants let callers distinguish "unknown rule" from "wrong
/// shape" from "right shape, wrong value". Failures are surfaced as data
/// inside [`ValidationResult`](crate::ValidationResult), never as panics,
/// because validation is expected to run inside hot logging paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// No rule is registered under the requested name.
    RuleNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// The value matched none of the rule's patterns.
    FormatMismatch,
    /// The value matched a pattern but the rule's validator rejected it.
    RejectedByValidator,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::RuleNotFound { name } => {
                write!(f, "pattern '{}' not found in registry", name)
            }
            ValidationFailure::FormatMismatch => {
                write!(f, "value does not match pattern format")
            }
            ValidationFailure::RejectedByValidator => {
                write!(f, "value failed validation")
            }
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Errors from the [`Secret`](crate::Secret) lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretError {
    /// The secret was disposed and its value is gone.
    Disposed,
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretError::Disposed => write!(f, "secret value has been disposed"),
        }
    }
}

impl std::error::Error for SecretError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_have_distinct_messages() {
        let not_found = ValidationFailure::RuleNotFound {
            name: "ghost".to_string(),
        };
        assert_eq!(
            format!("{}", not_found),
            "pattern 'ghost' not found in registry"
        );
        assert_eq!(
            format!("{}", ValidationFailure::FormatMismatch),
            "value does not match pattern format"
        );
        assert_eq!(
            format!("{}", ValidationFailure::RejectedByValidator),
            "value failed validation"
        );
    }

    #[test]
    fn secret_error_display() {
        assert_eq!(
            format!("{}", SecretError::Disposed),
            "secret value has been disposed"
        );
    }
}
