//! Errores del runner: definición de suites y fallos de tests.

use serde_json::Value;
use subject_core::SubjectError;
use thiserror::Error;

/// Error durante la pasada de definición.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error("invalid suite definition: {0}")]
    Definition(String),
}

/// Fallo de un test individual. Nunca aborta el run completo.
#[derive(Debug, Error)]
pub enum TestFailure {
    #[error("assertion failed: {0}")]
    Assertion(String),
    #[error("expected `{key}` to be {expected}, got {actual}")]
    Mismatch { key: String, expected: Value, actual: Value },
    #[error(transparent)]
    Subject(#[from] SubjectError),
}

impl TestFailure {
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }
}

/// Falla con `TestFailure::Assertion` si la condición no se cumple.
pub fn ensure(cond: bool, msg: impl Into<String>) -> Result<(), TestFailure> {
    if cond {
        Ok(())
    } else {
        Err(TestFailure::assertion(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mismatch_renders_json_values() {
        let f = TestFailure::Mismatch { key: "x".into(),
                                        expected: json!(1),
                                        actual: Value::Null };
        assert_eq!(f.to_string(), "expected `x` to be 1, got null");
    }

    #[test]
    fn ensure_maps_false_to_assertion() {
        assert!(ensure(true, "never").is_ok());
        assert_eq!(ensure(false, "boom").unwrap_err().to_string(), "assertion failed: boom");
    }
}
