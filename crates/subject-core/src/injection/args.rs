//! Validación de argumentos de declaración.
//!
//! Los argumentos llegan como `serde_json::Value` porque pueden venir tanto
//! de código Rust (`"name"`, `json!({..})`) como de definiciones declarativas
//! cargadas desde JSON.

use serde_json::Value;

use crate::constants::SUBJECTS_KEY;
use crate::errors::SubjectError;
use crate::model::SubjectFactory;

/// Segundo argumento de `declare_subject`: valor o factory.
#[derive(Debug, Clone)]
pub enum SubjectArg {
    Value(Value),
    Factory(SubjectFactory),
}

impl From<Value> for SubjectArg {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<SubjectFactory> for SubjectArg {
    fn from(f: SubjectFactory) -> Self {
        Self::Factory(f)
    }
}

pub(crate) fn require_name(value: Value) -> Result<String, SubjectError> {
    require_key("name", value, "missing or not a string")
}

pub(crate) fn require_context_key(value: Value) -> Result<String, SubjectError> {
    require_key("contextKey", value, "not a string")
}

fn require_key(param: &'static str, value: Value, reason: &str) -> Result<String, SubjectError> {
    match value {
        Value::String(s) if s == SUBJECTS_KEY => {
            Err(SubjectError::invalid(param, format!("uses the reserved key `{SUBJECTS_KEY}`")))
        }
        Value::String(s) => Ok(s),
        _ => Err(SubjectError::invalid(param, reason)),
    }
}

/// La forma valor exige un objeto o array JSON presente: es la fuente de la
/// que `declare_property` lee propiedades.
pub(crate) fn require_object(value: Value) -> Result<Value, SubjectError> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        Value::Null => Err(SubjectError::invalid("object", "missing")),
        _ => Err(SubjectError::invalid("object", "not a JSON object, array nor a factory")),
    }
}
