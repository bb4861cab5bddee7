//! Suites declarativas en JSON.
//!
//! ```json
//! {
//!   "title": "Subjects",
//!   "subjects": [{ "name": "sub", "value": { "a": 1 } }],
//!   "properties": [{ "name": "a", "as": "x" }],
//!   "tests": [{ "title": "projects a", "expect": { "x": 1 } }],
//!   "suites": []
//! }
//! ```
//!
//! Los nombres llegan como JSON crudo y se validan en el core, de modo que un
//! `"name": 123` falla al construir la suite, antes de ejecutar nada. En
//! `expect`, `null` significa "clave ausente".

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use subject_core::ExecutionContext;
use thiserror::Error;

use crate::engine::SuiteRunner;
use crate::errors::{RunnerError, TestFailure};
use crate::suite::{Suite, SuiteScope};

#[derive(Debug, Error)]
pub enum SuiteFileError {
    #[error("cannot read suite file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid suite file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Definition(#[from] RunnerError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSpec {
    pub title: String,
    #[serde(default)]
    pub subjects: Vec<SubjectSpec>,
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
    #[serde(default)]
    pub tests: Vec<TestSpec>,
    #[serde(default)]
    pub suites: Vec<SuiteSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSpec {
    pub name: Value,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: Value,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub context_key: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSpec {
    pub title: String,
    #[serde(default)]
    pub expect: Map<String, Value>,
}

pub fn parse_suite(json: &str) -> Result<SuiteSpec, SuiteFileError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_suite(path: impl AsRef<Path>) -> Result<SuiteSpec, SuiteFileError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| SuiteFileError::Io { path: path.display().to_string(),
                                                                             source })?;
    parse_suite(&raw)
}

impl SuiteSpec {
    /// Ejecuta la pasada de definición y devuelve el árbol listo para correr.
    pub fn build(&self) -> Result<Suite, SuiteFileError> {
        Ok(SuiteRunner::define(self.title.clone(), |scope| self.declare(scope))?)
    }

    // orden dentro de una suite: subjects, luego properties
    fn declare(&self, scope: &SuiteScope<'_>) -> Result<(), RunnerError> {
        for s in &self.subjects {
            subject_core::subject(s.name.clone(), s.value.clone())?;
        }
        for p in &self.properties {
            match &p.context_key {
                Some(key) => subject_core::property_as(p.name.clone(), key.clone())?,
                None => subject_core::property(p.name.clone())?,
            }
        }
        for t in &self.tests {
            let expect = t.expect.clone();
            scope.it(t.title.clone(), move |ctx| check_expectations(ctx, &expect));
        }
        for child in &self.suites {
            scope.describe(child.title.clone(), |inner| child.declare(inner))?;
        }
        Ok(())
    }
}

fn check_expectations(ctx: &ExecutionContext, expect: &Map<String, Value>) -> Result<(), TestFailure> {
    for (key, expected) in expect {
        let actual = ctx.get(key).cloned().unwrap_or(Value::Null);
        if &actual != expected {
            return Err(TestFailure::Mismatch { key: key.clone(),
                                               expected: expected.clone(),
                                               actual });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sections_default_to_empty() {
        let spec = parse_suite(r#"{ "title": "bare" }"#).unwrap();
        assert!(spec.subjects.is_empty() && spec.tests.is_empty() && spec.suites.is_empty());
    }

    #[test]
    fn property_alias_uses_as_key() {
        let spec = parse_suite(r#"{ "title": "t", "properties": [{ "name": "a", "as": "x" }] }"#).unwrap();
        assert_eq!(spec.properties[0].context_key, Some(json!("x")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_suite("{ nope"), Err(SuiteFileError::Parse(_))));
    }

    #[test]
    fn expectations_treat_null_as_absent() {
        let mut ctx = ExecutionContext::new();
        ctx.set("x", json!(1));
        let ok = json!({"x": 1, "gone": null});
        assert!(check_expectations(&ctx, ok.as_object().unwrap()).is_ok());
        let bad = json!({"x": 2});
        let err = check_expectations(&ctx, bad.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, TestFailure::Mismatch { ref key, .. } if key == "x"));
    }
}
