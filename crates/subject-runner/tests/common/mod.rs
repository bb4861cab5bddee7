//! Helpers compartidos por los tests de integración del runner.
#![allow(dead_code)]

use serde_json::Value;
use subject_core::ExecutionContext;
use subject_runner::{ensure, RunReport, Suite, SuiteRunner, TestFailure};

/// `ctx[key] == expected`.
pub fn expect(ctx: &ExecutionContext, key: &str, expected: Value) -> Result<(), TestFailure> {
    let actual = ctx.get(key).cloned();
    ensure(actual.as_ref() == Some(&expected),
           format!("expected `{key}` = {expected}, got {actual:?}"))
}

/// `key` no está en el contexto.
pub fn expect_absent(ctx: &ExecutionContext, key: &str) -> Result<(), TestFailure> {
    ensure(!ctx.contains_key(key), format!("`{key}` should be absent, got {:?}", ctx.get(key)))
}

/// Corre la suite y devuelve runner (para inspeccionar eventos) y reporte.
pub fn run(root: Suite) -> (SuiteRunner, RunReport) {
    let mut runner = SuiteRunner::new(root);
    let report = runner.run();
    (runner, report)
}

/// Falla el test de Rust mostrando los tests fallidos del run.
pub fn assert_all_passed(report: &RunReport, expected: usize) {
    assert!(report.is_success(), "failures: {:#?}", report.failures);
    assert_eq!(report.passed, expected, "{report:?}");
    assert_eq!(report.skipped, 0);
}
