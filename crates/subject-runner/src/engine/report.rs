use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Test fallido con su título completo, el error renderizado y el
/// fingerprint del contexto visible en ese momento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub title: String,
    pub error: String,
    pub context: String,
}

/// Resumen de un run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub hook_failures: usize,
    pub failures: Vec<FailureRecord>,
}

impl RunReport {
    pub fn new(run_id: Uuid) -> Self {
        Self { run_id,
               passed: 0,
               failed: 0,
               skipped: 0,
               hook_failures: 0,
               failures: Vec::new() }
    }

    /// Sin tests fallidos ni hooks fallidos.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.hook_failures == 0
    }
}
