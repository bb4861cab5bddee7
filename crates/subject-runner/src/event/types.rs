//! Tipos de evento de un run y estructura `RunEvent`.
//!
//! Rol en el run:
//! - El `SuiteRunner` emite un evento por cada transición observable
//!   (entrada/salida de suite, resultado de test, fallo de hook).
//! - La secuencia permite reconstruir qué hooks se ejecutaron y en qué orden
//!   sin inspeccionar el `ExecutionContext`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::suite::HookPhase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Primer evento de un run.
    RunStarted { root: String, test_count: usize },
    /// Los hooks de entrada de la suite van a ejecutarse.
    SuiteEntered { suite: String },
    /// Un hook de entrada o salida devolvió error.
    HookFailed { suite: String, phase: HookPhase, error: String },
    TestPassed { title: String },
    /// `context` es el `fingerprint` del contexto en el momento del fallo.
    TestFailed { title: String, error: String, context: String },
    /// Test no ejecutado (hook de entrada fallido o bail).
    TestSkipped { title: String, reason: String },
    /// Los hooks de salida de la suite ya se ejecutaron.
    SuiteExited { suite: String },
    /// Evento de cierre con el resumen del run.
    RunCompleted { passed: usize, failed: usize, skipped: usize },
}

impl RunEventKind {
    /// Código de una letra, útil para comparar secuencias en tests y CLI.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RunStarted { .. } => "R",
            Self::SuiteEntered { .. } => "E",
            Self::HookFailed { .. } => "H",
            Self::TestPassed { .. } => "P",
            Self::TestFailed { .. } => "F",
            Self::TestSkipped { .. } => "S",
            Self::SuiteExited { .. } => "X",
            Self::RunCompleted { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato
}
