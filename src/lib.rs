//! SubjectFlow
//!
//! Librería de conveniencia sobre los crates del workspace:
//! - `subject_core`: subjects con scope, propiedades y stack oculto.
//! - `subject_runner`: host estilo mocha, eventos de run y suites en JSON.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub use subject_core;
pub use subject_runner;

pub mod prelude {
    pub use subject_core::{factory, property, property_as, subject, ExecutionContext, SubjectError};
    pub use subject_runner::{ensure, RunReport, RunnerConfig, SuiteRunner, TestFailure};
}

use std::path::Path;

use subject_runner::{load_suite, RunReport, RunnerConfig, SuiteFileError, SuiteRunner};

/// Carga, define y ejecuta una suite JSON con la configuración dada.
pub fn run_suite_file(path: impl AsRef<Path>, config: RunnerConfig) -> Result<RunReport, SuiteFileError> {
    let root = load_suite(path)?.build()?;
    Ok(SuiteRunner::new(root).with_config(config).run())
}
