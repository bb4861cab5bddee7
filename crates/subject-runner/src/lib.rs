//! subject-runner: host mínimo estilo mocha para `subject-core`.
//!
//! - `SuiteRunner::define` ejecuta la pasada de definición (`describe` / `it`
//!   / `before` / `after`) con el host enlazado para `subject` y `property`.
//! - `SuiteRunner::run` recorre el árbol con un `ExecutionContext` por run y
//!   emite `RunEvent`s a un `EventStore` append-only.
//! - `suite_file` carga suites declarativas desde JSON.
pub mod config;
pub mod engine;
pub mod errors;
pub mod event;
pub mod suite;
pub mod suite_file;

pub use config::{init_dotenv, RunnerConfig};
pub use engine::{FailureRecord, RunReport, SuiteRunner};
pub use errors::{ensure, RunnerError, TestFailure};
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use suite::{HookPhase, Suite, SuiteScope, TestCase};
pub use suite_file::{load_suite, parse_suite, SuiteFileError, SuiteSpec};
