//! Árbol de suites: hooks de scope, tests y suites anidadas.
//!
//! Un `Suite` se construye durante la pasada de definición (`definition`) y
//! después es inmutable; el `SuiteRunner` sólo lo recorre.

pub mod definition;

pub use definition::SuiteScope;

use serde::{Deserialize, Serialize};
use subject_core::{ExecutionContext, ScopeHook};

use crate::errors::TestFailure;

/// Cuerpo de un test.
pub type TestFn = Box<dyn Fn(&mut ExecutionContext) -> Result<(), TestFailure>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookPhase {
    Entry,
    Exit,
}

impl HookPhase {
    pub fn hook_name(self) -> &'static str {
        match self {
            Self::Entry => "before",
            Self::Exit => "after",
        }
    }
}

pub(crate) struct HookSlot {
    pub(crate) phase: HookPhase,
    pub(crate) hook: ScopeHook,
}

pub struct TestCase {
    pub title: String,
    pub(crate) body: TestFn,
}

pub struct Suite {
    pub title: String,
    // orden de registro; entrada y salida intercaladas
    pub(crate) hooks: Vec<HookSlot>,
    pub(crate) tests: Vec<TestCase>,
    pub(crate) suites: Vec<Suite>,
}

impl Suite {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(),
               hooks: Vec::new(),
               tests: Vec::new(),
               suites: Vec::new() }
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Cantidad de hooks registrados en esta suite para la fase dada.
    pub fn hook_count(&self, phase: HookPhase) -> usize {
        self.hooks.iter().filter(|h| h.phase == phase).count()
    }

    /// Tests de esta suite y de todas sus descendientes.
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.suites.iter().map(Suite::test_count).sum::<usize>()
    }

    pub(crate) fn push_hook(&mut self, phase: HookPhase, hook: ScopeHook) {
        self.hooks.push(HookSlot { phase, hook });
    }

    pub(crate) fn push_test(&mut self, title: String, body: TestFn) {
        self.tests.push(TestCase { title, body });
    }

    pub(crate) fn push_suite(&mut self, suite: Suite) {
        self.suites.push(suite);
    }
}

impl std::fmt::Debug for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
         .field("title", &self.title)
         .field("entry_hooks", &self.hook_count(HookPhase::Entry))
         .field("exit_hooks", &self.hook_count(HookPhase::Exit))
         .field("tests", &self.tests.iter().map(|t| &t.title).collect::<Vec<_>>())
         .field("suites", &self.suites)
         .finish()
    }
}

/// Título completo al estilo mocha: segmentos no vacíos separados por espacio.
pub(crate) fn join_title(prefix: &str, title: &str) -> String {
    match (prefix.is_empty(), title.is_empty()) {
        (true, _) => title.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix} {title}"),
    }
}
