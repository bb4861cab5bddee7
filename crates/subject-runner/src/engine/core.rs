//! Core SuiteRunner implementation

use log::{debug, info, warn};
use subject_core::ExecutionContext;
use uuid::Uuid;

use super::report::{FailureRecord, RunReport};
use crate::config::RunnerConfig;
use crate::errors::RunnerError;
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
use crate::suite::{definition, join_title, HookPhase, Suite, SuiteScope, TestCase};

/// Ejecuta un árbol de suites sobre un único `ExecutionContext` por run.
///
/// Orden dentro de una suite: hooks de entrada (orden de registro), tests,
/// suites hijas, hooks de salida (orden inverso de registro). Un hook de
/// salida sólo se ejecuta si todos los hooks de entrada registrados antes que
/// él en la misma suite terminaron bien.
#[derive(Debug)]
pub struct SuiteRunner<E: EventStore = InMemoryEventStore> {
    root: Suite,
    config: RunnerConfig,
    event_store: E,
}

impl SuiteRunner<InMemoryEventStore> {
    /// Runner con store de eventos en memoria.
    pub fn new(root: Suite) -> Self {
        Self::with_store(root, InMemoryEventStore::default())
    }

    /// Pasada de definición: `subject` / `property` / `scope.it` dentro de
    /// `body` se registran sobre la suite que se está definiendo.
    pub fn define<F>(title: impl Into<String>, body: F) -> Result<Suite, RunnerError>
        where F: FnOnce(&SuiteScope<'_>) -> Result<(), RunnerError>
    {
        definition::define(title.into(), body)
    }
}

impl<E: EventStore> SuiteRunner<E> {
    pub fn with_store(root: Suite, event_store: E) -> Self {
        Self { root,
               config: RunnerConfig::default(),
               event_store }
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Suite {
        &self.root
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Eventos de un run concreto.
    pub fn events_for(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.event_store.list(run_id)
    }

    /// Ejecuta el árbol completo con un contexto nuevo.
    pub fn run(&mut self) -> RunReport {
        let run_id = Uuid::new_v4();
        let mut exec = Execution { config: &self.config,
                                   store: &mut self.event_store,
                                   report: RunReport::new(run_id),
                                   bailed: false };
        info!("run {run_id} started: `{}`", self.root.title);
        exec.emit(RunEventKind::RunStarted { root: self.root.title.clone(),
                                             test_count: self.root.test_count() });

        let mut ctx = ExecutionContext::new();
        exec.run_suite(&self.root, "", &mut ctx);

        let report = exec.report;
        let summary = RunEventKind::RunCompleted { passed: report.passed,
                                                   failed: report.failed,
                                                   skipped: report.skipped };
        self.event_store.append_kind(run_id, summary);
        info!("run {run_id} completed: {} passed, {} failed, {} skipped",
              report.passed, report.failed, report.skipped);
        report
    }
}

/// Estado mutable de un run en curso.
struct Execution<'a, E: EventStore> {
    config: &'a RunnerConfig,
    store: &'a mut E,
    report: RunReport,
    bailed: bool,
}

impl<E: EventStore> Execution<'_, E> {
    fn emit(&mut self, kind: RunEventKind) {
        self.store.append_kind(self.report.run_id, kind);
    }

    fn run_suite(&mut self, suite: &Suite, prefix: &str, ctx: &mut ExecutionContext) {
        let title = join_title(prefix, &suite.title);
        if !self.selects_any(suite, prefix) {
            return;
        }
        if self.bailed {
            self.skip_tests(suite, prefix, "bail");
            return;
        }

        debug!("entering suite `{title}`");
        self.emit(RunEventKind::SuiteEntered { suite: title.clone() });

        let mut failed_at = None;
        for (i, slot) in suite.hooks.iter().enumerate() {
            if slot.phase != HookPhase::Entry {
                continue;
            }
            if let Err(e) = (slot.hook)(ctx) {
                self.hook_failed(&title, HookPhase::Entry, e.to_string());
                failed_at = Some(i);
                break;
            }
        }

        if failed_at.is_some() {
            self.skip_tests(suite, prefix, "entry hook failed");
        } else {
            for test in &suite.tests {
                self.run_test(test, &title, ctx);
            }
            for child in &suite.suites {
                self.run_suite(child, &title, ctx);
            }
        }

        // sólo los hooks de salida "armados" antes del primer fallo de entrada
        let armed = failed_at.unwrap_or(suite.hooks.len());
        for slot in suite.hooks[..armed].iter().rev() {
            if slot.phase != HookPhase::Exit {
                continue;
            }
            if let Err(e) = (slot.hook)(ctx) {
                self.hook_failed(&title, HookPhase::Exit, e.to_string());
            }
        }

        self.emit(RunEventKind::SuiteExited { suite: title.clone() });
        debug!("left suite `{title}`");
    }

    fn run_test(&mut self, test: &TestCase, prefix: &str, ctx: &mut ExecutionContext) {
        let title = join_title(prefix, &test.title);
        if !self.config.selects(&title) {
            return;
        }
        if self.bailed {
            self.skip(title, "bail");
            return;
        }

        match (test.body)(ctx) {
            Ok(()) => {
                self.report.passed += 1;
                self.emit(RunEventKind::TestPassed { title });
            }
            Err(e) => {
                let error = e.to_string();
                let context = ctx.fingerprint();
                warn!("test `{title}` failed: {error} (context {})", context.get(..12).unwrap_or(&context));
                self.report.failed += 1;
                self.report.failures.push(FailureRecord { title: title.clone(),
                                                          error: error.clone(),
                                                          context: context.clone() });
                self.emit(RunEventKind::TestFailed { title, error, context });
                self.bailed |= self.config.bail;
            }
        }
    }

    fn hook_failed(&mut self, suite: &str, phase: HookPhase, error: String) {
        warn!("{} hook of `{suite}` failed: {error}", phase.hook_name());
        self.report.hook_failures += 1;
        self.emit(RunEventKind::HookFailed { suite: suite.to_string(),
                                             phase,
                                             error });
        self.bailed |= self.config.bail;
    }

    fn skip(&mut self, title: String, reason: &str) {
        self.report.skipped += 1;
        self.emit(RunEventKind::TestSkipped { title,
                                              reason: reason.to_string() });
    }

    /// Marca como saltados todos los tests seleccionados de `suite` y sus hijas.
    fn skip_tests(&mut self, suite: &Suite, prefix: &str, reason: &str) {
        let title = join_title(prefix, &suite.title);
        for test in &suite.tests {
            let full = join_title(&title, &test.title);
            if self.config.selects(&full) {
                self.skip(full, reason);
            }
        }
        for child in &suite.suites {
            self.skip_tests(child, &title, reason);
        }
    }

    /// ¿Queda algún test de `suite` que pase el filtro?
    fn selects_any(&self, suite: &Suite, prefix: &str) -> bool {
        let title = join_title(prefix, &suite.title);
        suite.tests.iter().any(|t| self.config.selects(&join_title(&title, &t.title)))
        || suite.suites.iter().any(|c| self.selects_any(c, &title))
    }
}
