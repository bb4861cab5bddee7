//! Pasada de definición de suites.
//!
//! Mientras dura la pasada, `Definition` queda enlazado como host de
//! `subject_core` en el hilo actual: cualquier `subject(..)` / `property(..)`
//! se registra sobre la suite en la cima del stack, que siempre es la suite
//! más interna en definición.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use subject_core::{bind_host, ExecutionContext, HostHooks, ScopeHook, SubjectError};

use super::{HookPhase, Suite};
use crate::errors::{RunnerError, TestFailure};

pub(crate) struct Definition {
    stack: RefCell<Vec<Suite>>,
}

impl Definition {
    fn new(root: Suite) -> Self {
        Self { stack: RefCell::new(vec![root]) }
    }

    fn push_hook(&self, phase: HookPhase, hook: ScopeHook) -> Result<(), SubjectError> {
        let mut stack = self.stack.borrow_mut();
        let suite = stack.last_mut()
                         .ok_or(SubjectError::NoActiveSuite { hook: phase.hook_name() })?;
        debug!("suite `{}`: {} hook registered", suite.title, phase.hook_name());
        suite.push_hook(phase, hook);
        Ok(())
    }

    fn with_top(&self, f: impl FnOnce(&mut Suite)) {
        if let Some(suite) = self.stack.borrow_mut().last_mut() {
            f(suite);
        }
    }
}

impl HostHooks for Definition {
    fn before(&self, hook: ScopeHook) -> Result<(), SubjectError> {
        self.push_hook(HookPhase::Entry, hook)
    }

    fn after(&self, hook: ScopeHook) -> Result<(), SubjectError> {
        self.push_hook(HookPhase::Exit, hook)
    }
}

/// Ejecuta una pasada de definición completa y devuelve la suite raíz.
///
/// El host enlazado es nuevo en cada pasada y se retira al terminar, aunque
/// `body` falle.
pub(crate) fn define<F>(title: String, body: F) -> Result<Suite, RunnerError>
    where F: FnOnce(&SuiteScope<'_>) -> Result<(), RunnerError>
{
    let def = Rc::new(Definition::new(Suite::new(title)));
    {
        let _bound = bind_host(def.clone());
        body(&SuiteScope { def: &def })?;
    }
    let root = def.stack.borrow_mut().pop();
    root.ok_or_else(|| RunnerError::Definition("root suite missing after definition".into()))
}

/// Handle de la suite en definición, al estilo `describe` / `it`.
pub struct SuiteScope<'a> {
    def: &'a Definition,
}

impl SuiteScope<'_> {
    /// Define una suite anidada. Las declaraciones hechas dentro de `body`
    /// pertenecen a ella.
    pub fn describe<F>(&self, title: impl Into<String>, body: F) -> Result<(), RunnerError>
        where F: FnOnce(&SuiteScope<'_>) -> Result<(), RunnerError>
    {
        self.def.stack.borrow_mut().push(Suite::new(title));
        let result = body(self);
        // se desapila aunque `body` falle para no dejar la definición torcida
        let suite = self.def.stack.borrow_mut().pop();
        result?;
        let suite = suite.ok_or_else(|| RunnerError::Definition("nested suite vanished".into()))?;
        self.def.with_top(|parent| parent.push_suite(suite));
        Ok(())
    }

    /// Declara un test en la suite actual.
    pub fn it<F>(&self, title: impl Into<String>, body: F)
        where F: Fn(&mut ExecutionContext) -> Result<(), TestFailure> + 'static
    {
        let title = title.into();
        self.def.with_top(|suite| suite.push_test(title, Box::new(body)));
    }

    /// Hook de entrada propio (sin subject).
    pub fn before<F>(&self, hook: F) -> Result<(), RunnerError>
        where F: Fn(&mut ExecutionContext) -> Result<(), SubjectError> + 'static
    {
        Ok(self.def.push_hook(HookPhase::Entry, Box::new(hook))?)
    }

    /// Hook de salida propio (sin subject).
    pub fn after<F>(&self, hook: F) -> Result<(), RunnerError>
        where F: Fn(&mut ExecutionContext) -> Result<(), SubjectError> + 'static
    {
        Ok(self.def.push_hook(HookPhase::Exit, Box::new(hook))?)
    }
}
