//! `HookAdapter`: indirección reemplazable sobre las primitivas del host.
//!
//! Por defecto delega en `host::before` / `host::after`, que resuelven el host
//! enlazado en cada llamada. Un adapter puede crearse una vez y reutilizarse
//! entre pasadas de definición: nunca retiene el host de una pasada anterior.

use std::fmt;
use std::rc::Rc;

use log::debug;

use super::{host, ScopeHook};
use crate::errors::SubjectError;

type Register = Rc<dyn Fn(ScopeHook) -> Result<(), SubjectError>>;

#[derive(Clone)]
pub struct HookAdapter {
    entry: Register,
    exit: Register,
}

impl HookAdapter {
    /// Adapter con funciones de registro propias (p.ej. para un host que no
    /// usa el enlace por hilo).
    pub fn new<E, X>(entry: E, exit: X) -> Self
        where E: Fn(ScopeHook) -> Result<(), SubjectError> + 'static,
              X: Fn(ScopeHook) -> Result<(), SubjectError> + 'static
    {
        Self { entry: Rc::new(entry),
               exit: Rc::new(exit) }
    }

    pub fn register_entry(&self, hook: ScopeHook) -> Result<(), SubjectError> {
        debug!("registering scope entry hook");
        (self.entry)(hook)
    }

    pub fn register_exit(&self, hook: ScopeHook) -> Result<(), SubjectError> {
        debug!("registering scope exit hook");
        (self.exit)(hook)
    }
}

impl Default for HookAdapter {
    fn default() -> Self {
        Self::new(host::before, host::after)
    }
}

impl fmt::Debug for HookAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HookAdapter(..)")
    }
}
