//! Enlace con el host (test runner).
//!
//! El host instala su implementación de `HostHooks` durante cada pasada de
//! definición de suites y la retira al terminar. El enlace es por hilo: cada
//! hilo de test ve sólo su propio host.

use std::cell::RefCell;
use std::rc::Rc;

use super::ScopeHook;
use crate::errors::SubjectError;

/// Primitivas del host: registran un hook sobre la suite que se está
/// definiendo en ese momento.
pub trait HostHooks {
    /// Registra `hook` para ejecutarse al entrar al scope.
    fn before(&self, hook: ScopeHook) -> Result<(), SubjectError>;
    /// Registra `hook` para ejecutarse al salir del scope.
    fn after(&self, hook: ScopeHook) -> Result<(), SubjectError>;
}

thread_local! {
    static HOST: RefCell<Option<Rc<dyn HostHooks>>> = const { RefCell::new(None) };
}

/// Guard del enlace activo; al soltarse restaura el host anterior.
#[must_use = "el host se desenlaza cuando el guard se suelta"]
pub struct HostBinding {
    previous: Option<Rc<dyn HostHooks>>,
}

impl Drop for HostBinding {
    fn drop(&mut self) {
        let previous = self.previous.take();
        HOST.with(|h| *h.borrow_mut() = previous);
    }
}

/// Enlaza `host` como destino de `before` / `after` en el hilo actual.
pub fn bind_host(host: Rc<dyn HostHooks>) -> HostBinding {
    let previous = HOST.with(|h| h.borrow_mut().replace(host));
    HostBinding { previous }
}

/// Host enlazado en este momento, si hay alguno.
pub fn current_host() -> Option<Rc<dyn HostHooks>> {
    HOST.with(|h| h.borrow().clone())
}

/// Registra un hook de entrada en el host enlazado en el momento de la llamada.
pub fn before(hook: ScopeHook) -> Result<(), SubjectError> {
    let host = current_host().ok_or(SubjectError::NoActiveSuite { hook: "before" })?;
    host.before(hook)
}

/// Registra un hook de salida en el host enlazado en el momento de la llamada.
pub fn after(hook: ScopeHook) -> Result<(), SubjectError> {
    let host = current_host().ok_or(SubjectError::NoActiveSuite { hook: "after" })?;
    host.after(hook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExecutionContext;
    use std::cell::Cell;

    fn noop() -> ScopeHook {
        Box::new(|_: &mut ExecutionContext| Ok(()))
    }

    #[derive(Default)]
    struct CountingHost {
        before: Cell<usize>,
        after: Cell<usize>,
    }

    impl HostHooks for CountingHost {
        fn before(&self, _hook: ScopeHook) -> Result<(), SubjectError> {
            self.before.set(self.before.get() + 1);
            Ok(())
        }
        fn after(&self, _hook: ScopeHook) -> Result<(), SubjectError> {
            self.after.set(self.after.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn unbound_host_reports_missing_suite() {
        let err = before(noop()).unwrap_err();
        assert!(matches!(err, SubjectError::NoActiveSuite { hook: "before" }));
    }

    #[test]
    fn nested_bindings_restore_previous_host() {
        let outer = Rc::new(CountingHost::default());
        let inner = Rc::new(CountingHost::default());
        {
            let _outer_guard = bind_host(outer.clone());
            {
                let _inner_guard = bind_host(inner.clone());
                before(noop()).unwrap();
            }
            after(noop()).unwrap();
        }
        assert_eq!((inner.before.get(), inner.after.get()), (1, 0));
        assert_eq!((outer.before.get(), outer.after.get()), (0, 1));
        assert!(current_host().is_none());
    }
}
