//! subject-core: subjects con scope para suites de tests anidadas.
//!
//! Un bloque de suite declara un subject (valor o factory) que queda expuesto
//! en el `ExecutionContext` mientras dure el bloque y sus bloques anidados, y
//! se retira automáticamente al salir. `property` proyecta una propiedad del
//! subject más cercano al contexto bajo su propia clave.
//!
//! Las declaraciones se enganchan al host a través de `hooks::HookAdapter`;
//! las funciones libres de este módulo usan el adapter por defecto, que
//! resuelve el host enlazado en el hilo actual en cada llamada.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod hooks;
pub mod injection;
pub mod model;
pub mod namespace;

pub use constants::{INFECTIONS, SUBJECTS_KEY};
pub use errors::{BoxError, SubjectError};
pub use hooks::{bind_host, HookAdapter, HostBinding, HostHooks, ScopeHook};
pub use injection::{declare_property, declare_property_as, declare_subject, SubjectArg, Subjects};
pub use model::{ExecutionContext, SubjectFactory, SubjectRecord};
pub use namespace::{disinfect, infect};

use serde_json::Value;

/// `declare_subject` sobre el host enlazado.
pub fn subject(name: impl Into<Value>, subject: impl Into<SubjectArg>) -> Result<(), SubjectError> {
    declare_subject(&HookAdapter::default(), name, subject)
}

/// `declare_property` sobre el host enlazado.
pub fn property(name: impl Into<Value>) -> Result<(), SubjectError> {
    declare_property(&HookAdapter::default(), name)
}

/// `declare_property_as` sobre el host enlazado.
pub fn property_as(name: impl Into<Value>, context_key: impl Into<Value>) -> Result<(), SubjectError> {
    declare_property_as(&HookAdapter::default(), name, context_key)
}

/// Atajo para declarar un subject calculado por factory.
pub fn factory<F>(f: F) -> SubjectArg
    where F: Fn(&mut ExecutionContext) -> Result<Value, BoxError> + 'static
{
    SubjectArg::Factory(SubjectFactory::new(f))
}
