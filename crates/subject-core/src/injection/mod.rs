//! Inyección de subjects y propiedades en el contexto de ejecución.
//!
//! Cada declaración registra exactamente un hook de entrada y uno de salida a
//! través del `HookAdapter`. El estado vive en el `ExecutionContext` que el
//! host presta a esos hooks; este módulo no guarda estado propio.

pub mod args;
pub mod property;
pub mod subject;

pub use args::SubjectArg;
pub use property::{declare_property, declare_property_as};
pub use subject::declare_subject;

use serde_json::Value;

use crate::errors::SubjectError;
use crate::hooks::HookAdapter;

/// Fachada sobre las declaraciones con un adapter fijo.
#[derive(Debug, Clone, Default)]
pub struct Subjects {
    hooks: HookAdapter,
}

impl Subjects {
    /// Fachada enlazada al host por hilo (`hooks::bind_host`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hooks(hooks: HookAdapter) -> Self {
        Self { hooks }
    }

    pub fn hooks(&self) -> &HookAdapter {
        &self.hooks
    }

    pub fn subject(&self, name: impl Into<Value>, subject: impl Into<SubjectArg>) -> Result<(), SubjectError> {
        declare_subject(&self.hooks, name, subject)
    }

    pub fn property(&self, name: impl Into<Value>) -> Result<(), SubjectError> {
        declare_property(&self.hooks, name)
    }

    pub fn property_as(&self, name: impl Into<Value>, context_key: impl Into<Value>) -> Result<(), SubjectError> {
        declare_property_as(&self.hooks, name, context_key)
    }
}
