//! Adaptador de hooks de scope (entrada / salida).

pub mod adapter;
pub mod host;

pub use adapter::HookAdapter;
pub use host::{bind_host, current_host, HostBinding, HostHooks};

use crate::errors::SubjectError;
use crate::model::ExecutionContext;

/// Callback que el host ejecuta al entrar o salir de un scope, con el contexto
/// de la invocación en curso.
pub type ScopeHook = Box<dyn Fn(&mut ExecutionContext) -> Result<(), SubjectError>>;
