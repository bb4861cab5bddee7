//! Registro de un subject activo y su factory.
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::ExecutionContext;
use crate::errors::BoxError;

type FactoryFn = dyn Fn(&mut ExecutionContext) -> Result<Value, BoxError>;

/// Factory de subjects. Recibe el contexto de forma explícita (lectura y
/// escritura) y devuelve la instancia que se expondrá en ese mismo contexto.
#[derive(Clone)]
pub struct SubjectFactory(Rc<FactoryFn>);

impl SubjectFactory {
    pub fn new<F>(f: F) -> Self
        where F: Fn(&mut ExecutionContext) -> Result<Value, BoxError> + 'static
    {
        Self(Rc::new(f))
    }

    /// Invoca la factory con el contexto como receptor.
    pub fn invoke(&self, ctx: &mut ExecutionContext) -> Result<Value, BoxError> {
        (self.0)(ctx)
    }

    /// Dos handles son iguales si apuntan a la misma factory.
    pub fn same_as(&self, other: &SubjectFactory) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SubjectFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubjectFactory(..)")
    }
}

/// Un elemento del stack de subjects.
#[derive(Debug, Clone)]
pub enum SubjectRecord {
    /// Forma valor: el registro es el propio objeto declarado.
    Value(Value),
    /// Forma factory: la instancia se evaluó una vez al entrar al scope.
    Factory {
        name: String,
        factory: SubjectFactory,
        instance: Value,
    },
}

impl SubjectRecord {
    /// Objeto del que `declare_property` lee propiedades.
    pub fn source(&self) -> &Value {
        match self {
            Self::Value(v) => v,
            Self::Factory { instance, .. } => instance,
        }
    }

    /// Nombre declarado (sólo disponible en la forma factory).
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Factory { name, .. } => Some(name),
        }
    }
}
