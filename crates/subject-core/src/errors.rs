//! Errores del core de subjects.
//!
//! `InvalidArgument` sólo se produce en tiempo de declaración (antes de
//! registrar hooks). El resto aparece al ejecutar los callbacks de
//! entrada/salida y se propaga sin envolver al host.

use thiserror::Error;

/// Error boxed devuelto por factories de usuario.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SubjectError {
    /// Argumento de declaración inválido. `param` identifica el parámetro
    /// (`name`, `object`, `contextKey`).
    #[error("{param} argument {reason}")]
    InvalidArgument { param: &'static str, reason: String },
    /// `declare_property` se ejecutó sin ningún subject activo.
    #[error("no active subject to read property `{property}` from")]
    MissingSubject { property: String },
    /// La factory del subject falló durante la entrada al scope.
    #[error("factory for subject `{name}` failed: {source}")]
    Factory {
        name: String,
        #[source]
        source: BoxError,
    },
    /// No hay un host enlazado (ninguna suite se está definiendo).
    #[error("`{hook}` hook unavailable: no suite is being defined")]
    NoActiveSuite { hook: &'static str },
    /// El callback de salida no encontró stack que desapilar.
    #[error("subject stack underflow while leaving scope of `{name}`")]
    StackUnderflow { name: String },
}

impl SubjectError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { param, reason: reason.into() }
    }

    /// Nombre del parámetro rechazado, si el error es de validación.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(param),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_the_parameter() {
        let e = SubjectError::invalid("name", "missing or not a string");
        assert_eq!(e.to_string(), "name argument missing or not a string");
        assert_eq!(e.param(), Some("name"));
    }

    #[test]
    fn factory_error_keeps_source() {
        let e = SubjectError::Factory { name: "db".into(), source: "boom".into() };
        assert!(std::error::Error::source(&e).is_some());
        assert_eq!(e.to_string(), "factory for subject `db` failed: boom");
        assert_eq!(e.param(), None);
    }
}
