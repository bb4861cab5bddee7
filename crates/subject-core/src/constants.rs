//! Constantes del core.

/// Nombre reservado del stack de subjects. El stack vive en un campo oculto
/// del `ExecutionContext`; ninguna clave visible puede usar este nombre.
pub const SUBJECTS_KEY: &str = "__subjects";

/// Entry points que `namespace::infect` copia al espacio de nombres global.
pub const INFECTIONS: &[&str] = &["subject", "property"];
