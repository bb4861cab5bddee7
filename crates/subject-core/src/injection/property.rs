//! `declare_property`: proyecta una propiedad del subject más cercano al
//! contexto bajo su propia clave.

use log::debug;
use serde_json::Value;

use super::args::{require_context_key, require_name};
use crate::errors::SubjectError;
use crate::hooks::HookAdapter;
use crate::model::ExecutionContext;

/// Proyecta `subject[name]` en `context[name]`.
pub fn declare_property(hooks: &HookAdapter, name: impl Into<Value>) -> Result<(), SubjectError> {
    register(hooks, name.into(), None)
}

/// Proyecta `subject[name]` en `context[context_key]`.
pub fn declare_property_as(hooks: &HookAdapter,
                           name: impl Into<Value>,
                           context_key: impl Into<Value>)
                           -> Result<(), SubjectError> {
    register(hooks, name.into(), Some(context_key.into()))
}

fn register(hooks: &HookAdapter, name: Value, context_key: Option<Value>) -> Result<(), SubjectError> {
    let name = require_name(name)?;
    let key = match context_key {
        Some(k) => require_context_key(k)?,
        None => name.clone(),
    };
    let entry_key = key.clone();

    hooks.register_entry(Box::new(move |ctx: &mut ExecutionContext| {
                             let source = ctx.current_subject()
                                             .ok_or_else(|| SubjectError::MissingSubject { property: name.clone() })?
                                             .source();
                             let value = project(source, &name);
                             ctx.shadow(&entry_key, value);
                             debug!("property `{name}` projected as `{entry_key}`");
                             Ok(())
                         }))?;

    hooks.register_exit(Box::new(move |ctx: &mut ExecutionContext| {
                            ctx.restore(&key);
                            Ok(())
                        }))
}

/// `source[name]`; una propiedad ausente se proyecta como null. En arrays
/// `name` es un índice decimal o `length`.
fn project(source: &Value, name: &str) -> Value {
    match source {
        Value::Array(items) if name == "length" => Value::from(items.len()),
        Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)).cloned().unwrap_or(Value::Null),
        _ => source.get(name).cloned().unwrap_or(Value::Null),
    }
}
