//! `declare_subject`: expone un subject en el contexto mientras dure el scope
//! y lo apila para que `declare_property` resuelva contra el más cercano.

use log::debug;
use serde_json::Value;

use super::args::{require_name, require_object, SubjectArg};
use crate::errors::SubjectError;
use crate::hooks::HookAdapter;
use crate::model::{ExecutionContext, SubjectFactory, SubjectRecord};

/// Declara el subject `name` para el scope en definición.
///
/// Toda la validación ocurre aquí, antes de registrar ningún hook; una
/// declaración inválida nunca llega a tocar un contexto vivo.
pub fn declare_subject(hooks: &HookAdapter,
                       name: impl Into<Value>,
                       subject: impl Into<SubjectArg>)
                       -> Result<(), SubjectError> {
    let name = require_name(name.into())?;
    let entry_name = name.clone();

    match subject.into() {
        SubjectArg::Value(value) => {
            let value = require_object(value)?;
            hooks.register_entry(Box::new(move |ctx: &mut ExecutionContext| {
                                     enter_value(ctx, &entry_name, &value);
                                     Ok(())
                                 }))?;
        }
        SubjectArg::Factory(factory) => {
            hooks.register_entry(Box::new(move |ctx: &mut ExecutionContext| {
                                     enter_factory(ctx, &entry_name, &factory)
                                 }))?;
        }
    }

    hooks.register_exit(Box::new(move |ctx: &mut ExecutionContext| leave(ctx, &name)))
}

fn enter_value(ctx: &mut ExecutionContext, name: &str, value: &Value) {
    ctx.shadow(name, value.clone());
    ctx.push_subject(SubjectRecord::Value(value.clone()));
    debug!("subject `{name}` entered (value)");
}

fn enter_factory(ctx: &mut ExecutionContext, name: &str, factory: &SubjectFactory) -> Result<(), SubjectError> {
    // si la factory falla no se apila nada
    let instance = factory.invoke(ctx)
                          .map_err(|source| SubjectError::Factory { name: name.to_string(), source })?;
    ctx.shadow(name, instance.clone());
    ctx.push_subject(SubjectRecord::Factory { name: name.to_string(),
                                              factory: factory.clone(),
                                              instance });
    debug!("subject `{name}` entered (factory)");
    Ok(())
}

/// Repone lo que `name` tapaba al entrar. El pop es incondicional: no depende
/// de que `name` siga en el contexto.
fn leave(ctx: &mut ExecutionContext, name: &str) -> Result<(), SubjectError> {
    ctx.restore(name);
    match ctx.pop_subject() {
        Some(_) => {
            debug!("subject `{name}` left");
            Ok(())
        }
        None => Err(SubjectError::StackUnderflow { name: name.to_string() }),
    }
}
