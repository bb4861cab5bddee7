//! Espacio de nombres global de entry points (`infect` / `disinfect`).
//!
//! `infect` copia los entry points listados en `INFECTIONS` a un registro de
//! proceso; `disinfect` los retira. Los consumidores que resuelven
//! declaraciones por nombre (p.ej. cargadores declarativos) usan `lookup`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::constants::INFECTIONS;
use crate::errors::SubjectError;
use crate::injection::SubjectArg;

/// Entry point público registrado en el espacio de nombres.
#[derive(Debug, Clone, Copy)]
pub enum EntryPoint {
    Subject(fn(Value, SubjectArg) -> Result<(), SubjectError>),
    Property(fn(Value, Option<Value>) -> Result<(), SubjectError>),
}

static NAMESPACE: Lazy<Mutex<HashMap<&'static str, EntryPoint>>> = Lazy::new(|| Mutex::new(HashMap::new()));

fn namespace() -> MutexGuard<'static, HashMap<&'static str, EntryPoint>> {
    // un panic en otro hilo no invalida el mapa
    NAMESPACE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn subject_entry(name: Value, subject: SubjectArg) -> Result<(), SubjectError> {
    crate::subject(name, subject)
}

fn property_entry(name: Value, context_key: Option<Value>) -> Result<(), SubjectError> {
    match context_key {
        Some(key) => crate::property_as(name, key),
        None => crate::property(name),
    }
}

/// Entry point exportado bajo `name`, esté o no inyectado.
pub fn export(name: &str) -> Option<EntryPoint> {
    match name {
        "subject" => Some(EntryPoint::Subject(subject_entry)),
        "property" => Some(EntryPoint::Property(property_entry)),
        _ => None,
    }
}

/// Copia todos los entry points de `INFECTIONS` al espacio de nombres.
pub fn infect() {
    let mut ns = namespace();
    for name in INFECTIONS {
        if let Some(entry) = export(name) {
            ns.insert(*name, entry);
        }
    }
}

/// Retira del espacio de nombres todo lo que `infect` añadió.
pub fn disinfect() {
    let mut ns = namespace();
    for name in INFECTIONS {
        ns.remove(name);
    }
}

pub fn lookup(name: &str) -> Option<EntryPoint> {
    namespace().get(name).copied()
}
