use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::SubjectRecord;
use crate::hashing::hash_value;

/// Contexto de ejecución que el host presta a cada hook y test.
///
/// Las claves visibles conservan el orden de inserción. El stack de subjects
/// es bookkeeping interno: no aparece en `iter`, `Serialize`, `Debug` ni en
/// `fingerprint`, y sólo existe mientras haya al menos un subject activo.
///
/// Las declaraciones anidadas que reutilizan una clave la tapan con `shadow`
/// y la devuelven con `restore`; los valores tapados también son internos.
#[derive(Default)]
pub struct ExecutionContext {
    values: IndexMap<String, Value>,
    subjects: Option<Vec<SubjectRecord>>,
    // por clave: valor previo de cada `shadow` activo, exterior -> interior
    shadows: HashMap<String, Vec<Option<Value>>>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Fija `key` y devuelve el valor anterior, si existía.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Elimina `key` sin alterar el orden del resto de claves.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stack de subjects activos (exterior -> interior). `None` significa que
    /// no hay ningún subject activo; nunca se observa un stack vacío.
    pub fn subjects(&self) -> Option<&[SubjectRecord]> {
        self.subjects.as_deref()
    }

    /// Subject más cercano (cola del stack).
    pub fn current_subject(&self) -> Option<&SubjectRecord> {
        self.subjects.as_ref().and_then(|s| s.last())
    }

    pub(crate) fn push_subject(&mut self, record: SubjectRecord) {
        self.subjects.get_or_insert_with(Vec::new).push(record);
    }

    /// Desapila la cola. Si el stack queda vacío se elimina por completo.
    pub(crate) fn pop_subject(&mut self) -> Option<SubjectRecord> {
        let stack = self.subjects.as_mut()?;
        let popped = stack.pop();
        if stack.is_empty() {
            self.subjects = None;
        }
        popped
    }

    /// Fija `key` recordando el valor que tapa, para que `restore` lo reponga.
    pub(crate) fn shadow(&mut self, key: &str, value: Value) {
        let previous = self.values.insert(key.to_string(), value);
        self.shadows.entry(key.to_string()).or_default().push(previous);
    }

    /// Deshace el último `shadow` de `key`: repone el valor tapado o, si no
    /// había ninguno, elimina la clave.
    pub(crate) fn restore(&mut self, key: &str) -> Option<Value> {
        let previous = match self.shadows.get_mut(key) {
            Some(stack) => {
                let previous = stack.pop().flatten();
                if stack.is_empty() {
                    self.shadows.remove(key);
                }
                previous
            }
            None => None,
        };
        match previous {
            Some(value) => self.values.insert(key.to_string(), value),
            None => self.values.shift_remove(key),
        }
    }

    /// Vista JSON de las claves visibles.
    pub fn to_json(&self) -> Value {
        Value::Object(self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    /// Hash canónico de las claves visibles. El runner lo adjunta a cada test
    /// fallido para agrupar fallos ocurridos con el mismo contexto.
    pub fn fingerprint(&self) -> String {
        hash_value(&self.to_json())
    }
}

impl Serialize for ExecutionContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter())
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stack_is_unset_once_emptied() {
        let mut ctx = ExecutionContext::new();
        assert!(ctx.subjects().is_none());
        ctx.push_subject(SubjectRecord::Value(json!({"a": 1})));
        ctx.push_subject(SubjectRecord::Value(json!({"b": 2})));
        assert_eq!(ctx.subjects().map(|s| s.len()), Some(2));
        assert_eq!(ctx.current_subject().map(|r| r.source().clone()), Some(json!({"b": 2})));

        ctx.pop_subject();
        assert_eq!(ctx.subjects().map(|s| s.len()), Some(1));
        ctx.pop_subject();
        assert!(ctx.subjects().is_none());
        assert!(ctx.pop_subject().is_none());
    }

    #[test]
    fn hidden_stack_does_not_leak_into_dumps() {
        let mut ctx = ExecutionContext::new();
        ctx.set("subject", json!({"a": 1}));
        let before = ctx.fingerprint();
        ctx.push_subject(SubjectRecord::Value(json!({"a": 1})));

        assert_eq!(serde_json::to_value(&ctx).unwrap(), json!({"subject": {"a": 1}}));
        assert_eq!(ctx.keys().collect::<Vec<_>>(), vec!["subject"]);
        assert!(!format!("{:?}", ctx).contains("__subjects"));
        assert_eq!(ctx.fingerprint(), before);
    }

    #[test]
    fn restore_puts_back_each_shadowed_value() {
        let mut ctx = ExecutionContext::new();
        ctx.shadow("sub", json!({"a": 1}));
        ctx.shadow("sub", json!({"a": 2}));
        assert_eq!(ctx.get("sub"), Some(&json!({"a": 2})));

        ctx.restore("sub");
        assert_eq!(ctx.get("sub"), Some(&json!({"a": 1})));
        ctx.restore("sub");
        assert!(ctx.get("sub").is_none());
        assert!(ctx.shadows.is_empty());
    }

    #[test]
    fn restore_keeps_values_set_before_any_declaration() {
        let mut ctx = ExecutionContext::new();
        ctx.set("x", json!("host"));
        ctx.shadow("x", json!("declared"));
        ctx.restore("x");
        assert_eq!(ctx.get("x"), Some(&json!("host")));
        // sin shadow pendiente sólo se elimina
        ctx.restore("x");
        assert!(ctx.get("x").is_none());
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut ctx = ExecutionContext::new();
        ctx.set("a", json!(1));
        ctx.set("b", json!(2));
        ctx.set("c", json!(3));
        assert_eq!(ctx.remove("b"), Some(json!(2)));
        assert_eq!(ctx.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
