//! Identidad de un valor JSON: blake3 sobre su forma canónica.

use serde_json::Value;

use super::to_canonical_json;

/// Hex de 64 caracteres; no depende del orden de claves de los objetos.
pub fn hash_value(value: &Value) -> String {
    blake3::hash(to_canonical_json(value).as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_change_the_hash() {
        let a = hash_value(&json!({"a": 1, "b": [1, 2]}));
        let b = hash_value(&json!({"b": [1, 2], "a": 1}));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_value(&json!({"a": 1, "b": [2, 1]})));
    }
}
