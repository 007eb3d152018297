//! Hash helpers.
//!
//! - `sha1_hex`: digest de material arbitrario (identificadores de ejecución).
//! - `hash_str` / `hash_value`: blake3 sobre texto o JSON canonicalizado
//!   (fingerprints de jobs).

use blake3::Hasher;
use serde_json::Value;
use sha1::{Digest, Sha1};

use super::canonical_json::to_canonical_json;

/// SHA-1 de `input` en hex minúscula.
pub fn sha1_hex(input: &[u8]) -> String {
    let digest = Sha1::digest(input);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Hashea un string con blake3 y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hash blake3 de la forma canónica de `value`.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
