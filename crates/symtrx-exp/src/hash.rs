use serde::Serialize;
use sha2::{Digest, Sha256};
use symtrx_core::errors::SymtrxError;

use crate::serde::to_canonical_json_bytes;

/// SHA-256 hex digest of the canonical JSON encoding of `value`.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, SymtrxError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}
