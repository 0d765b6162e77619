//! Versioned persistence envelope.
//!
//! Every collection is stored as `{"schema_version": N, "items": [...]}`.
//! Records written before the envelope existed are bare JSON arrays; those
//! parse as version 0 and are rewritten in envelope form on the next persist.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Envelope schema version this build reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    schema_version: u32,
    items: Vec<T>,
}

/// Borrowing envelope used on the write path.
#[derive(Serialize)]
pub struct EnvelopeRef<'a, T> {
    pub schema_version: u32,
    pub items: &'a [T],
}

impl<'a, T: Serialize> EnvelopeRef<'a, T> {
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            items,
        }
    }
}

/// Outcome of decoding one stored collection.
#[derive(Debug)]
pub struct Decoded<T> {
    pub items: Vec<T>,
    /// True when the stored form predates the current envelope and should be
    /// rewritten.
    pub needs_rewrite: bool,
}

/// Decode a stored collection, migrating legacy bare-array payloads.
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<Decoded<T>, StoreError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| StoreError::Corrupted {
            key: key.to_string(),
            source,
        })?;

    if value.is_array() {
        // Pre-envelope payload, schema version 0.
        let items = serde_json::from_value(value).map_err(|source| StoreError::Corrupted {
            key: key.to_string(),
            source,
        })?;
        return Ok(Decoded {
            items,
            needs_rewrite: true,
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_value(value).map_err(|source| StoreError::Corrupted {
            key: key.to_string(),
            source,
        })?;
    if envelope.schema_version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            key: key.to_string(),
            found: envelope.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(Decoded {
        items: envelope.items,
        needs_rewrite: envelope.schema_version < SCHEMA_VERSION,
    })
}

/// Encode a collection in the current envelope form.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String, anyhow::Error> {
    Ok(serde_json::to_string(&EnvelopeRef::new(items))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_current_envelope() {
        let decoded: Decoded<u32> = decode("k", r#"{"schema_version":1,"items":[1,2,3]}"#).unwrap();
        assert_eq!(decoded.items, vec![1, 2, 3]);
        assert!(!decoded.needs_rewrite);
    }

    #[test]
    fn migrates_legacy_bare_array() {
        let decoded: Decoded<u32> = decode("k", "[4,5]").unwrap();
        assert_eq!(decoded.items, vec![4, 5]);
        assert!(decoded.needs_rewrite);
    }

    #[test]
    fn rejects_future_schema_version() {
        let err = decode::<u32>("k", r#"{"schema_version":9,"items":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedSchemaVersion { found: 9, .. }
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            decode::<u32>("k", "not json").unwrap_err(),
            StoreError::Corrupted { .. }
        ));
    }

    #[test]
    fn encode_wraps_in_envelope() {
        let raw = encode(&[1u32]).unwrap();
        assert_eq!(raw, r#"{"schema_version":1,"items":[1]}"#);
    }
}
