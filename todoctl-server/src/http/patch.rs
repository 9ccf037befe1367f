//! Helpers for partial-update payloads

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field so that absent, `null` and a value differ.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent gives `None`, `null` gives `Some(None)`,
/// a value gives `Some(Some(v))`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
