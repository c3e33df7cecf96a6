//! Serde helper functions for partial-update payloads.
//!
//! JSON update bodies need to tell apart a key that was left out from a key
//! that was explicitly set to `null`. Fields using [`deserialize_present`]
//! must also carry `#[serde(default)]` so that a missing key stays `None`.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that was present in the payload, keeping `null`.
///
/// - key missing -> `None` (via `#[serde(default)]`)
/// - `"key": null` -> `Some(None)`
/// - `"key": value` -> `Some(Some(value))`
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
