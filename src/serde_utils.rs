//! Shared deserialization helpers for gateway responses.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value.
/// Combined with `#[serde(default)]`, a field may be missing, null or present.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
