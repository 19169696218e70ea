//! Field deserializers for the daemon's loose JSON.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the field's default.
///
/// The daemon writes unset properties as explicit nulls; `#[serde(default)]`
/// only covers keys that are absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
