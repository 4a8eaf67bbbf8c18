use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from an absent key. Pair with
/// `#[serde(default)]`: absent is `None`, `null` is `Some(None)`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
