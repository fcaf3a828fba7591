use serde::{Deserialize, Deserializer};

/// Pairs with `#[serde(default)]` on an `Option<Option<T>>` field so that an
/// omitted key stays `None` while an explicit `null` becomes `Some(None)`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
