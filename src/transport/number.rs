use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Numeric element text as the gateway writes it.
///
/// Pair with `#[serde(default)]`: an absent element, `<x/>` and `<x></x>`
/// (or whitespace only) all read as zero. Any other text must parse.
pub fn deserialize_count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = Option::<String>::deserialize(deserializer)?;
    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value
            .parse()
            .map_err(|err| D::Error::custom(format!("invalid number {value:?}: {err}"))),
    }
}
