//! Structural deep copy via a JSON serialization round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure of a [`deep_copy`] round-trip.
#[derive(Debug, Error)]
pub enum DeepCopyError {
    #[error("value could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("serialized value could not be rebuilt: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Returns a fully independent deep copy of `value`, sharing no container
/// with the input at any nesting depth.
///
/// The copy is made by serializing to JSON text and parsing it back, so the
/// value must be representable in the JSON data model. Standard JSON
/// coercions apply during serialization: non-finite floats (`NaN`, `±∞`)
/// become `null`, and map keys must be strings. A `serde_json::Value` input
/// absorbs those coercions and always round-trips; a typed `T` whose
/// serialized form no longer matches `T` (for example an `f64` field that
/// serialized as `null`) fails with [`DeepCopyError::Deserialize`].
///
/// Owned values cannot be cyclic; a `Serialize` impl that recurses beyond
/// serde_json's nesting limit fails with an explicit error rather than
/// exhausting the stack.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vanilla_helpers::deep_copy;
///
/// let original = json!({"a": [1, 2, {"b": 3}]});
/// let copy = deep_copy(&original).unwrap();
/// assert_eq!(copy, original);
/// ```
pub fn deep_copy<T>(value: &T) -> Result<T, DeepCopyError>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_string(value).map_err(DeepCopyError::Serialize)?;
    serde_json::from_str(&encoded).map_err(DeepCopyError::Deserialize)
}
