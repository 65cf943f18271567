use serde::{Deserialize, Deserializer};

/// Three-state patch field for partial updates.
///
/// Distinguishes "field omitted" from "field explicitly cleared" in edit
/// requests: a missing field deserializes to `Keep` (via `#[serde(default)]`
/// on the containing struct field), an explicit `null` to `Remove`, and a
/// value to `Set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the current value unchanged.
    #[default]
    Keep,
    /// Clear the value, reverting to the field's empty state.
    Remove,
    /// Replace the current value.
    Set(T),
}

impl<T> Patch<T> {
    /// Whether the patch leaves the field untouched.
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Remove,
        })
    }
}
