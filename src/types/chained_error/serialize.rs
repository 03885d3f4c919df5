use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::ChainedError;
use crate::types::Cause;

/// Serializes as `{ "message", "detail", "cause" }`, nesting chained causes and
/// writing any other cause as its `Display` string.
impl Serialize for ChainedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ChainedError", 3)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("detail", &self.detail)?;
        state.serialize_field("cause", &self.cause)?;
        state.end()
    }
}

impl Serialize for Cause {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_error().downcast_ref::<ChainedError>() {
            Some(chained) => chained.serialize(serializer),
            None => serializer.collect_str(self),
        }
    }
}
