//! Serde adapter for optional identifiers stored as `""` when absent.
//!
//! Commit records and reflog entries persist an unborn / root parent as an
//! empty string rather than omitting the field. Use with
//! `#[serde(with = "minigit_hash::serde_oid::opt_empty")]`.

pub mod opt_empty {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ObjectId;

    pub fn serialize<S: Serializer>(
        value: &Option<ObjectId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(oid) => serializer.serialize_str(&oid.to_hex()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ObjectId>, D::Error> {
        let hex = String::deserialize(deserializer)?;
        if hex.is_empty() {
            return Ok(None);
        }
        ObjectId::from_hex(&hex)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
