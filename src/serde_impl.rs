//! Serde support, enabled with the `serde` feature.
//!
//! A list serializes as a plain sequence. Chunk boundaries are an internal
//! layout detail and are not preserved: deserializing always produces a
//! single run chunk, which compares equal to the original (equality is
//! elementwise).

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::ImmutableList;

impl<T: Serialize> Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into())
    }
}
