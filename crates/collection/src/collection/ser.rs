//! `Serialize` for collections: an ordered map of key to item.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::collection::Collection;

impl<T, V> Serialize for Collection<T, V>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (key, item) in &self.items {
            map.serialize_entry(key, item)?;
        }
        map.end()
    }
}
