//! Insertion-ordered map used for style properties and HTML attributes.
//!
//! Output order of generated CSS declarations and HTML attributes follows
//! insertion order, so these maps keep entries in a `Vec`. Element maps are
//! small; linear lookup is fine.

use crate::style::StyleProperty;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

/// Style declarations of an element.
pub type StyleMap = OrderedMap<StyleProperty, String>;

/// HTML attributes of an element.
pub type AttributeMap = OrderedMap<String, String>;

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Replace the value in place, or append a new entry.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Rename a key, keeping its position. An existing entry under `new_key`
    /// is replaced.
    pub fn rename<Q>(&mut self, old_key: &Q, new_key: K) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        let Some(pos) = self.entries.iter().position(|(k, _)| k == old_key) else {
            return false;
        };
        if self.entries[pos].0 == new_key {
            return true;
        }
        self.entries.retain(|(k, _)| *k != new_key);
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == old_key) {
            entry.0 = new_key;
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((k, v)) = access.next_entry()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = AttributeMap::new();
        map.insert("id".to_string(), "a".to_string());
        map.insert("role".to_string(), "button".to_string());
        map.insert("id".to_string(), "b".to_string());

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["id", "role"]);
        assert_eq!(map.get("id").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut map = AttributeMap::new();
        map.insert("id".to_string(), "a".to_string());
        map.insert("title".to_string(), "t".to_string());
        map.insert("role".to_string(), "r".to_string());

        assert!(map.rename("title", "aria-label".to_string()));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["id", "aria-label", "role"]);
        assert!(!map.rename("missing", "x".to_string()));
    }

    #[test]
    fn test_rename_onto_existing_key_replaces_it() {
        let mut map = AttributeMap::new();
        map.insert("id".to_string(), "a".to_string());
        map.insert("role".to_string(), "r".to_string());

        assert!(map.rename("role", "id".to_string()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("id").map(String::as_str), Some("r"));
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"zIndex":"1","color":"red","alignItems":"center"}"#;
        let map: StyleMap = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = map.keys().map(|k| k.key().to_string()).collect();
        assert_eq!(keys, vec!["zIndex", "color", "alignItems"]);
    }
}
