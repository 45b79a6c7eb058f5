//! Tab identity
//!
//! Tabs are identified by name. Every per-tab map in the engine is keyed by
//! [`TabName`], so reordering tabs never invalidates stored state.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unique, cheap-to-clone tab name
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabName(Arc<str>);

impl TabName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TabName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for TabName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for TabName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TabName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TabName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TabName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl PartialEq<str> for TabName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TabName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Serialize for TabName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TabName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TabName::from)
    }
}

/// A tab at a position in the current ordering
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tab {
    pub name: TabName,
    pub index: usize,
}

impl Tab {
    pub fn new(name: impl Into<TabName>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_lookup_by_str() {
        let mut map = FxHashMap::default();
        map.insert(TabName::from("feed"), 1);

        assert_eq!(map.get("feed"), Some(&1));
        assert_eq!(map.get("other"), None);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let name = TabName::from("photos");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"photos\"");

        let back: TabName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "photos");
    }
}
