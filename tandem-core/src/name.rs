//! Event name keys.

use std::{borrow::Borrow, fmt, ops::Deref, sync::Arc};

/// The key under which listeners are grouped.
///
/// Names are caller-chosen and never validated; the empty string is as good
/// a key as any other. Cloning is O(1).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventName(Arc<str>);

impl EventName {
    /// Create a new event name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for EventName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `IndexMap<EventName, _>` be queried with a plain `&str`.
impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&String> for EventName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for EventName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for EventName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_name_compares_with_str() {
        let name = EventName::from("e1");
        assert_eq!(name, "e1");
        assert_eq!(name.as_str(), "e1");
        assert_eq!(name.len(), 2);
    }

    #[test]
    fn test_name_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(EventName::from(String::from("ready")), 1);
        assert_eq!(map.get("ready"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_empty_name_is_valid() {
        let name = EventName::new("");
        assert!(name.is_empty());
        assert_eq!(format!("{name:?}"), "\"\"");
    }
}
