//! Reserved attribute filtering
//!
//! Some record fields already have a dedicated place on the detail screen
//! (the status badge, the timing header, the body sections). Those keys are
//! dropped from the generic attribute sections so nothing is shown twice.
//!
//! The same [`ExclusionSet`] instance is used for display and export, so the
//! two outputs can never disagree about which keys are hidden.

use crate::record::Attribute;
use std::collections::HashSet;

/// Fields rendered by dedicated UI elements
pub const RESERVED_ATTRIBUTES: [&str; 14] = [
    "_id",
    "type",
    "readyState",
    "method",
    "status",
    "startTime",
    "endTime",
    "dataSent",
    "requestHeaders",
    "responseHeaders",
    "response",
    "responseSize",
    "responseType",
    "responseContentType",
];

/// Set of attribute keys hidden from the generic sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    keys: HashSet<String>,
}

impl ExclusionSet {
    /// Build a set from arbitrary keys (tests, config overrides)
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Reserved keys plus `extra`
    pub fn reserved_with<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.keys.extend(extra.into_iter().map(Into::into));
        set
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order (for config output)
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Drop excluded entries, keeping the order of everything else
    pub fn filter<'a>(&self, entries: &'a [Attribute]) -> Vec<&'a Attribute> {
        entries
            .iter()
            .filter(|entry| !self.contains(&entry.key))
            .collect()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(RESERVED_ATTRIBUTES)
    }
}

/// Filter with the default reserved set
pub fn filter_attributes(entries: &[Attribute]) -> Vec<&Attribute> {
    ExclusionSet::default().filter(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries() -> Vec<Attribute> {
        vec![
            Attribute::new("_id", 3),
            Attribute::new("url", "https://example.com/a"),
            Attribute::new("method", "GET"),
            Attribute::new("timeout", 0),
            Attribute::new("status", 200),
            Attribute::new("withCredentials", true),
            Attribute::new("responseHeaders", json!({ "a": "b" })),
        ]
    }

    #[test]
    fn test_reserved_keys_removed() {
        let entries = entries();
        let kept = filter_attributes(&entries);
        for entry in &kept {
            assert!(
                !RESERVED_ATTRIBUTES.contains(&entry.key.as_str()),
                "{} should have been filtered",
                entry.key
            );
        }
    }

    #[test]
    fn test_order_and_values_preserved() {
        let entries = entries();
        let kept = filter_attributes(&entries);
        let keys: Vec<_> = kept.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["url", "timeout", "withCredentials"]);
        assert_eq!(kept[0].value, json!("https://example.com/a"));
        assert_eq!(kept[1].value, json!(0));
        assert_eq!(kept[2].value, json!(true));
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_attributes(&[]).is_empty());
    }

    #[test]
    fn test_custom_set() {
        let set = ExclusionSet::new(["url"]);
        let entries = entries();
        let kept = set.filter(&entries);
        assert_eq!(kept.len(), entries.len() - 1);
        assert!(kept.iter().all(|a| a.key != "url"));
        // Reserved keys survive when the set doesn't name them
        assert!(kept.iter().any(|a| a.key == "method"));
    }

    #[test]
    fn test_reserved_with_extends_never_replaces() {
        let set = ExclusionSet::reserved_with(["timeout", "status"]);
        assert_eq!(set.len(), RESERVED_ATTRIBUTES.len() + 1);
        assert!(set.contains("timeout"));
        assert!(RESERVED_ATTRIBUTES.iter().all(|key| set.contains(key)));
    }

    #[test]
    fn test_default_set_matches_reserved_list() {
        let set = ExclusionSet::default();
        assert_eq!(set.len(), RESERVED_ATTRIBUTES.len());
        assert!(set.contains("responseContentType"));
        assert!(!set.contains("url"));
        assert!(!set.contains("id"));
    }
}
