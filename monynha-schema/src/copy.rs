use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Remote translation bundle: locale tag -> key/value map.
///
/// Values are usually strings but nested objects are allowed; the merge into
/// the translation store is deep, so `{"hero": {"title": "..."}}` works the
/// same as a flat `"hero.title"` key. A `BTreeMap` keeps locale iteration
/// order deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CopyBundle {
    pub locales: BTreeMap<String, Option<Map<String, Value>>>,
}

impl CopyBundle {
    /// Iterates the locales that actually carry a key/value map, skipping
    /// null placeholders left behind by the dashboard editor.
    pub fn present_locales(&self) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
        self.locales
            .iter()
            .filter_map(|(locale, map)| map.as_ref().map(|m| (locale.as_str(), m)))
    }

    pub fn is_empty(&self) -> bool {
        self.present_locales().next().is_none()
    }
}
