use ahash::AHashMap;
use serde_json::{Map, Value};
use std::sync::{LazyLock, RwLock};

/// Process-wide translation resource store: locale -> namespace -> bundle.
///
/// Static bundles are loaded at startup; remote copy is merged on top by the
/// copy sync service, which is the store's only writer. Merges are additive
/// and idempotent, so a duplicate apply is harmless.
#[derive(Debug, Default)]
pub struct Translations {
    resources: RwLock<AHashMap<String, AHashMap<String, Map<String, Value>>>>,
}

/// Global store instance shared by the whole process.
static GLOBAL: LazyLock<Translations> = LazyLock::new(Translations::default);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static Translations {
        &GLOBAL
    }

    /// Merges `bundle` into the `(locale, namespace)` slot.
    ///
    /// New keys are added and keys absent from `bundle` are preserved. On
    /// conflict the incoming value wins when `overwrite` is set; with `deep`
    /// set, nested objects merge recursively instead of being replaced
    /// wholesale.
    pub fn add_resource_bundle(
        &self,
        locale: &str,
        namespace: &str,
        bundle: &Map<String, Value>,
        overwrite: bool,
        deep: bool,
    ) {
        let mut resources = self.resources.write().expect("translations lock poisoned");
        let slot = resources
            .entry(locale.to_string())
            .or_default()
            .entry(namespace.to_string())
            .or_default();
        merge_map(slot, bundle, overwrite, deep);
    }

    /// Looks up a translation by dot-separated key path.
    pub fn get(&self, locale: &str, namespace: &str, key: &str) -> Option<String> {
        let resources = self.resources.read().expect("translations lock poisoned");
        let bundle = resources.get(locale)?.get(namespace)?;
        lookup_path(bundle, key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn has_bundle(&self, locale: &str, namespace: &str) -> bool {
        let resources = self.resources.read().expect("translations lock poisoned");
        resources
            .get(locale)
            .is_some_and(|namespaces| namespaces.contains_key(namespace))
    }

    /// Snapshot of one `(locale, namespace)` bundle, mainly for diagnostics.
    pub fn bundle(&self, locale: &str, namespace: &str) -> Option<Map<String, Value>> {
        let resources = self.resources.read().expect("translations lock poisoned");
        resources.get(locale)?.get(namespace).cloned()
    }
}

fn merge_map(
    target: &mut Map<String, Value>,
    incoming: &Map<String, Value>,
    overwrite: bool,
    deep: bool,
) {
    for (key, value) in incoming {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
            continue;
        }
        if let Some(existing) = target.get_mut(key) {
            match (existing, value) {
                (Value::Object(existing_obj), Value::Object(incoming_obj)) if deep => {
                    merge_map(existing_obj, incoming_obj, overwrite, deep);
                }
                (slot, value) if overwrite => {
                    *slot = value.clone();
                }
                _ => {}
            }
        }
    }
}

fn lookup_path<'a>(bundle: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let mut current = bundle.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
