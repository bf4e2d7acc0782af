//! Cat catalog: built-in avatars plus persisted user overrides.
//!
//! Two layers: a fixed built-in set that is never mutated or persisted, and
//! an override map stored under the `cats` key. The effective catalog is
//! recomputed from both on every resolve, so each read of the store is
//! authoritative.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::log;
use crate::store::{KEY_CATS, KvStore};

/// Id selected when nothing valid is persisted.
pub const DEFAULT_CAT: &str = "godot";

/// Prefix for the avatar pane's class string (sprite lookup key).
pub const CLASS_PREFIX: &str = "cat-";

/// Built-in cats in display order. The default id comes first.
pub const BUILTIN_CATS: &[(&str, &str)] = &[
    ("godot", "Godot"),
    ("tabby", "Biscuit"),
    ("tuxedo", "Domino"),
    ("calico", "Patches"),
    ("siamese", "Mocha"),
];

/// A single catalog entry. `id` is the stable catalog key, `name` the
/// user-editable display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub id: String,
    pub name: String,
}

/// Read and validate the persisted override map.
///
/// An absent or unparseable blob behaves as empty overrides. Entries that
/// don't deserialize into `{id: string, name: string}` are dropped with a
/// log line; valid siblings in the same blob survive.
pub fn load_overrides<K: KvStore + ?Sized>(store: &K) -> BTreeMap<String, Cat> {
    let Some(raw) = store.read(KEY_CATS) else {
        return BTreeMap::new();
    };

    let parsed: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::error(&format!("Discarding malformed cat overrides: {}", e));
            return BTreeMap::new();
        }
    };

    let Some(map) = parsed.as_object() else {
        log::error("Discarding cat overrides: expected a JSON object");
        return BTreeMap::new();
    };

    let mut overrides = BTreeMap::new();
    for (key, value) in map {
        match serde_json::from_value::<Cat>(value.clone()) {
            Ok(mut cat) => {
                // Merging is by catalog key; the key wins over the inner id.
                cat.id = key.clone();
                overrides.insert(key.clone(), cat);
            }
            Err(e) => {
                log::error(&format!("Dropping malformed cat entry '{}': {}", key, e));
            }
        }
    }

    overrides
}

/// Resolve the effective catalog.
///
/// Built-in entries come first in their fixed order, with overrides applied
/// by id. User-added cats not in the built-in set follow in key order.
pub fn resolve<K: KvStore + ?Sized>(store: &K) -> Vec<Cat> {
    let mut overrides = load_overrides(store);

    let mut cats: Vec<Cat> = Vec::with_capacity(BUILTIN_CATS.len() + overrides.len());
    for (id, name) in BUILTIN_CATS {
        let cat = overrides.remove(*id).unwrap_or_else(|| Cat {
            id: (*id).to_string(),
            name: (*name).to_string(),
        });
        cats.push(cat);
    }

    cats.extend(overrides.into_values());
    cats
}

/// Collapse internal whitespace runs to single spaces and trim the edges.
pub fn sanitize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_resolve_without_overrides() {
        let store = MemoryStore::new();
        let cats = resolve(&store);

        assert_eq!(cats.len(), BUILTIN_CATS.len());
        assert_eq!(cats[0].id, DEFAULT_CAT);
        assert_eq!(cats[0].name, "Godot");
        assert_eq!(cats[1].id, "tabby");
    }

    #[test]
    fn test_override_replaces_builtin_name() {
        let store =
            MemoryStore::with_entry(KEY_CATS, r#"{"godot":{"id":"godot","name":"Rex"}}"#);
        let cats = resolve(&store);

        assert_eq!(cats[0].id, "godot");
        assert_eq!(cats[0].name, "Rex");
        // Everything else stays at its built-in name
        assert_eq!(cats[1].name, "Biscuit");
        assert_eq!(cats.len(), BUILTIN_CATS.len());
    }

    #[test]
    fn test_malformed_blob_falls_back_to_builtins() {
        let store = MemoryStore::with_entry(KEY_CATS, "not json at all");
        let cats = resolve(&store);

        assert_eq!(cats.len(), BUILTIN_CATS.len());
        assert_eq!(cats[0].name, "Godot");
    }

    #[test]
    fn test_non_object_blob_falls_back_to_builtins() {
        let store = MemoryStore::with_entry(KEY_CATS, r#"["godot"]"#);
        assert_eq!(resolve(&store).len(), BUILTIN_CATS.len());
    }

    #[test]
    fn test_malformed_entry_dropped_valid_entry_kept() {
        let blob = r#"{
            "godot": {"id": "godot"},
            "tabby": {"id": "tabby", "name": "Kevin"}
        }"#;
        let store = MemoryStore::with_entry(KEY_CATS, blob);
        let cats = resolve(&store);

        // The entry missing `name` is dropped, the built-in name survives
        assert_eq!(cats[0].name, "Godot");
        assert_eq!(cats[1].name, "Kevin");
    }

    #[test]
    fn test_non_string_name_dropped() {
        let store =
            MemoryStore::with_entry(KEY_CATS, r#"{"godot":{"id":"godot","name":42}}"#);
        let cats = resolve(&store);

        assert_eq!(cats[0].name, "Godot");
    }

    #[test]
    fn test_user_added_cat_appended_after_builtins() {
        let store =
            MemoryStore::with_entry(KEY_CATS, r#"{"nyan":{"id":"nyan","name":"Nyan"}}"#);
        let cats = resolve(&store);

        assert_eq!(cats.len(), BUILTIN_CATS.len() + 1);
        assert_eq!(cats.last().unwrap().id, "nyan");
        assert_eq!(cats[0].id, DEFAULT_CAT);
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_name("  Mia   Lou  "), "Mia Lou");
        assert_eq!(sanitize_name("Mia\t\nLou"), "Mia Lou");
        assert_eq!(sanitize_name("Mia"), "Mia");
    }

    #[test]
    fn test_sanitize_blank_is_empty() {
        assert_eq!(sanitize_name("   "), "");
        assert_eq!(sanitize_name(""), "");
    }
}
