//! Selection controller: the state machine behind the widget.
//!
//! Holds the current cat id, always a valid key of the effective catalog.
//! Every state change is persisted immediately and followed by a
//! presentation-sync step that pushes the new class string and display name
//! into the surface anchors.

use crate::catalog::{self, CLASS_PREFIX, Cat, DEFAULT_CAT};
use crate::error::{SetupError, SetupResult};
use crate::log;
use crate::store::{KEY_CATS, KEY_SELECTED, KvStore};
use crate::surface::Surface;
use crate::tui::art;

/// Navigation direction for [`Selector::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

pub struct Selector<S: Surface, K: KvStore> {
    surface: S,
    store: K,
    current: String,
}

impl<S: Surface, K: KvStore> Selector<S, K> {
    /// Build the controller, restoring the persisted selection.
    ///
    /// Fails loudly when a built-in cat has no sprite or the default id is
    /// missing from the built-in table: the widget cannot function without
    /// its presentation anchors.
    pub fn new(surface: S, store: K) -> SetupResult<Self> {
        if !catalog::BUILTIN_CATS.iter().any(|(id, _)| *id == DEFAULT_CAT) {
            return Err(SetupError::MissingDefault(DEFAULT_CAT.to_string()));
        }
        for (id, _) in catalog::BUILTIN_CATS {
            if art::sprite(&format!("{}{}", CLASS_PREFIX, id)).is_none() {
                return Err(SetupError::MissingSprite((*id).to_string()));
            }
        }

        let cats = catalog::resolve(&store);
        let current = store
            .read(KEY_SELECTED)
            .filter(|id| cats.iter().any(|c| &c.id == id))
            .unwrap_or_else(|| DEFAULT_CAT.to_string());

        let mut selector = Self {
            surface,
            store,
            current,
        };
        selector.sync_presentation();
        Ok(selector)
    }

    /// Select `id` if it is a key of the effective catalog, persist it, and
    /// sync the surface. Unknown ids are ignored with a warning.
    pub fn select(&mut self, id: &str) {
        let cats = catalog::resolve(&self.store);
        let Some(cat) = cats.iter().find(|c| c.id == id) else {
            log::warn(&format!("Ignoring selection of unknown cat '{}'", id));
            return;
        };

        self.current = cat.id.clone();
        self.store.write(KEY_SELECTED, &self.current);
        self.surface
            .set_avatar_class(&format!("{}{}", CLASS_PREFIX, cat.id));
        self.surface.set_name(&cat.name);
    }

    /// Step the selection with wraparound in both directions. A stale
    /// current id is treated as the first catalog entry.
    pub fn advance(&mut self, direction: Direction) {
        let cats = catalog::resolve(&self.store);
        if cats.is_empty() {
            return;
        }

        let index = cats
            .iter()
            .position(|c| c.id == self.current)
            .unwrap_or(0);
        let next = match direction {
            Direction::Next => (index + 1) % cats.len(),
            Direction::Prev => index.checked_sub(1).unwrap_or(cats.len() - 1),
        };

        let id = cats[next].id.clone();
        self.select(&id);
    }

    /// Commit a rename of the current cat from raw field input.
    ///
    /// Internal whitespace runs collapse to single spaces and the edges are
    /// trimmed. A blank result keeps the prior name and only re-syncs the
    /// field, visually reverting the edit.
    pub fn rename_current(&mut self, raw: &str) {
        let name = catalog::sanitize_name(raw);
        if name.is_empty() {
            self.sync_presentation();
            return;
        }

        let mut overrides = catalog::load_overrides(&self.store);
        overrides.insert(
            self.current.clone(),
            Cat {
                id: self.current.clone(),
                name,
            },
        );

        match serde_json::to_string(&overrides) {
            Ok(blob) => self.store.write(KEY_CATS, &blob),
            Err(e) => log::warn(&format!("Failed to serialize cat overrides: {}", e)),
        }

        self.sync_presentation();
    }

    /// Push the current catalog entry into the surface anchors.
    pub fn sync_presentation(&mut self) {
        let cats = catalog::resolve(&self.store);
        let cat = cats
            .iter()
            .find(|c| c.id == self.current)
            .or_else(|| cats.first());

        if let Some(cat) = cat {
            self.surface
                .set_avatar_class(&format!("{}{}", CLASS_PREFIX, cat.id));
            self.surface.set_name(&cat.name);
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// 1-based position of the current cat and the catalog size.
    pub fn position(&self) -> (usize, usize) {
        let cats = catalog::resolve(&self.store);
        let index = cats
            .iter()
            .position(|c| c.id == self.current)
            .unwrap_or(0);
        (index + 1, cats.len())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[cfg(test)]
    pub fn store(&self) -> &K {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BUILTIN_CATS;
    use crate::store::MemoryStore;
    use crate::surface::TuiSurface;

    fn fresh() -> Selector<TuiSurface, MemoryStore> {
        Selector::new(TuiSurface::new(), MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_initial_selection_is_default() {
        let selector = fresh();
        assert_eq!(selector.current(), DEFAULT_CAT);
        assert_eq!(selector.surface().name(), "Godot");
        assert_eq!(selector.surface().avatar_class(), "cat-godot");
    }

    #[test]
    fn test_persisted_selection_is_restored() {
        let store = MemoryStore::with_entry(KEY_SELECTED, "calico");
        let selector = Selector::new(TuiSurface::new(), store).unwrap();
        assert_eq!(selector.current(), "calico");
        assert_eq!(selector.surface().name(), "Patches");
    }

    #[test]
    fn test_stale_persisted_selection_falls_back_to_default() {
        let store = MemoryStore::with_entry(KEY_SELECTED, "sphinx");
        let selector = Selector::new(TuiSurface::new(), store).unwrap();
        assert_eq!(selector.current(), DEFAULT_CAT);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut selector = fresh();
        let start = selector.current().to_string();

        for _ in 0..BUILTIN_CATS.len() {
            selector.advance(Direction::Next);
        }
        assert_eq!(selector.current(), start);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut selector = fresh();
        selector.select("tuxedo");

        selector.advance(Direction::Next);
        selector.advance(Direction::Prev);
        assert_eq!(selector.current(), "tuxedo");
    }

    #[test]
    fn test_prev_from_default_wraps_to_last() {
        let mut selector = fresh();
        selector.advance(Direction::Prev);
        assert_eq!(selector.current(), BUILTIN_CATS.last().unwrap().0);
    }

    #[test]
    fn test_advance_persists_selection() {
        let mut selector = fresh();
        selector.advance(Direction::Next);

        // Second built-in in iteration order, both in memory and on "disk"
        assert_eq!(selector.current(), BUILTIN_CATS[1].0);
        assert_eq!(
            selector.store().read(KEY_SELECTED),
            Some(BUILTIN_CATS[1].0.to_string())
        );
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut selector = fresh();
        selector.select("sphinx");
        assert_eq!(selector.current(), DEFAULT_CAT);
        assert_eq!(selector.store().read(KEY_SELECTED), None);
    }

    #[test]
    fn test_rename_sanitizes_whitespace() {
        let mut selector = fresh();
        selector.rename_current("  Mia   Lou  ");

        assert_eq!(selector.surface().name(), "Mia Lou");
        let cats = catalog::resolve(selector.store());
        assert_eq!(cats[0].name, "Mia Lou");
    }

    #[test]
    fn test_blank_rename_keeps_prior_name() {
        let mut selector = fresh();
        selector.rename_current("   ");

        assert_eq!(selector.surface().name(), "Godot");
        assert_eq!(selector.store().read(KEY_CATS), None);
    }

    #[test]
    fn test_rename_persists_only_overrides() {
        let mut selector = fresh();
        selector.select("tabby");
        selector.rename_current("Kevin");

        let blob = selector.store().read(KEY_CATS).unwrap();
        let overrides: std::collections::BTreeMap<String, Cat> =
            serde_json::from_str(&blob).unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides["tabby"].name, "Kevin");
    }

    #[test]
    fn test_rename_survives_reconstruction() {
        let mut selector = fresh();
        selector.rename_current("Rex");

        let mut store = MemoryStore::new();
        store.write(KEY_CATS, &selector.store().read(KEY_CATS).unwrap());
        let restored = Selector::new(TuiSurface::new(), store).unwrap();
        assert_eq!(restored.surface().name(), "Rex");
    }

    #[test]
    fn test_advance_includes_user_added_cats() {
        let store =
            MemoryStore::with_entry(KEY_CATS, r#"{"nyan":{"id":"nyan","name":"Nyan"}}"#);
        let mut selector = Selector::new(TuiSurface::new(), store).unwrap();

        // Wrapping backwards from the default lands on the appended cat
        selector.advance(Direction::Prev);
        assert_eq!(selector.current(), "nyan");
        assert_eq!(selector.surface().name(), "Nyan");
    }

    #[test]
    fn test_position_reports_catalog_slot() {
        let mut selector = fresh();
        assert_eq!(selector.position(), (1, BUILTIN_CATS.len()));
        selector.advance(Direction::Next);
        assert_eq!(selector.position(), (2, BUILTIN_CATS.len()));
    }
}
