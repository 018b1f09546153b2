use contracts::favorites::FavoriteEntry;
use leptos::prelude::*;
use std::collections::HashSet;

/// Избранное: список снимков товаров в порядке добавления плюс индекс
/// идентификаторов для проверки `contains` за O(1).
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    entries: Vec<FavoriteEntry>,
    ids: HashSet<String>,
}

impl FavoritesState {
    /// Идемпотентно: повторное добавление того же товара ничего не меняет.
    pub fn add(&mut self, entry: FavoriteEntry) {
        if self.ids.insert(entry.id.clone()) {
            self.entries.push(entry);
        }
    }

    /// Отсутствующий id — не ошибка, просто ничего не происходит.
    pub fn remove(&mut self, id: &str) {
        if self.ids.remove(id) {
            self.entries.retain(|entry| entry.id != id);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Хэндл избранного, один на приложение, живёт в контексте.
#[derive(Clone, Copy)]
pub struct FavoritesStore(RwSignal<FavoritesState>);

impl FavoritesStore {
    pub fn new() -> Self {
        Self(RwSignal::new(FavoritesState::default()))
    }

    pub fn add(&self, entry: FavoriteEntry) {
        log::debug!("favorites: add '{}'", entry.id);
        self.0.update(|state| state.add(entry));
    }

    pub fn remove(&self, id: &str) {
        log::debug!("favorites: remove '{id}'");
        self.0.update(|state| state.remove(id));
    }

    pub fn clear(&self) {
        log::debug!("favorites: clear");
        self.0.update(FavoritesState::clear);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.0.with(|state| state.contains(id))
    }

    pub fn entries(&self) -> Vec<FavoriteEntry> {
        self.0.with(|state| state.entries().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.0.with(FavoritesState::is_empty)
    }
}

pub fn use_favorites() -> FavoritesStore {
    use_context::<FavoritesStore>().expect("FavoritesStore provider not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> FavoriteEntry {
        FavoriteEntry {
            id: id.into(),
            title: id.into(),
            image: format!("{id}.png"),
            price: 1000,
            rating: 5.0,
            in_stock: true,
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut favorites = FavoritesState::default();
        favorites.add(entry("xbox-series-x"));
        favorites.add(entry("xbox-series-x"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let mut favorites = FavoritesState::default();
        favorites.add(entry("xbox-series-x"));
        favorites.remove("iphone-15");
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains("xbox-series-x"));
    }

    #[test]
    fn remove_keeps_the_rest_in_order() {
        let mut favorites = FavoritesState::default();
        favorites.add(entry("a"));
        favorites.add(entry("b"));
        favorites.add(entry("c"));
        favorites.remove("b");

        let ids: Vec<&str> = favorites.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!favorites.contains("b"));
    }

    #[test]
    fn clear_empties_a_non_empty_set() {
        let mut favorites = FavoritesState::default();
        favorites.add(entry("a"));
        favorites.add(entry("b"));
        favorites.clear();
        assert!(favorites.is_empty());
        assert!(!favorites.contains("a"));
    }
}
