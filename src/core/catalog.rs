//! Rules catalogs: elements and statistic types.
//!
//! Magnitudes refer to elements ("fire", "frost") and statistic types
//! ("health", "alacrity") by id. The resolver looks them up through the
//! `Lookup` seam, which a `Catalog` or a plain closure can satisfy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An element a magnitude can carry (fire, frost, poison...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Element {
    /// Create a new element.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A character statistic a magnitude changes (health, alacrity...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatisticType {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl StatisticType {
    /// Create a new statistic type.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only lookup from id to value.
///
/// Implemented by `Catalog` and by any `Fn(&str) -> Option<V>`.
pub trait Lookup<V>: Send + Sync {
    /// Find the value registered under `id`.
    fn lookup(&self, id: &str) -> Option<V>;
}

impl<V, F> Lookup<V> for F
where
    F: Fn(&str) -> Option<V> + Send + Sync,
{
    fn lookup(&self, id: &str) -> Option<V> {
        self(id)
    }
}

/// Something stored in a catalog under its own id.
pub trait CatalogEntry {
    /// The id the entry is stored under.
    fn catalog_id(&self) -> &str;
}

impl CatalogEntry for Element {
    fn catalog_id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for StatisticType {
    fn catalog_id(&self) -> &str {
        &self.id
    }
}

/// In-memory catalog keyed by id.
///
/// ## Example
///
/// ```
/// use rpg_ruleset::core::{Catalog, Element, Lookup};
///
/// let elements = Catalog::from_entries([Element::new("fire", "Fire")]);
///
/// assert_eq!(elements.lookup("fire").map(|e| e.name), Some("Fire".to_string()));
/// assert!(elements.lookup("frost").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog<V> {
    entries: FxHashMap<String, V>,
}

impl<V> Default for Catalog<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V: CatalogEntry> Catalog<V> {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries. Later duplicates replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = V>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: V) -> Option<V> {
        self.entries.insert(entry.catalog_id().to_string(), entry)
    }

    /// Get an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries.get(id)
    }

    /// Check if an id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> Lookup<V> for Catalog<V>
where
    V: CatalogEntry + Clone + Send + Sync,
{
    fn lookup(&self, id: &str) -> Option<V> {
        self.entries.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_insert_and_get() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.insert(StatisticType::new("health", "Health"));
        catalog.insert(StatisticType::new("alacrity", "Alacrity"));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("health"));
        assert_eq!(catalog.get("alacrity").map(|s| s.name.as_str()), Some("Alacrity"));
        assert!(catalog.get("mana").is_none());
    }

    #[test]
    fn test_catalog_replaces_duplicates() {
        let catalog = Catalog::from_entries([
            Element::new("fire", "Fire"),
            Element::new("fire", "Flame"),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("fire"), Some(Element::new("fire", "Flame")));
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |id: &str| (id == "frost").then(|| Element::new("frost", "Frost"));

        assert_eq!(Lookup::lookup(&lookup, "frost"), Some(Element::new("frost", "Frost")));
        assert_eq!(Lookup::lookup(&lookup, "fire"), None);
    }

    #[test]
    fn test_iteration() {
        let catalog = Catalog::from_entries([
            Element::new("fire", "Fire"),
            Element::new("frost", "Frost"),
        ]);

        let mut ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["fire", "frost"]);
    }
}
