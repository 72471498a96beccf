use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EntityKind};

/// An entity stored in a configuration collection under a unique, case-sensitive name.
pub trait Named {
    const KIND: EntityKind;

    fn name(&self) -> &str;
}

/// Ordered list of named entities.
///
/// Lookups return the first entity with a matching name. Insertion order is the
/// iteration order and the order the collection is written to disk in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T>(Vec<T>);

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(vec: Vec<T>) -> Self {
        Self(vec)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Collection<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Named> Collection<T> {
    pub fn by_name(&self, name: &str) -> Result<&T, ConfigError> {
        self.0
            .iter()
            .find(|entity| entity.name() == name)
            .ok_or_else(|| ConfigError::not_found(T::KIND, name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|entity| entity.name() == name)
    }

    /// Replaces the entity with the same name in place, or appends it.
    pub fn add_or_update(&mut self, entity: T) {
        match self.0.iter_mut().find(|existing| existing.name() == entity.name()) {
            Some(existing) => *existing = entity,
            None => self.0.push(entity),
        }
    }

    /// Removes the entity named `name`, failing without mutation if it does not exist.
    pub fn remove(&mut self, name: &str) -> Result<T, ConfigError> {
        self.by_name(name)?;

        let position = self
            .0
            .iter()
            .position(|entity| entity.name() == name)
            .ok_or_else(|| ConfigError::not_found(T::KIND, name))?;
        Ok(self.0.remove(position))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(Named::name)
    }

    /// Rejects empty names and names used more than once.
    pub fn validate_names(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for name in self.names() {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{} name must not be empty",
                    T::KIND
                )));
            }
            if !seen.insert(name) {
                return Err(ConfigError::Validation(format!(
                    "{} named {} is defined more than once",
                    T::KIND,
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        name: String,
        value: u32,
    }

    impl Named for Item {
        const KIND: EntityKind = EntityKind::Contract;

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn item(name: &str, value: u32) -> Item {
        Item {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn add_then_lookup() {
        let mut items = Collection::default();
        items.add_or_update(item("a", 1));

        assert_eq!(items.by_name("a").unwrap().value, 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut items: Collection<Item> = vec![item("a", 1), item("b", 2), item("c", 3)].into();
        items.add_or_update(item("b", 20));

        assert_eq!(items.len(), 3);
        assert_eq!(items.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(items.by_name("b").unwrap().value, 20);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut items: Collection<Item> = vec![item("Alice", 1)].into();
        items.add_or_update(item("alice", 2));

        assert_eq!(items.len(), 2);
        assert!(items.by_name("ALICE").is_err());
    }

    #[test]
    fn remove_absent_leaves_collection_unchanged() {
        let mut items: Collection<Item> = vec![item("a", 1), item("b", 2)].into();
        let err = items.remove("missing").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "contract named missing does not exist in configuration");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn remove_returns_entity() {
        let mut items: Collection<Item> = vec![item("a", 1), item("b", 2)].into();
        let removed = items.remove("a").unwrap();

        assert_eq!(removed, item("a", 1));
        assert_eq!(items.names().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn validate_rejects_duplicates_and_empty() {
        let items: Collection<Item> = vec![item("a", 1), item("a", 2)].into();
        assert!(matches!(items.validate_names(), Err(ConfigError::Validation(_))));

        let items: Collection<Item> = vec![item(" ", 1)].into();
        assert!(matches!(items.validate_names(), Err(ConfigError::Validation(_))));
    }
}
