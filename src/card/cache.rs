use super::database::NameLookup;
use std::collections::HashMap;
use tracing::debug;

/// Store of already-resolved card names
pub trait NameCache {
    fn get(&self, id: u32) -> Option<String>;
    fn put(&mut self, id: u32, name: String);
}

#[derive(Debug, Default)]
pub struct MemoryNameCache {
    names: HashMap<u32, String>,
}

impl MemoryNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameCache for MemoryNameCache {
    fn get(&self, id: u32) -> Option<String> {
        self.names.get(&id).cloned()
    }

    fn put(&mut self, id: u32, name: String) {
        self.names.insert(id, name);
    }
}

/// Name used for an ID no source knows about
pub fn placeholder_name(id: u32) -> String {
    format!("Card_{}", id)
}

/// Resolves card IDs through a cache first, then a lookup source
pub struct NameResolver<'a, S: NameLookup, C: NameCache> {
    source: &'a S,
    cache: &'a mut C,
}

impl<'a, S: NameLookup, C: NameCache> NameResolver<'a, S, C> {
    pub fn new(source: &'a S, cache: &'a mut C) -> Self {
        NameResolver { source, cache }
    }

    /// Unknown IDs get a placeholder name, which is not cached
    pub fn resolve(&mut self, id: u32) -> String {
        if let Some(name) = self.cache.get(id) {
            return name;
        }
        match self.source.lookup(id) {
            Some(name) => {
                self.cache.put(id, name.clone());
                name
            }
            None => {
                debug!(id, "card id not found, using placeholder name");
                placeholder_name(id)
            }
        }
    }

    pub fn resolve_all(&mut self, ids: &[u32]) -> HashMap<u32, String> {
        ids.iter().map(|&id| (id, self.resolve(id))).collect()
    }
}
