use crate::foundation::core::Size;

/// A single evictable cache entry keyed by the bounds it was built for.
///
/// The owner decides when to evict: on invalidation, on a memory-pressure signal, or implicitly
/// when the bounds change (a value stored for other bounds never matches). Every `store` and
/// `evict` bumps the generation, so callers can tell whether two reads saw the same value.
#[derive(Debug)]
pub struct CacheSlot<T> {
    entry: Option<Entry<T>>,
    generation: u64,
}

#[derive(Debug)]
struct Entry<T> {
    key: Size,
    generation: u64,
    value: T,
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CacheSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            entry: None,
            generation: 0,
        }
    }

    /// Cached value for `key`, if present.
    pub fn get(&self, key: Size) -> Option<&T> {
        self.entry
            .as_ref()
            .filter(|e| e.key == key && e.generation == self.generation)
            .map(|e| &e.value)
    }

    /// Return `true` when [`CacheSlot::get`] would hit.
    pub fn is_valid(&self, key: Size) -> bool {
        self.get(key).is_some()
    }

    /// Replace the entry and return a reference to the stored value.
    pub fn store(&mut self, key: Size, value: T) -> &T {
        self.generation = self.generation.wrapping_add(1);
        let entry = self.entry.insert(Entry {
            key,
            generation: self.generation,
            value,
        });
        &entry.value
    }

    /// Drop the entry. Returns `true` if one was present.
    pub fn evict(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.entry.take().is_some()
    }

    /// Current generation counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
