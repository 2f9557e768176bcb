use std::collections::HashMap;

/// Identity of a registered reader. Never reused within one writer.
pub type ReaderId = u64;

/// Active readers and the logical stream offset each one has consumed up to.
///
/// Owned by the buffer state and only touched under the writer's lock.
#[derive(Debug, Default)]
pub struct ReaderRegistry {
    next_id: ReaderId,
    offsets: HashMap<ReaderId, u64>,
}

impl ReaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reader starting at `offset` and return its id.
    pub fn register(&mut self, offset: u64) -> ReaderId {
        let id = self.next_id;
        self.next_id += 1;
        self.offsets.insert(id, offset);
        id
    }

    /// Remove a reader, returning its last offset if it was registered.
    pub fn deregister(&mut self, id: ReaderId) -> Option<u64> {
        self.offsets.remove(&id)
    }

    pub fn offset(&self, id: ReaderId) -> Option<u64> {
        self.offsets.get(&id).copied()
    }

    pub fn set_offset(&mut self, id: ReaderId, offset: u64) {
        if let Some(off) = self.offsets.get_mut(&id) {
            *off = offset;
        }
    }

    /// Smallest offset over all registered readers.
    pub fn min_offset(&self) -> Option<u64> {
        self.offsets.values().copied().min()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_after_removal() {
        let mut reg = ReaderRegistry::new();
        let a = reg.register(0);
        let b = reg.register(0);
        assert_ne!(a, b);

        assert_eq!(reg.deregister(a), Some(0));
        let c = reg.register(0);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn min_offset_tracks_slowest() {
        let mut reg = ReaderRegistry::new();
        assert_eq!(reg.min_offset(), None);

        let a = reg.register(10);
        let b = reg.register(4);
        assert_eq!(reg.min_offset(), Some(4));

        reg.set_offset(b, 12);
        assert_eq!(reg.min_offset(), Some(10));

        reg.deregister(a);
        assert_eq!(reg.min_offset(), Some(12));
        assert_eq!(reg.offset(a), None);
    }

    #[test]
    fn set_offset_ignores_unknown_reader() {
        let mut reg = ReaderRegistry::new();
        reg.set_offset(42, 7);
        assert!(reg.is_empty());
    }
}
