use super::FanoutWriter;

/// Introspection for monitoring and tests.
///
/// Each call takes the writer's lock briefly, so the values are a consistent
/// snapshot but may be stale by the time the caller looks at them.
impl FanoutWriter {
    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.shared().state.lock().closed
    }

    /// Number of currently registered readers.
    pub fn reader_count(&self) -> usize {
        self.shared().state.lock().readers.len()
    }

    /// Bytes currently held in memory.
    pub fn retained(&self) -> usize {
        self.shared().state.lock().buf.len()
    }

    /// Logical stream position of the oldest retained byte.
    pub fn base_offset(&self) -> u64 {
        self.shared().state.lock().base_offset
    }

    /// Logical stream position the next written byte will get.
    pub fn end_offset(&self) -> u64 {
        self.shared().state.lock().end_offset()
    }

    /// Retention limit in bytes, `0` when unbounded.
    pub fn limit(&self) -> usize {
        self.config().limit
    }

    pub fn read_from_start(&self) -> bool {
        self.config().read_from_start
    }
}
