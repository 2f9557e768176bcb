use std::fmt;
use crate::Fanout::Buffer::{BufferState, SharedBuffer};
use crate::Fanout::{FanoutReader, FanoutWriter};

/// Debug function for BufferState
///
/// Shows offsets and sizes only; buffered bytes are never dumped.
pub fn debug_buffer_state(state: &BufferState, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BufferState")
        .field("base_offset", &state.base_offset)
        .field("retained", &state.buf.len())
        .field("closed", &state.closed)
        .field("readers", &state.readers.len())
        .field("limit", &state.limit)
        .field("read_from_start", &state.read_from_start)
        .finish()
}

/// Debug function for SharedBuffer
///
/// Uses `try_lock` so formatting never deadlocks against a thread that
/// holds the writer's lock.
pub fn debug_shared_buffer(shared: &SharedBuffer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match shared.state.try_lock() {
        Some(state) => debug_buffer_state(&state, f),
        None => f.debug_struct("SharedBuffer").field("state", &"<locked>").finish(),
    }
}

/// Debug function for FanoutWriter
pub fn debug_fanout_writer(writer: &FanoutWriter, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FanoutWriter")
        .field("shared", writer.shared())
        .finish()
}

/// Debug function for FanoutReader
///
/// Shows:
/// - Reader ID
/// - Current offset, if the lock is free and the reader is still registered
/// - Bytes lost to a rolling window
pub fn debug_fanout_reader(reader: &FanoutReader, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let offset = reader
        .shared()
        .state
        .try_lock()
        .and_then(|state| state.readers.offset(reader.id()));
    f.debug_struct("FanoutReader")
        .field("id", &reader.id())
        .field("offset", &offset)
        .field("lost_bytes", &reader.lost_bytes())
        .finish()
}
