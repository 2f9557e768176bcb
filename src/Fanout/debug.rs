use super::Buffer::{BufferState, SharedBuffer};
use super::{FanoutReader, FanoutWriter};
use std::fmt;

// Debug proxy implementations that call the standalone debug functions
impl fmt::Debug for BufferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_buffer_state(self, f)
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_shared_buffer(self, f)
    }
}

impl fmt::Debug for FanoutWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_fanout_writer(self, f)
    }
}

impl fmt::Debug for FanoutReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_fanout_reader(self, f)
    }
}
