// This is the shared byte window every reader of one stream looks into

use crate::Core::registry::ReaderRegistry;

use bytes::BytesMut;
use parking_lot::{Condvar, Mutex};

/// Lock-protected state of one fanout stream.
///
/// `buf` holds a contiguous window of the logical stream: `buf[0]` is the byte
/// at logical position `base_offset`. Reader offsets are logical positions too,
/// so trimming the front of `buf` never touches the readers themselves.
pub struct BufferState {
    /// Retained bytes of the stream.
    pub(crate) buf: BytesMut,

    /// Logical position of `buf[0]`. Never decreases.
    pub(crate) base_offset: u64,

    /// Set once by the writer, never reset.
    pub(crate) closed: bool,

    /// Active readers and how far each has consumed.
    pub(crate) readers: ReaderRegistry,

    /// Maximum retained bytes, `0` for unbounded.
    pub(crate) limit: usize,

    /// New readers start at `base_offset` rather than the tail.
    pub(crate) read_from_start: bool,
}

/// The writer's lock plus the condition variable blocked readers sleep on.
///
/// Shared by the writer and every reader through an `Arc`. Readers never own
/// the bytes; they only ever reach them with the lock held.
pub struct SharedBuffer {
    pub(crate) state: Mutex<BufferState>,

    /// Broadcast on every accepted write and on close.
    pub(crate) update: Condvar,
}

impl SharedBuffer {
    pub fn new(state: BufferState) -> Self {
        Self {
            state: Mutex::new(state),
            update: Condvar::new(),
        }
    }

    /// Wake every reader blocked in `read`.
    #[inline]
    pub fn wake_readers(&self) {
        self.update.notify_all();
    }
}
