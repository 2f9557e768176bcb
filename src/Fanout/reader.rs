// src/Fanout/reader.rs

use super::Buffer::{ReadStep, SharedBuffer};
use crate::Core::error::FanoutError;
use crate::Core::registry::ReaderId;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a read may suspend when nothing is available.
#[derive(Clone, Copy)]
enum Wait {
    Never,
    Forever,
    Until(Instant),
}

/// A consuming cursor into a fanout stream.
///
/// A reader holds only its id and a shared reference to the writer's buffer;
/// its position lives in the writer's registry so trimming can see it. Closing
/// (or dropping) the reader deregisters it and lets the writer release bytes
/// only this reader still needed.
pub struct FanoutReader {
    shared: Arc<SharedBuffer>,
    id: ReaderId,
    lost_bytes: u64,
}

impl FanoutReader {
    pub(crate) fn new(shared: Arc<SharedBuffer>, id: ReaderId) -> Self {
        Self {
            shared,
            id,
            lost_bytes: 0,
        }
    }

    /// Reads into `dst`, blocking until data is available or the writer closes.
    ///
    /// # Returns
    /// * `Ok(n)` with the number of bytes copied (0 only if `dst` is empty)
    /// * `Err(FanoutError::EndOfStream)` once the writer is closed and everything
    ///   has been read; repeated calls keep returning it
    /// * `Err(FanoutError::FellBehind)` if the writer trimmed bytes this reader
    ///   had not read yet; the reader is deregistered and every later call fails
    ///   the same way
    pub fn read(&mut self, dst: &mut [u8]) -> Result<usize, FanoutError> {
        Ok(self.read_with(dst, Wait::Forever)?.unwrap_or(0))
    }

    /// Reads whatever is available without blocking.
    ///
    /// Returns `Ok(None)` if nothing is buffered for this reader and the writer
    /// is still open. Errors are the same as for [`read`](Self::read).
    pub fn try_read(&mut self, dst: &mut [u8]) -> Result<Option<usize>, FanoutError> {
        self.read_with(dst, Wait::Never)
    }

    /// Reads into `dst`, waiting at most `timeout` for data.
    ///
    /// Returns `Ok(None)` if the timeout elapsed first. A timeout too large to
    /// represent as a deadline waits like [`read`](Self::read).
    pub fn read_timeout(
        &mut self,
        dst: &mut [u8],
        timeout: Duration,
    ) -> Result<Option<usize>, FanoutError> {
        let wait = match Instant::now().checked_add(timeout) {
            Some(deadline) => Wait::Until(deadline),
            None => Wait::Forever,
        };
        self.read_with(dst, wait)
    }

    fn read_with(&mut self, dst: &mut [u8], wait: Wait) -> Result<Option<usize>, FanoutError> {
        let mut state = self.shared.state.lock();
        let mut timed_out = false;

        loop {
            match state.poll_read(self.id, dst, &mut self.lost_bytes)? {
                ReadStep::Copied(n) => return Ok(Some(n)),
                ReadStep::Pending => match wait {
                    Wait::Never => return Ok(None),
                    Wait::Until(_) if timed_out => return Ok(None),
                    Wait::Until(deadline) => {
                        timed_out = self.shared.update.wait_until(&mut state, deadline).timed_out();
                    }
                    // Releases the lock while asleep; re-checks from the top on wake.
                    Wait::Forever => self.shared.update.wait(&mut state),
                },
            }
        }
    }

    /// Identity of this reader within its writer.
    pub fn id(&self) -> ReaderId {
        self.id
    }

    /// Logical stream position this reader has consumed up to, or `None` once
    /// it has fallen behind.
    pub fn offset(&self) -> Option<u64> {
        self.shared.state.lock().readers.offset(self.id)
    }

    /// Bytes that could be read right now without blocking.
    pub fn available(&self) -> usize {
        self.shared.state.lock().available(self.id)
    }

    /// Bytes this reader skipped because a rolling-window writer evicted them
    /// before they were read.
    pub fn lost_bytes(&self) -> u64 {
        self.lost_bytes
    }

    /// Closes the reader, releasing buffered bytes only it was holding on to.
    pub fn close(self) {
        drop(self);
    }

    pub(crate) fn shared(&self) -> &SharedBuffer {
        &self.shared
    }
}

impl Drop for FanoutReader {
    fn drop(&mut self) {
        self.shared.state.lock().deregister_reader(self.id);
    }
}

impl io::Read for FanoutReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match FanoutReader::read(self, buf) {
            Ok(n) => Ok(n),
            Err(FanoutError::EndOfStream) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}
