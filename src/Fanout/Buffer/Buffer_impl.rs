use bytes::{Buf, BytesMut};

use super::Buffer::BufferState;
use crate::Core::error::FanoutError;
use crate::Core::registry::{ReaderId, ReaderRegistry};
use crate::Fanout::Structs::Config_Structs::FanoutConfig;

/// Outcome of one non-blocking read attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStep {
    /// This many bytes were copied into the destination.
    Copied(usize),
    /// Nothing to read yet and the writer is still open.
    Pending,
}

impl BufferState {
    pub fn new(config: &FanoutConfig) -> Self {
        // The limit holds from the start: only the newest `limit` seed bytes are kept.
        let seed = &config.initial_bytes[..];
        let dropped = match config.limit {
            0 => 0,
            limit => seed.len().saturating_sub(limit),
        };
        Self {
            buf: BytesMut::from(&seed[dropped..]),
            base_offset: dropped as u64,
            closed: false,
            readers: ReaderRegistry::new(),
            limit: config.limit,
            read_from_start: config.read_from_start,
        }
    }

    /// Logical position one past the last retained byte.
    #[inline]
    pub fn end_offset(&self) -> u64 {
        self.base_offset + self.buf.len() as u64
    }

    /// Append `data` under the configured retention rules.
    ///
    /// Returns the number of bytes the caller should consider written, which is
    /// all of `data` on success. The caller wakes readers afterwards.
    pub fn append(&mut self, data: &[u8]) -> Result<usize, FanoutError> {
        if self.closed {
            return Err(FanoutError::Closed);
        }

        let n = data.len();

        // New tail readers start at the end of the buffer, so with nobody
        // registered these bytes can never be read.
        if !self.read_from_start && self.readers.is_empty() {
            return Ok(n);
        }

        if self.limit == 0 {
            self.buf.extend_from_slice(data);
            return Ok(n);
        }

        if n > self.limit {
            if !self.read_from_start {
                // Even a caught-up reader would lose part of this payload.
                tracing::debug!(
                    len = n,
                    limit = self.limit,
                    readers = self.readers.len(),
                    "Write rejected, would strand readers"
                );
                return Err(FanoutError::WouldFallBehind);
            }

            // Only the last `limit` bytes of the payload survive.
            self.base_offset += (self.buf.len() + n - self.limit) as u64;
            self.buf.clear();
            self.buf.extend_from_slice(&data[n - self.limit..]);
            return Ok(n);
        }

        let overflow = (self.buf.len() + n).saturating_sub(self.limit);
        if overflow > 0 {
            self.buf.advance(overflow);
            self.base_offset += overflow as u64;
        }
        self.buf.extend_from_slice(data);
        Ok(n)
    }

    /// Register a new reader at the position its mode dictates.
    ///
    /// # Panics
    /// Panics if the writer is closed.
    pub fn register_reader(&mut self) -> ReaderId {
        assert!(
            !self.closed,
            "FanoutWriter: attempted to create a new reader after close"
        );

        let start = if self.read_from_start {
            self.base_offset
        } else {
            self.end_offset()
        };
        let id = self.readers.register(start);
        tracing::debug!(reader = id, offset = start, readers = self.readers.len(), "Reader registered");
        id
    }

    /// Remove a reader and release what only it was holding on to.
    pub fn deregister_reader(&mut self, id: ReaderId) {
        let Some(offset) = self.readers.deregister(id) else {
            return;
        };
        tracing::debug!(reader = id, offset, readers = self.readers.len(), "Reader deregistered");

        // Only the slowest reader pins the front of the buffer.
        if self.readers.min_offset().map_or(true, |min| offset <= min) {
            self.trim();
        }
    }

    /// Advance the retained window up to the slowest registered reader.
    ///
    /// In read-from-start mode retention is governed by `limit` alone.
    pub fn trim(&mut self) {
        if self.read_from_start {
            return;
        }

        let len = self.buf.len() as u64;
        let jump = match self.readers.min_offset() {
            Some(min) => min.saturating_sub(self.base_offset).min(len),
            None => len,
        };

        if jump > 0 {
            self.buf.advance(jump as usize);
            self.base_offset += jump;
            tracing::trace!(released = jump, base_offset = self.base_offset, "Buffer trimmed");
        }
    }

    /// One pass of the read state machine for reader `id`.
    ///
    /// Bytes a rolling-window reader skipped because they were evicted are added
    /// to `lost`.
    pub fn poll_read(
        &mut self,
        id: ReaderId,
        dst: &mut [u8],
        lost: &mut u64,
    ) -> Result<ReadStep, FanoutError> {
        // A missing entry means an earlier read already reported the fall-behind.
        let Some(mut offset) = self.readers.offset(id) else {
            return Err(FanoutError::FellBehind);
        };

        if offset < self.base_offset && self.read_from_start {
            let skipped = self.base_offset - offset;
            *lost += skipped;
            offset = self.base_offset;
            self.readers.set_offset(id, offset);
            tracing::debug!(reader = id, skipped, lost = *lost, "Reader lapped by rolling window, skipping ahead");
        }

        if offset < self.base_offset || offset > self.end_offset() {
            tracing::warn!(
                reader = id,
                offset,
                base_offset = self.base_offset,
                "Reader fell behind"
            );
            // Its stale offset was pinning the window; release what live readers consumed.
            self.readers.deregister(id);
            self.trim();
            return Err(FanoutError::FellBehind);
        }

        let local = (offset - self.base_offset) as usize;
        let avail = &self.buf[local..];
        if avail.is_empty() {
            return if self.closed {
                Err(FanoutError::EndOfStream)
            } else {
                Ok(ReadStep::Pending)
            };
        }

        let n = avail.len().min(dst.len());
        dst[..n].copy_from_slice(&avail[..n]);
        if n > 0 {
            self.readers.set_offset(id, offset + n as u64);
            self.trim();
        }
        Ok(ReadStep::Copied(n))
    }

    /// Bytes reader `id` could read right now without blocking.
    pub fn available(&self, id: ReaderId) -> usize {
        match self.readers.offset(id) {
            Some(offset) => self.end_offset().saturating_sub(offset.max(self.base_offset)) as usize,
            None => 0,
        }
    }
}
