// In src/Fanout/writer.rs
use super::reader::FanoutReader;
use super::Buffer::{BufferState, SharedBuffer};
use super::Structs::Config_Structs::FanoutConfig;
use crate::Core::error::FanoutError;
use std::io;
use std::sync::Arc;

/// The producing side of a fanout stream.
///
/// Bytes written here are read back by every [`FanoutReader`] created from this
/// writer, each at its own pace. The writer never blocks on a slow reader; the
/// buffer grows instead, or in bounded mode the configured limit decides what
/// is kept.
///
/// Dropping the writer closes the stream.
pub struct FanoutWriter {
    shared: Arc<SharedBuffer>,
    config: FanoutConfig,
}

impl FanoutWriter {
    /// Creates a writer with the given configuration.
    pub fn new(config: FanoutConfig) -> Self {
        let state = BufferState::new(&config);
        Self {
            shared: Arc::new(SharedBuffer::new(state)),
            config,
        }
    }

    /// Writes `data` to the stream.
    ///
    /// # Returns
    /// * `Ok(n)` with `n == data.len()` if the bytes were accepted (or silently
    ///   dropped because no tail reader exists to see them)
    /// * `Err(FanoutError::Closed)` if the writer was closed
    /// * `Err(FanoutError::WouldFallBehind)` if a bounded write would strand a
    ///   registered reader; nothing was written
    pub fn write(&self, data: &[u8]) -> Result<usize, FanoutError> {
        if data.is_empty() {
            return Ok(0);
        }

        let mut state = self.shared.state.lock();
        let written = state.append(data)?;
        drop(state);

        self.shared.wake_readers();
        Ok(written)
    }

    /// Closes the stream.
    ///
    /// Readers drain whatever is still buffered for them, then get
    /// `EndOfStream`. Further writes fail with `Closed`. Calling this more than
    /// once is harmless.
    pub fn close(&self) {
        let mut state = self.shared.state.lock();
        if !state.closed {
            state.closed = true;
            tracing::info!(
                readers = state.readers.len(),
                retained = state.buf.len(),
                "Fanout writer closed"
            );
        }
        drop(state);

        self.shared.wake_readers();
    }

    /// Creates a reader positioned according to the configuration: at the
    /// tail (sees only future writes) or at the oldest retained byte.
    ///
    /// # Panics
    /// Panics if the writer has been closed. Creating a reader on a finished
    /// stream is a caller bug.
    pub fn new_reader(&self) -> FanoutReader {
        let id = self.shared.state.lock().register_reader();
        FanoutReader::new(Arc::clone(&self.shared), id)
    }

    /// Returns the configuration this writer was built with.
    pub fn config(&self) -> &FanoutConfig {
        &self.config
    }

    pub(crate) fn shared(&self) -> &SharedBuffer {
        &self.shared
    }
}

impl Default for FanoutWriter {
    /// No initial data, no limit, readers start at the tail.
    fn default() -> Self {
        Self::new(FanoutConfig::default())
    }
}

impl Drop for FanoutWriter {
    fn drop(&mut self) {
        self.close();
    }
}

impl io::Write for &FanoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FanoutWriter::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for FanoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FanoutWriter::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
