use std::io;

/// Conditions surfaced by the fan-out writer and its readers.
///
/// Every variant is a plain tag so callers can compare errors with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FanoutError {
    /// The writer was closed; no more bytes are accepted.
    #[error("write on a closed fanout writer")]
    Closed,

    /// A bounded write was rejected because it would strand a registered reader.
    /// Nothing was written.
    #[error("write would cause a reader to fall behind the buffer limit")]
    WouldFallBehind,

    /// The reader was outrun by trimming and has been deregistered.
    /// The handle is unusable from here on.
    #[error("reader fell behind the writer's buffer limit")]
    FellBehind,

    /// The writer is closed and this reader has drained everything.
    #[error("end of stream")]
    EndOfStream,
}

impl FanoutError {
    /// `EndOfStream` is the normal termination signal, not a failure.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, FanoutError::EndOfStream)
    }

    fn kind(&self) -> io::ErrorKind {
        match self {
            FanoutError::Closed => io::ErrorKind::BrokenPipe,
            FanoutError::WouldFallBehind => io::ErrorKind::WouldBlock,
            FanoutError::FellBehind => io::ErrorKind::Other,
            FanoutError::EndOfStream => io::ErrorKind::UnexpectedEof,
        }
    }
}

impl From<FanoutError> for io::Error {
    fn from(err: FanoutError) -> Self {
        io::Error::new(err.kind(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds() {
        let e: io::Error = FanoutError::Closed.into();
        assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);

        let e: io::Error = FanoutError::WouldFallBehind.into();
        assert_eq!(e.kind(), io::ErrorKind::WouldBlock);

        let e: io::Error = FanoutError::FellBehind.into();
        assert_eq!(e.kind(), io::ErrorKind::Other);
        assert_eq!(e.to_string(), "reader fell behind the writer's buffer limit");
    }

    #[test]
    fn end_of_stream_is_not_a_failure() {
        assert!(FanoutError::EndOfStream.is_end_of_stream());
        assert!(!FanoutError::Closed.is_end_of_stream());
    }
}
