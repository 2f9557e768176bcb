// Module naming follows project convention (Fanout = one writer, many readers)
#[allow(non_snake_case)]
pub mod Fanout;

#[allow(non_snake_case)]
pub mod Core {
    pub mod error;
    pub mod registry;
    pub use error::FanoutError;
    pub use registry::{ReaderId, ReaderRegistry};
}

#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

pub use Core::FanoutError;
pub use Fanout::Structs::ConfigError;
pub use Fanout::{FanoutBuilder, FanoutConfig, FanoutReader, FanoutWriter};
