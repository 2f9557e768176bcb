mod builder;
mod debug;
mod getters;
mod reader;
mod writer;

pub use builder::FanoutBuilder;
pub use reader::FanoutReader;
pub use writer::FanoutWriter;
pub use Structs::Config_Structs::FanoutConfig;

pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub use Buffer::{BufferState, SharedBuffer}; // re-export for stable path
    pub use Buffer_impl::ReadStep;
}

pub mod Structs {
    pub mod Config_Structs;
    pub use Config_Structs::{ConfigError, FanoutConfig}; // re-export for stable path
}
