pub mod prepare;
pub mod resize;
pub mod spec;

pub use prepare::{prepare_input, prepare_with, IndexOutOfRange};
pub use spec::InputSpec;
