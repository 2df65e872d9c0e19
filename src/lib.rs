pub mod dataset;
pub mod input;

// Convenience re-exports
pub use dataset::mnist::{DatasetError, MnistDataset, Split, SplitData};
pub use input::prepare::{prepare_input, prepare_with, IndexOutOfRange};
pub use input::spec::InputSpec;
