pub mod idx;
pub mod mnist;

pub use idx::IdxError;
pub use mnist::{DatasetError, MnistDataset, Split, SplitData};
