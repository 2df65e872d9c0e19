// MNIST dataset provider. Loads the four standard IDX files into memory.
//
// Expected directory contents (uncompressed):
//   train-images-idx3-ubyte   (60,000  28×28 images)
//   train-labels-idx1-ubyte   (60,000  labels 0-9)
//   t10k-images-idx3-ubyte    (10,000  28×28 images)
//   t10k-labels-idx1-ubyte    (10,000  labels 0-9)
//
// The directory is resolved from the MNIST_DATA_DIR environment variable,
// falling back to data/. Fetching the files there is the caller's concern.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::idx::{self, IdxError};

/// Environment variable naming the directory that holds the IDX files.
pub const DATA_DIR_ENV: &str = "MNIST_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";

const TRAIN_IMAGES: &str = "train-images-idx3-ubyte";
const TRAIN_LABELS: &str = "train-labels-idx1-ubyte";
const TEST_IMAGES: &str = "t10k-images-idx3-ubyte";
const TEST_LABELS: &str = "t10k-labels-idx1-ubyte";

/// Error type for dataset loading: the data-unavailable cases.
#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    MissingFile(PathBuf),
    Idx(IdxError),
    CountMismatch { images: usize, labels: usize },
    BadImageLength { index: usize, expected: usize, got: usize },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "MNIST I/O error: {e}"),
            DatasetError::MissingFile(p) => write!(f, "MNIST file not found: {}", p.display()),
            DatasetError::Idx(e) => write!(f, "MNIST parse error: {e}"),
            DatasetError::CountMismatch { images, labels } => write!(
                f,
                "MNIST count mismatch: {images} images vs {labels} labels"
            ),
            DatasetError::BadImageLength { index, expected, got } => write!(
                f,
                "MNIST image {index} has {got} pixels, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(e: io::Error) -> Self {
        DatasetError::Io(e)
    }
}

impl From<IdxError> for DatasetError {
    fn from(e: IdxError) -> Self {
        DatasetError::Idx(e)
    }
}

/// Which split of MNIST to index into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

/// One loaded split: images paired 1:1 with labels, immutable after load.
///
/// Images are stored as row-major `Vec<u8>` buffers at native resolution
/// (28×28 = 784 bytes each for standard MNIST). Labels are `u8` values 0–9.
#[derive(Debug, Clone)]
pub struct SplitData {
    images: Vec<Vec<u8>>,
    labels: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl SplitData {
    /// Builds a split from already-parsed parts, verifying that images and
    /// labels pair up and that every image holds `rows * cols` pixels.
    pub fn new(
        images: Vec<Vec<u8>>,
        labels: Vec<u8>,
        rows: usize,
        cols: usize,
    ) -> Result<SplitData, DatasetError> {
        if images.len() != labels.len() {
            return Err(DatasetError::CountMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        let expected = rows * cols;
        for (index, img) in images.iter().enumerate() {
            if img.len() != expected {
                return Err(DatasetError::BadImageLength {
                    index,
                    expected,
                    got: img.len(),
                });
            }
        }
        Ok(SplitData { images, labels, rows, cols })
    }

    /// Parses a split from in-memory IDX byte blobs (image file + label file).
    pub fn from_idx_bytes(image_bytes: &[u8], label_bytes: &[u8]) -> Result<SplitData, DatasetError> {
        let (images, rows, cols) = idx::parse_idx3_images(image_bytes)?;
        let labels = idx::parse_idx1_labels(label_bytes)?;
        SplitData::new(images, labels, rows, cols)
    }

    /// Generates `n` random 28×28 images with random labels, as fixture data
    /// for tests and quick experiments.
    pub fn synthetic(n: usize) -> SplitData {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let (rows, cols) = (28, 28);
        let mut images = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);
        for _ in 0..n {
            let mut img = vec![0u8; rows * cols];
            for px in &mut img {
                *px = rng.gen();
            }
            images.push(img);
            labels.push(rng.gen_range(0..10u8));
        }
        SplitData { images, labels, rows, cols }
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Raw pixel values for sample `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn image(&self, i: usize) -> &[u8] {
        &self.images[i]
    }

    /// Label for sample `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn label(&self, i: usize) -> u8 {
        self.labels[i]
    }

    /// Native image dimensions: (rows, cols).
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// The full MNIST dataset: both splits, loaded once, owned in memory.
#[derive(Debug, Clone)]
pub struct MnistDataset {
    train: SplitData,
    test: SplitData,
}

impl MnistDataset {
    /// Loads both splits from the four standard IDX files in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<MnistDataset, DatasetError> {
        let dir = dir.as_ref();
        let train = SplitData::from_idx_bytes(
            &read_data_file(dir, TRAIN_IMAGES)?,
            &read_data_file(dir, TRAIN_LABELS)?,
        )?;
        let test = SplitData::from_idx_bytes(
            &read_data_file(dir, TEST_IMAGES)?,
            &read_data_file(dir, TEST_LABELS)?,
        )?;
        Ok(MnistDataset { train, test })
    }

    /// Loads from the directory named by `MNIST_DATA_DIR`, or `data/` when unset.
    pub fn load_default() -> Result<MnistDataset, DatasetError> {
        MnistDataset::load(data_dir())
    }

    /// Assembles a dataset from two already-built splits.
    pub fn from_splits(train: SplitData, test: SplitData) -> MnistDataset {
        MnistDataset { train, test }
    }

    /// Random fixture dataset with `n_train` / `n_test` samples.
    pub fn synthetic(n_train: usize, n_test: usize) -> MnistDataset {
        MnistDataset {
            train: SplitData::synthetic(n_train),
            test: SplitData::synthetic(n_test),
        }
    }

    pub fn train(&self) -> &SplitData {
        &self.train
    }

    pub fn test(&self) -> &SplitData {
        &self.test
    }

    pub fn split(&self, split: Split) -> &SplitData {
        match split {
            Split::Train => &self.train,
            Split::Test => &self.test,
        }
    }
}

/// Resolves the data directory: `MNIST_DATA_DIR` override, else `data/`.
pub fn data_dir() -> PathBuf {
    env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

fn read_data_file(dir: &Path, name: &str) -> Result<Vec<u8>, DatasetError> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(DatasetError::MissingFile(path));
    }
    Ok(fs::read(&path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::idx::{build_idx1_bytes, build_idx3_bytes};

    #[test]
    fn from_idx_bytes_roundtrip() {
        let img_bytes = build_idx3_bytes(&[&[128u8; 4], &[64u8; 4]], 2, 2);
        let lbl_bytes = build_idx1_bytes(&[3, 7]);
        let split = SplitData::from_idx_bytes(&img_bytes, &lbl_bytes).unwrap();
        assert_eq!(split.len(), 2);
        assert!(!split.is_empty());
        assert_eq!(split.dims(), (2, 2));
        assert_eq!(split.image(0), &[128; 4]);
        assert_eq!(split.label(0), 3);
        assert_eq!(split.label(1), 7);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let img_bytes = build_idx3_bytes(&[&[0u8; 4]], 2, 2); // 1 image
        let lbl_bytes = build_idx1_bytes(&[0, 1]); // 2 labels
        let err = SplitData::from_idx_bytes(&img_bytes, &lbl_bytes).unwrap_err();
        assert!(matches!(err, DatasetError::CountMismatch { images: 1, labels: 2 }));
    }

    #[test]
    fn bad_image_length_is_rejected() {
        let err = SplitData::new(vec![vec![0u8; 3]], vec![1], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::BadImageLength { index: 0, expected: 4, got: 3 }
        ));
    }

    #[test]
    fn synthetic_has_native_dims_and_digit_labels() {
        let ds = MnistDataset::synthetic(20, 5);
        assert_eq!(ds.train().len(), 20);
        assert_eq!(ds.test().len(), 5);
        assert_eq!(ds.test().dims(), (28, 28));
        for i in 0..ds.train().len() {
            assert!(ds.train().label(i) < 10);
        }
    }

    #[test]
    fn split_selector_matches_accessors() {
        let ds = MnistDataset::synthetic(3, 2);
        assert_eq!(ds.split(Split::Train).len(), ds.train().len());
        assert_eq!(ds.split(Split::Test).len(), ds.test().len());
    }

    #[test]
    fn load_reads_all_four_files() {
        let dir = std::env::temp_dir().join(format!("digit-input-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let train_imgs = build_idx3_bytes(&[&[10u8; 4], &[20u8; 4]], 2, 2);
        let train_lbls = build_idx1_bytes(&[1, 2]);
        let test_imgs = build_idx3_bytes(&[&[30u8; 4]], 2, 2);
        let test_lbls = build_idx1_bytes(&[9]);
        std::fs::write(dir.join(TRAIN_IMAGES), &train_imgs).unwrap();
        std::fs::write(dir.join(TRAIN_LABELS), &train_lbls).unwrap();
        std::fs::write(dir.join(TEST_IMAGES), &test_imgs).unwrap();
        std::fs::write(dir.join(TEST_LABELS), &test_lbls).unwrap();

        let ds = MnistDataset::load(&dir).unwrap();
        assert_eq!(ds.train().len(), 2);
        assert_eq!(ds.test().len(), 1);
        assert_eq!(ds.test().label(0), 9);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = std::env::temp_dir().join(format!("digit-input-missing-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let err = MnistDataset::load(&dir).unwrap_err();
        assert!(matches!(err, DatasetError::MissingFile(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
