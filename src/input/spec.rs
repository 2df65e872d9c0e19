use serde::{Deserialize, Serialize};

/// Describes the input contract of the downstream classifier: the spatial
/// resolution its input layer expects and whether pixel intensities are
/// rescaled from [0, 255] to [0, 1].
///
/// Persisted as JSON next to a trained model so inference front-ends can
/// apply the exact preprocessing the model was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    pub width: u32,
    pub height: u32,
    pub normalize: bool,
}

impl Default for InputSpec {
    fn default() -> Self {
        // LeNet-style 32×32 grayscale input, normalized.
        InputSpec { width: 32, height: 32, normalize: true }
    }
}

impl InputSpec {
    /// The default 32×32 target with the given normalization flag.
    pub fn with_normalize(normalize: bool) -> InputSpec {
        InputSpec { normalize, ..InputSpec::default() }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a spec from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<InputSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
