// IDX binary format parsing, as used by MNIST and its derivatives
// (Fashion-MNIST, EMNIST, …). All header values are big-endian.
//
// IDX3 image file layout:
//   bytes  0-3:   0x00000803  (magic: uint8 dtype, 3 dimensions)
//   bytes  4-7:   N           (number of images, big-endian u32)
//   bytes  8-11:  rows        (image height in pixels, big-endian u32)
//   bytes 12-15:  cols        (image width in pixels, big-endian u32)
//   bytes 16..:   N * rows * cols bytes, row-major, uint8
//
// IDX1 label file layout:
//   bytes  0-3:   0x00000801  (magic: uint8 dtype, 1 dimension)
//   bytes  4-7:   N           (number of labels, big-endian u32)
//   bytes  8..:   N bytes, each a class index in [0, n_classes)

pub const IDX3_IMAGE_MAGIC: u32 = 0x0000_0803;
pub const IDX1_LABEL_MAGIC: u32 = 0x0000_0801;

/// Error type for IDX parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdxError {
    TooShort { expected: usize, got: usize },
    BadMagic { expected: u32, got: u32 },
    Truncated { declared: usize, available: usize },
    SizeOverflow,
}

impl std::fmt::Display for IdxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdxError::TooShort { expected, got } => write!(
                f,
                "IDX file too short: need at least {expected} header bytes, got {got}"
            ),
            IdxError::BadMagic { expected, got } => write!(
                f,
                "IDX invalid magic: expected {expected:#010x}, got {got:#010x}"
            ),
            IdxError::Truncated { declared, available } => write!(
                f,
                "IDX truncated: header declares {declared} data bytes, got {available}"
            ),
            IdxError::SizeOverflow => write!(f, "IDX header dimensions overflow usize"),
        }
    }
}

impl std::error::Error for IdxError {}

/// Parses an IDX3 image file into per-image pixel buffers.
///
/// Returns `(images, rows, cols)` where each image is a row-major
/// `Vec<u8>` of `rows * cols` raw intensity values.
pub fn parse_idx3_images(data: &[u8]) -> Result<(Vec<Vec<u8>>, usize, usize), IdxError> {
    if data.len() < 16 {
        return Err(IdxError::TooShort { expected: 16, got: data.len() });
    }

    let magic = read_u32_be(data, 0);
    if magic != IDX3_IMAGE_MAGIC {
        return Err(IdxError::BadMagic { expected: IDX3_IMAGE_MAGIC, got: magic });
    }

    let count = read_u32_be(data, 4) as usize;
    let rows = read_u32_be(data, 8) as usize;
    let cols = read_u32_be(data, 12) as usize;

    let n_pixels = rows.checked_mul(cols).ok_or(IdxError::SizeOverflow)?;
    let payload = count.checked_mul(n_pixels).ok_or(IdxError::SizeOverflow)?;

    let available = data.len() - 16;
    if available < payload {
        return Err(IdxError::Truncated { declared: payload, available });
    }

    let images = if n_pixels == 0 {
        vec![Vec::new(); count]
    } else {
        data[16..16 + payload]
            .chunks_exact(n_pixels)
            .map(<[u8]>::to_vec)
            .collect()
    };

    Ok((images, rows, cols))
}

/// Parses an IDX1 label file into raw class indices.
pub fn parse_idx1_labels(data: &[u8]) -> Result<Vec<u8>, IdxError> {
    if data.len() < 8 {
        return Err(IdxError::TooShort { expected: 8, got: data.len() });
    }

    let magic = read_u32_be(data, 0);
    if magic != IDX1_LABEL_MAGIC {
        return Err(IdxError::BadMagic { expected: IDX1_LABEL_MAGIC, got: magic });
    }

    let count = read_u32_be(data, 4) as usize;
    let available = data.len() - 8;
    if available < count {
        return Err(IdxError::Truncated { declared: count, available });
    }

    Ok(data[8..8 + count].to_vec())
}

/// Reads a big-endian u32 from `data` at byte offset `off`.
fn read_u32_be(data: &[u8], off: usize) -> u32 {
    u32::from_be_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

// Builder helpers

/// Builds IDX3 image bytes from raw per-image pixel buffers (useful for tests
/// and synthetic fixtures).
pub fn build_idx3_bytes(images: &[&[u8]], rows: u32, cols: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + images.len() * (rows * cols) as usize);
    buf.extend_from_slice(&IDX3_IMAGE_MAGIC.to_be_bytes());
    buf.extend_from_slice(&(images.len() as u32).to_be_bytes());
    buf.extend_from_slice(&rows.to_be_bytes());
    buf.extend_from_slice(&cols.to_be_bytes());
    for img in images {
        buf.extend_from_slice(img);
    }
    buf
}

/// Builds IDX1 label bytes (useful for tests and synthetic fixtures).
pub fn build_idx1_bytes(labels: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + labels.len());
    buf.extend_from_slice(&IDX1_LABEL_MAGIC.to_be_bytes());
    buf.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    buf.extend_from_slice(labels);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx3_roundtrip() {
        let img1 = vec![0u8; 4]; // 2×2 image
        let img2 = vec![255u8; 4];
        let bytes = build_idx3_bytes(&[&img1, &img2], 2, 2);
        let (images, rows, cols) = parse_idx3_images(&bytes).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(rows, 2);
        assert_eq!(cols, 2);
        assert_eq!(images[0], vec![0, 0, 0, 0]);
        assert_eq!(images[1], vec![255, 255, 255, 255]);
    }

    #[test]
    fn idx1_roundtrip() {
        let labels_in = vec![0, 1, 2, 9, 5];
        let bytes = build_idx1_bytes(&labels_in);
        let labels = parse_idx1_labels(&bytes).unwrap();
        assert_eq!(labels, labels_in);
    }

    #[test]
    fn idx3_bad_magic() {
        let mut bytes = build_idx3_bytes(&[&[0u8; 4]], 2, 2);
        bytes[3] = 99;
        let err = parse_idx3_images(&bytes).unwrap_err();
        assert!(matches!(err, IdxError::BadMagic { expected: IDX3_IMAGE_MAGIC, .. }));
    }

    #[test]
    fn idx1_bad_magic() {
        let mut bytes = build_idx1_bytes(&[0, 1]);
        bytes[3] = 99;
        let err = parse_idx1_labels(&bytes).unwrap_err();
        assert!(matches!(err, IdxError::BadMagic { expected: IDX1_LABEL_MAGIC, .. }));
    }

    #[test]
    fn idx3_truncated_payload() {
        let mut bytes = build_idx3_bytes(&[&[7u8; 4]], 2, 2);
        bytes.truncate(18); // header + 2 of 4 pixel bytes
        let err = parse_idx3_images(&bytes).unwrap_err();
        assert_eq!(err, IdxError::Truncated { declared: 4, available: 2 });
    }

    #[test]
    fn idx3_header_too_short() {
        let err = parse_idx3_images(&[0u8; 10]).unwrap_err();
        assert_eq!(err, IdxError::TooShort { expected: 16, got: 10 });
    }

    #[test]
    fn idx1_truncated_payload() {
        let mut bytes = build_idx1_bytes(&[1, 2, 3]);
        bytes.pop();
        let err = parse_idx1_labels(&bytes).unwrap_err();
        assert_eq!(err, IdxError::Truncated { declared: 3, available: 2 });
    }
}
