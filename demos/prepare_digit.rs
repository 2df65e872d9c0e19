/// Single-digit input preparation demo.
///
/// Loads the MNIST dataset from disk, prepares the test-split sample at
/// index 10 as a (1, 32, 32, 1) tensor with intensities normalized to
/// [0, 1], and prints the tensor shape and label.
///
/// Run with:
///   cargo run --example prepare_digit
///
/// Data files must be present at data/ (IDX binary format, uncompressed),
/// or point MNIST_DATA_DIR at the directory that holds them.

use digit_input::{prepare_input, MnistDataset};

const SAMPLE_INDEX: usize = 10;

/// Renders a digit as ASCII, darker pixels drawn with denser glyphs.
fn print_digit(pixels: &[u8], cols: usize) {
    for row in pixels.chunks(cols) {
        let line: String = row
            .iter()
            .map(|&p| match p {
                0..=63 => ' ',
                64..=127 => '.',
                128..=191 => '+',
                _ => '#',
            })
            .collect();
        println!("  {line}");
    }
}

fn main() {
    println!("Loading MNIST data...");
    let dataset = MnistDataset::load_default()
        .unwrap_or_else(|e| panic!("Cannot load MNIST data: {}", e));

    let test = dataset.test();
    println!("  Training set: {} images", dataset.train().len());
    println!("  Test set:     {} images", test.len());

    let (tensor, label) = prepare_input(test, SAMPLE_INDEX, true)
        .unwrap_or_else(|e| panic!("Cannot prepare sample: {}", e));

    println!("\nTest sample {} at native resolution:", SAMPLE_INDEX);
    print_digit(test.image(SAMPLE_INDEX), test.dims().1);

    println!("Input tensor shape: {:?}", tensor.shape());
    println!("Label: {}", label);
}
