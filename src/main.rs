// This binary crate is intentionally minimal.
// All input-preparation logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example prepare_digit
fn main() {
    println!("digit-input: prepares single MNIST digits as batch-of-one classifier inputs.");
    println!("Run `cargo run --example prepare_digit` to see it on the test split.");
}
