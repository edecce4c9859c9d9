//! Build script to embed the dictionaries
//!
//! Reads the comma-separated dictionary files and generates Rust source with
//! the raw buffers as string constants.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/english.txt",
        &Path::new(&out_dir).join("english.rs"),
        "ENGLISH",
        "English dictionary, comma-separated",
    );

    generate_dictionary(
        "data/swedish.txt",
        &Path::new(&out_dir).join("swedish.rs"),
        "SWEDISH",
        "Swedish dictionary, comma-separated",
    );

    // Rebuild if dictionaries change
    println!("cargo:rerun-if-changed=data/english.txt");
    println!("cargo:rerun-if-changed=data/swedish.txt");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let count = content.split(',').filter(|t| !t.trim().is_empty()).count();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} tokens)").unwrap();
    writeln!(output, "pub const {const_name}: &str = {content:?};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of non-empty tokens in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_TOKENS: usize = {count};").unwrap();
}
