//! Build script to embed the word lists
//!
//! Turns the plain-text lists under `data/` into `&[&str]` constants so the
//! game needs no files at runtime.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_dir = Path::new(&out_dir);

    embed_word_list(
        "data/answers.txt",
        &out_dir.join("answers.rs"),
        "ANSWERS",
        "Target words a round can be played against",
    );

    embed_word_list(
        "data/allowed.txt",
        &out_dir.join("allowed.rs"),
        "ALLOWED",
        "Every word accepted as a guess",
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn embed_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}: '{word}' is not a five-letter lowercase word"
        );
    }

    let mut source = String::new();
    source.push_str("// Generated by build.rs, do not edit\n\n");
    source.push_str(&format!("/// {doc_comment} ({} words)\n", words.len()));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in &words {
        source.push_str(&format!("    \"{word}\",\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {const_name}\n"));
    source.push_str(&format!(
        "pub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));
    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
