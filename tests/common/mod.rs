//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "id,name,age,email";

/// Ten data rows shared by the fixtures
pub const ROWS: [&str; 10] = [
    "1,John Doe,30,john@example.com",
    "2,Jane Smith,25,jane@example.com",
    "3,Bob Johnson,45,bob@example.com",
    "4,Alice Brown,35,alice@example.com",
    "5,Charlie Davis,28,charlie@example.com",
    "6,Eva Wilson,33,eva@example.com",
    "7,Frank Miller,41,frank@example.com",
    "8,Grace Lee,29,grace@example.com",
    "9,Henry Taylor,38,henry@example.com",
    "10,Ivy Martinez,27,ivy@example.com",
];

/// Create a workspace with an input directory and an empty output directory
pub fn create_workspace() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_dir = temp_dir.path().join("input");
    let output_dir = temp_dir.path().join("output");
    fs::create_dir_all(&input_dir).expect("Failed to create input dir");
    fs::create_dir_all(&output_dir).expect("Failed to create output dir");
    (temp_dir, input_dir, output_dir)
}

/// Write a source file made of `lines`, each newline-terminated
pub fn write_source(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write source file");
    path
}

/// Write a source file with the shared header and the first `rows` data rows
pub fn write_sample(dir: &Path, name: &str, rows: usize) -> PathBuf {
    let mut lines = vec![HEADER];
    lines.extend_from_slice(&ROWS[..rows]);
    write_source(dir, name, &lines)
}

/// Sorted file names in a directory
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Lines of an output file
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
