use std::path::Path;

/// Placeholder replaced by the source base name
pub const NAME_TOKEN: &str = "{name}";
/// Placeholder replaced by the zero-padded sequence number
pub const NUM_TOKEN: &str = "{num}";

/// Generate an output file name from a template.
///
/// The first `{name}` is replaced with `base_name`, then the first `{num}` with
/// `sequence_number` padded to at least 3 digits. Missing tokens are left out
/// of the name.
pub fn format_file_name(template: &str, base_name: &str, sequence_number: usize) -> String {
    let padded = format!("{:03}", sequence_number);
    template
        .replacen(NAME_TOKEN, base_name, 1)
        .replacen(NUM_TOKEN, &padded, 1)
}

/// File name of `path` with its trailing extension stripped
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
