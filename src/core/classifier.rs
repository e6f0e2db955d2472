/// Default field separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Check if a line is tabular, i.e. contains at least one comma.
///
/// This is a heuristic, not a parser: a single bare value with no comma is
/// treated as non-tabular.
pub fn is_tabular_line<L: AsRef<[u8]> + ?Sized>(line: &L) -> bool {
    contains_separator(line, DEFAULT_SEPARATOR)
}

/// Check if a line contains the given separator character
pub fn contains_separator<L: AsRef<[u8]> + ?Sized>(line: &L, separator: char) -> bool {
    let mut buf = [0u8; 4];
    let needle = separator.encode_utf8(&mut buf).as_bytes();
    let haystack = line.as_ref();

    match needle {
        [byte] => haystack.contains(byte),
        _ => haystack.windows(needle.len()).any(|w| w == needle),
    }
}
