/// Prefix prepended to the input name to form the output name.
pub const OUTPUT_PREFIX: &str = "modified_";

/// Map every character of `content` to its uppercase form.
///
/// Uses the full Unicode mapping, so a single character may expand
/// (`'ß'` becomes `"SS"`). Characters without an uppercase form pass through.
pub fn uppercase(content: &str) -> String {
    content.to_uppercase()
}

/// Derive the output name by prefixing the raw input name.
///
/// This is plain string concatenation: a directory component in `input`
/// ends up after the prefix (`dir/a.txt` becomes `modified_dir/a.txt`).
pub fn output_name(input: &str) -> String {
    format!("{OUTPUT_PREFIX}{input}")
}
