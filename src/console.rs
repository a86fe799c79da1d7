use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Please enter the name of the file you want to read: ";

/// `"---"` repeated ten times.
pub const SEPARATOR: &str = "------------------------------";

pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

/// Block for one line of input and return it as the file name.
///
/// Returns `None` when input is closed before anything is read. Only the
/// line terminator is removed; other whitespace is part of the name.
pub fn read_filename<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

pub fn report_content<W: Write>(out: &mut W, input: &str, content: &str) -> io::Result<()> {
    writeln!(out, "\nSuccessfully read the content from '{input}':")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{content}")?;
    writeln!(out, "{SEPARATOR}")
}

pub fn report_modified<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nContent has been modified (converted to uppercase).")
}

pub fn report_saved<W: Write>(out: &mut W, output: &str) -> io::Result<()> {
    writeln!(out, "\nSuccess! The modified content has been saved to '{output}'.")?;
    writeln!(out, "You can now find this new file in the same directory.")
}

pub fn report_not_found<W: Write>(out: &mut W, input: &str) -> io::Result<()> {
    writeln!(out, "\nError: The file '{input}' was not found.")?;
    writeln!(out, "Please make sure the file exists and you have typed the correct name.")
}

pub fn report_permission_denied<W: Write>(out: &mut W, input: &str) -> io::Result<()> {
    writeln!(out, "\nError: You do not have permission to access the file '{input}'.")?;
    writeln!(out, "Please check your file permissions.")
}

pub fn report_unexpected<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\nAn unexpected error occurred: {message}")
}

pub fn report_no_input<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nNo file name was entered.")
}
