use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::bail;
use colored::Colorize;

/// Print a prompt and read one trimmed line. Fails if the input stream
/// closes mid-entry.
pub fn prompt_line<R, W>(label: &str, reader: &mut R, writer: &mut W) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{label}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Numeric prompt that keeps re-prompting until the input parses
pub fn prompt_number<T, R, W>(label: &str, reader: &mut R, writer: &mut W) -> anyhow::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(label, reader, writer)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(writer, "{}", "Invalid number, try again.".red())?,
        }
    }
}
