//! Turns the LS-8 text program format into a flat byte image.
//!
//! A program source is a sequence of lines. Anything from a `#` to the end of
//! its line is a comment. After stripping comments and surrounding
//! whitespace, a blank line contributes nothing, and any other line must
//! start with a binary literal (a run of `0`/`1` digits that fits in one
//! byte). Literals land at consecutive memory addresses starting from 0, in
//! line order.

use std::fs;
use std::io;
use std::path::Path;

/// Everything after this on a line is ignored
pub const COMMENT_MARKER: char = '#';

/// Failure to produce a program image; the machine must never run on a
/// partial one
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
  #[error("could not read program source")]
  Io(#[from] io::Error),

  #[error("line {line}: `{token}` is not a binary literal that fits in a byte")]
  MalformedLiteral { line: usize, token: String },
}

/// Parse a program source into its byte image
pub fn parse_image(source: &str) -> Result<Vec<u8>, LoadError> {
  let mut image = Vec::new();
  for (index, raw) in source.lines().enumerate() {
    let uncommented = raw.split(COMMENT_MARKER).next().unwrap_or("").trim();
    let Some(token) = uncommented.split_whitespace().next() else {
      continue;
    };
    let byte =
      u8::from_str_radix(token, 2).map_err(|_| LoadError::MalformedLiteral {
        line: index + 1,
        token: token.to_owned(),
      })?;
    image.push(byte);
  }
  Ok(image)
}

/// Read and parse a program source file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
  let source = fs::read_to_string(path)?;
  parse_image(&source)
}
