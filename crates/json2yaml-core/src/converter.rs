//! Reader → emitter pipeline with `---` separators between documents.

use std::io::{self, Read, Write};

use crate::emitter::Emitter;
use crate::error::{Json2YamlError, Result};
use crate::options::Options;
use crate::reader::Reader;

/// Converts JSON streams into one YAML stream.
///
/// The document count carries over between [`Converter::convert`] calls, so
/// feeding several inputs through the same converter still separates every
/// pair of consecutive documents with exactly one `---` line.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
    documents: usize,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            documents: 0,
        }
    }

    /// Number of documents written so far.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Convert every JSON value in `input`, writing YAML to `out`.
    ///
    /// Stops at the first error. Documents written before the error stay
    /// written.
    pub fn convert<W: Write, R: Read>(&mut self, out: W, input: R) -> Result<()> {
        let mut reader = Reader::with_options(input, self.options);
        let mut emitter = Emitter::new(out);
        while let Some(value) = reader.next_value()? {
            if self.documents > 0 {
                emitter.write_document_separator()?;
            }
            emitter.emit(value)?;
            self.documents += 1;
        }
        Ok(())
    }
}

/// Convert a stream of JSON values to YAML.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// json2yaml_core::convert(&mut out, r#"{}{"foo":128}"#.as_bytes()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "{}\n---\n\"foo\": 128\n");
/// ```
pub fn convert<W: Write, R: Read>(out: W, input: R) -> Result<()> {
    Converter::new().convert(out, input)
}

/// Convert JSON text to a YAML string.
pub fn convert_str(json: &str) -> Result<String> {
    let mut out = Vec::new();
    convert(&mut out, json.as_bytes())?;
    String::from_utf8(out)
        .map_err(|e| Json2YamlError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
