//! YAML block-style emitter.
//!
//! Renders one [`Value`] per call to [`Emitter::emit`]:
//!
//! - **Scalars** and **empty containers** (`{}`, `[]`) are written inline.
//! - **Mappings**: one `"key":` line per entry; a non-empty container value
//!   continues on the next line two columns deeper, anything else follows
//!   `": "` on the same line.
//! - **Sequences**: one `- ` marker per element; a non-empty container
//!   element starts on the marker's line and its children line up with the
//!   column right after the marker, so nested sequences compact to `- - 1`.
//!
//! # Example
//! ```
//! use json2yaml_core::{Emitter, Value};
//! let mut out = Vec::new();
//! let value = Value::Array(vec![
//!     Value::Number("0".into()),
//!     Value::Array(vec![Value::Number("1".into())]),
//! ]);
//! Emitter::new(&mut out).emit(value).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "- 0\n- - 1\n");
//! ```

use std::io::Write;
use std::vec;

use crate::error::Result;
use crate::scalar::{push_quoted, push_scalar};
use crate::types::Value;

/// A container whose children are still being written.
///
/// `column` is where each child line starts. `fused` is set while the first
/// child's line prefix has already been written by the parent's `- ` marker.
enum Frame {
    Mapping {
        entries: vec::IntoIter<(String, Value)>,
        column: usize,
        fused: bool,
    },
    Sequence {
        items: vec::IntoIter<Value>,
        column: usize,
        fused: bool,
    },
}

/// Writes values as YAML block text to `out`, one complete line at a time.
pub struct Emitter<W> {
    out: W,
    line: String,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    /// Write a `---` line.
    pub fn write_document_separator(&mut self) -> Result<()> {
        self.out.write_all(b"---\n")?;
        Ok(())
    }

    /// Write `value` as one YAML document body, ending with a newline.
    ///
    /// The value is consumed; subtrees are dropped as soon as they have been
    /// written.
    pub fn emit(&mut self, value: Value) -> Result<()> {
        self.line.clear();
        let mut stack = Vec::new();
        self.place(value, 0, false, &mut stack)?;

        while let Some(frame) = stack.last_mut() {
            match frame {
                Frame::Mapping {
                    entries,
                    column,
                    fused,
                } => {
                    let Some((key, value)) = entries.next() else {
                        stack.pop();
                        continue;
                    };
                    let column = *column;
                    if !std::mem::take(fused) {
                        push_indent(column, &mut self.line);
                    }
                    push_quoted(&key, &mut self.line);
                    self.line.push(':');
                    if value.is_block() {
                        self.end_line()?;
                    } else {
                        self.line.push(' ');
                    }
                    self.place(value, column + 2, false, &mut stack)?;
                }
                Frame::Sequence {
                    items,
                    column,
                    fused,
                } => {
                    let Some(item) = items.next() else {
                        stack.pop();
                        continue;
                    };
                    if !std::mem::take(fused) {
                        push_indent(*column, &mut self.line);
                    }
                    self.line.push_str("- ");
                    // Only indentation and markers precede a fused child, so
                    // the line length is the child's column.
                    let child_column = self.line.len();
                    self.place(item, child_column, true, &mut stack)?;
                }
            }
        }
        Ok(())
    }

    /// Write `value` inline and finish the line, or push a frame for a
    /// non-empty container whose children start at `column`.
    fn place(
        &mut self,
        value: Value,
        column: usize,
        fused: bool,
        stack: &mut Vec<Frame>,
    ) -> Result<()> {
        match value {
            Value::Object(entries) if !entries.is_empty() => stack.push(Frame::Mapping {
                entries: entries.into_iter(),
                column,
                fused,
            }),
            Value::Array(items) if !items.is_empty() => stack.push(Frame::Sequence {
                items: items.into_iter(),
                column,
                fused,
            }),
            inline => {
                push_inline(&inline, &mut self.line);
                self.end_line()?;
            }
        }
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        self.line.push('\n');
        self.out.write_all(self.line.as_bytes())?;
        self.line.clear();
        Ok(())
    }
}

/// Scalars via the scalar encoder; empty containers in flow form.
fn push_inline(value: &Value, out: &mut String) {
    match value {
        Value::Object(_) => out.push_str("{}"),
        Value::Array(_) => out.push_str("[]"),
        scalar => {
            push_scalar(scalar, out);
        }
    }
}

fn push_indent(column: usize, out: &mut String) {
    out.extend(std::iter::repeat_n(' ', column));
}
