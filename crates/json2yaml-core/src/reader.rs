//! Streaming JSON reader — yields one top-level value at a time.
//!
//! The reader pulls bytes from any [`std::io::Read`] and materializes exactly
//! one top-level [`Value`] per call. Values may be separated by whitespace or
//! directly concatenated (`{}{"a":1}[]`); the grammar is self-delimiting, so a
//! number or literal simply ends at the first byte that cannot extend it.
//!
//! # Key design decisions
//!
//! - **Explicit container stack**: nested arrays and objects are tracked in a
//!   `Vec<Frame>` instead of recursive calls, so nesting depth is limited by
//!   [`Options::max_depth`] rather than by the thread's stack size.
//! - **Numbers stay text**: the literal is grammar-checked and stored as-is.
//! - **Objects stay ordered**: entries are pushed into a `Vec`, duplicates kept.
//! - **Strings are decoded to bytes first** and validated as UTF-8 once the
//!   closing quote is seen; surrogate pairs in `\u` escapes are combined and
//!   unpaired surrogates rejected.

use std::io::{self, BufRead, BufReader, Read};

use crate::error::{Json2YamlError, Position, Result};
use crate::options::Options;
use crate::types::Value;

/// An open container on the parse stack.
enum Frame {
    Array(Vec<Value>),
    /// `key` holds the key whose value is currently being read.
    Object {
        entries: Vec<(String, Value)>,
        key: String,
    },
}

impl Frame {
    fn context(&self) -> &'static str {
        match self {
            Frame::Array(_) => "array",
            Frame::Object { .. } => "object",
        }
    }

    fn into_value(self) -> Value {
        match self {
            Frame::Array(items) => Value::Array(items),
            Frame::Object { entries, .. } => Value::Object(entries),
        }
    }
}

/// Streaming reader over a byte source.
pub struct Reader<R> {
    inner: BufReader<R>,
    position: Position,
    options: Options,
    failed: bool,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, Options::default())
    }

    pub fn with_options(inner: R, options: Options) -> Self {
        Self {
            inner: BufReader::new(inner),
            position: Position::start(),
            options,
            failed: false,
        }
    }

    /// Position of the next unread byte.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Read the next top-level value.
    ///
    /// Returns `Ok(None)` once only whitespace remains.
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        self.skip_whitespace()?;
        if self.peek()?.is_none() {
            return Ok(None);
        }

        let mut stack: Vec<Frame> = Vec::new();
        loop {
            let Some(mut value) = self.read_value_start(&mut stack)? else {
                // A non-empty container was opened; read its first element.
                continue;
            };

            // A complete value: attach it to its parent, closing every
            // container that ends right after it.
            loop {
                let Some(mut frame) = stack.pop() else {
                    return Ok(Some(value));
                };
                if self.attach(&mut frame, value)? {
                    value = frame.into_value();
                } else {
                    stack.push(frame);
                    break;
                }
            }
        }
    }

    /// Add a finished element to `frame` and consume the separator after it.
    /// Returns `true` when the separator closed the container.
    fn attach(&mut self, frame: &mut Frame, value: Value) -> Result<bool> {
        match frame {
            Frame::Array(items) => {
                items.push(value);
                self.skip_whitespace()?;
                match self.peek()? {
                    Some(b',') => {
                        self.bump(b',');
                        Ok(false)
                    }
                    Some(b']') => {
                        self.bump(b']');
                        Ok(true)
                    }
                    Some(b) => Err(self.unexpected(b, "after array element")),
                    None => Err(self.eof("array")),
                }
            }
            Frame::Object { entries, key } => {
                entries.push((std::mem::take(key), value));
                self.skip_whitespace()?;
                match self.peek()? {
                    Some(b',') => {
                        self.bump(b',');
                        self.skip_whitespace()?;
                        *key = self.read_key()?;
                        Ok(false)
                    }
                    Some(b'}') => {
                        self.bump(b'}');
                        Ok(true)
                    }
                    Some(b) => Err(self.unexpected(b, "after object key:value pair")),
                    None => Err(self.eof("object")),
                }
            }
        }
    }

    /// Read the start of a value. Scalars and empty containers are returned
    /// whole; a non-empty container is pushed onto `stack` and `None` is
    /// returned so the caller goes on to read its first element.
    fn read_value_start(&mut self, stack: &mut Vec<Frame>) -> Result<Option<Value>> {
        self.skip_whitespace()?;
        let context = stack.last().map_or("value", Frame::context);
        let Some(byte) = self.peek()? else {
            return Err(self.eof(context));
        };
        let value = match byte {
            b'[' => {
                self.check_depth(stack.len())?;
                self.bump(b'[');
                self.skip_whitespace()?;
                if self.peek()? == Some(b']') {
                    self.bump(b']');
                    Value::Array(Vec::new())
                } else {
                    stack.push(Frame::Array(Vec::new()));
                    return Ok(None);
                }
            }
            b'{' => {
                self.check_depth(stack.len())?;
                self.bump(b'{');
                self.skip_whitespace()?;
                if self.peek()? == Some(b'}') {
                    self.bump(b'}');
                    Value::Object(Vec::new())
                } else {
                    let key = self.read_key()?;
                    stack.push(Frame::Object {
                        entries: Vec::new(),
                        key,
                    });
                    return Ok(None);
                }
            }
            b'"' => Value::String(self.read_string()?),
            b'-' | b'0'..=b'9' => Value::Number(self.read_number()?),
            b't' => self.read_literal("true", Value::Bool(true))?,
            b'f' => self.read_literal("false", Value::Bool(false))?,
            b'n' => self.read_literal("null", Value::Null)?,
            other => return Err(self.unexpected(other, "looking for beginning of value")),
        };
        Ok(Some(value))
    }

    fn check_depth(&self, open: usize) -> Result<()> {
        if open >= self.options.max_depth {
            return Err(Json2YamlError::DepthLimitExceeded {
                limit: self.options.max_depth,
                position: self.position,
            });
        }
        Ok(())
    }

    /// Read `"key"` followed by `:`. Leading whitespace must already be skipped.
    fn read_key(&mut self) -> Result<String> {
        match self.peek()? {
            Some(b'"') => {}
            Some(b) => {
                return Err(self.unexpected(b, "looking for beginning of object key string"))
            }
            None => return Err(self.eof("object")),
        }
        let key = self.read_string()?;
        self.skip_whitespace()?;
        match self.peek()? {
            Some(b':') => {
                self.bump(b':');
                Ok(key)
            }
            Some(b) => Err(self.unexpected(b, "after object key")),
            None => Err(self.eof("object")),
        }
    }

    /// Read a quoted string starting at its opening quote.
    fn read_string(&mut self) -> Result<String> {
        let start = self.position;
        self.bump(b'"');
        let mut bytes = Vec::new();
        loop {
            let Some(byte) = self.peek()? else {
                return Err(self.eof("string"));
            };
            match byte {
                b'"' => {
                    self.bump(byte);
                    break;
                }
                b'\\' => {
                    self.bump(byte);
                    self.read_escape(&mut bytes)?;
                }
                0x00..=0x1f => return Err(self.unexpected(byte, "in string literal")),
                _ => {
                    self.bump(byte);
                    bytes.push(byte);
                }
            }
        }
        String::from_utf8(bytes).map_err(|_| Json2YamlError::Syntax {
            message: "invalid UTF-8 in string".to_string(),
            position: start,
        })
    }

    /// Decode the escape following a backslash into `out`.
    fn read_escape(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let Some(byte) = self.peek()? else {
            return Err(self.eof("string"));
        };
        let decoded = match byte {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                self.bump(byte);
                let ch = self.read_unicode_escape()?;
                let mut utf8 = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
                return Ok(());
            }
            other => return Err(self.unexpected(other, "in string escape code")),
        };
        self.bump(byte);
        out.push(decoded);
        Ok(())
    }

    /// Decode the `XXXX` of a `\uXXXX` escape, plus the trailing low half when
    /// it starts a surrogate pair.
    fn read_unicode_escape(&mut self) -> Result<char> {
        let position = self.position;
        let unpaired = || Json2YamlError::Syntax {
            message: "unpaired surrogate in \\u escape".to_string(),
            position,
        };
        let first = self.read_hex4()?;
        let code = match first {
            0xD800..=0xDBFF => {
                for expected in [b'\\', b'u'] {
                    match self.peek()? {
                        Some(b) if b == expected => self.bump(b),
                        Some(_) => return Err(unpaired()),
                        None => return Err(self.eof("string")),
                    }
                }
                let second = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(unpaired());
                }
                0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(unpaired()),
            _ => first,
        };
        char::from_u32(code).ok_or_else(unpaired)
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let Some(byte) = self.peek()? else {
                return Err(self.eof("string"));
            };
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(self.unexpected(byte, "in \\u hexadecimal character escape")),
            };
            self.bump(byte);
            code = code * 16 + u32::from(digit);
        }
        Ok(code)
    }

    /// Read a number literal, checking it against the JSON grammar:
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn read_number(&mut self) -> Result<String> {
        let mut literal = String::new();
        if self.peek()? == Some(b'-') {
            self.bump(b'-');
            literal.push('-');
        }

        match self.peek()? {
            Some(b'0') => {
                self.bump(b'0');
                literal.push('0');
            }
            Some(b @ b'1'..=b'9') => {
                self.bump(b);
                literal.push(b as char);
                self.read_digits(&mut literal)?;
            }
            Some(b) => return Err(self.unexpected(b, "in numeric literal")),
            None => return Err(self.eof("number")),
        }

        if self.peek()? == Some(b'.') {
            self.bump(b'.');
            literal.push('.');
            self.expect_digit(&mut literal, "after decimal point in numeric literal")?;
            self.read_digits(&mut literal)?;
        }

        if let Some(e @ (b'e' | b'E')) = self.peek()? {
            self.bump(e);
            literal.push(e as char);
            if let Some(sign @ (b'+' | b'-')) = self.peek()? {
                self.bump(sign);
                literal.push(sign as char);
            }
            self.expect_digit(&mut literal, "in exponent of numeric literal")?;
            self.read_digits(&mut literal)?;
        }

        Ok(literal)
    }

    fn expect_digit(&mut self, literal: &mut String, context: &str) -> Result<()> {
        match self.peek()? {
            Some(b @ b'0'..=b'9') => {
                self.bump(b);
                literal.push(b as char);
                Ok(())
            }
            Some(b) => Err(self.unexpected(b, context)),
            None => Err(self.eof("number")),
        }
    }

    fn read_digits(&mut self, literal: &mut String) -> Result<()> {
        while let Some(b @ b'0'..=b'9') = self.peek()? {
            self.bump(b);
            literal.push(b as char);
        }
        Ok(())
    }

    fn read_literal(&mut self, word: &'static str, value: Value) -> Result<Value> {
        for expected in word.bytes() {
            match self.peek()? {
                Some(b) if b == expected => self.bump(b),
                Some(b) => {
                    let context = format!(
                        "in literal {} (expecting {})",
                        word,
                        describe_byte(expected)
                    );
                    return Err(self.unexpected(b, &context));
                }
                None => return Err(self.eof(word)),
            }
        }
        Ok(value)
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b @ (b' ' | b'\t' | b'\n' | b'\r')) = self.peek()? {
            self.bump(b);
        }
        Ok(())
    }

    /// Look at the next byte without consuming it.
    fn peek(&mut self) -> Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Consume `byte`, which the caller has just seen via `peek`.
    fn bump(&mut self, byte: u8) {
        self.inner.consume(1);
        self.position.offset += 1;
        if byte == b'\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }

    fn unexpected(&self, byte: u8, context: &str) -> Json2YamlError {
        Json2YamlError::Syntax {
            message: format!("invalid character {} {}", describe_byte(byte), context),
            position: self.position,
        }
    }

    fn eof(&self, context: &'static str) -> Json2YamlError {
        Json2YamlError::UnexpectedEof {
            context,
            position: self.position,
        }
    }
}

/// Iterates over top-level values, stopping after the first error.
impl<R: Read> Iterator for Reader<R> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_value() {
            Ok(value) => value.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("byte 0x{:02x}", byte)
    }
}
