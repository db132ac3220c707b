//! Character sources the tokenizer reads from.
//!
//! A source hands out one character at a time and reports exhaustion with
//! `Ok(None)`. Read failures are returned as they are; the tokenizer never
//! retries them.

use std::io::{self, BufRead};

pub trait CharSource {
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// In-memory text.
#[derive(Debug, Clone, Default)]
pub struct StringSource {
    text: String,
    offset: usize,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        StringSource {
            text: text.into(),
            offset: 0,
        }
    }

    pub fn remaining(&self) -> &str {
        &self.text[self.offset..]
    }
}

impl From<&str> for StringSource {
    fn from(text: &str) -> Self {
        StringSource::new(text)
    }
}

impl From<String> for StringSource {
    fn from(text: String) -> Self {
        StringSource::new(text)
    }
}

impl CharSource for StringSource {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let next = self.text[self.offset..].chars().next();
        if let Some(ch) = next {
            self.offset += ch.len_utf8();
        }
        Ok(next)
    }
}

/// Decodes UTF-8 from a buffered reader, one character per call.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.reader.fill_buf()?.first().copied())
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let lead = match self.read_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = utf8_width(lead).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid UTF-8 lead byte {:#04x}", lead),
            )
        })?;

        // A byte that is not a continuation ends the sequence and stays unread.
        let mut buffer = [lead, 0, 0, 0];
        for slot in buffer.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(byte) if byte & 0b1100_0000 == 0b1000_0000 => {
                    self.reader.consume(1);
                    *slot = byte;
                }
                Some(byte) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("invalid UTF-8 continuation byte {:#04x}", byte),
                    ))
                }
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "truncated UTF-8 sequence",
                    ))
                }
            }
        }

        let decoded = std::str::from_utf8(&buffer[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(decoded.chars().next())
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}
