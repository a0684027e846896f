use std::io::{self, Read};

/// Splits a byte stream into whitespace separated tokens, skipping `#` comments.
///
/// A read error ends the token stream; it is kept until [`Tokenizer::take_error`].
pub struct Tokenizer<R: Read> {
    reader: R,
    buffer: Vec<u8>,
    error: Option<io::Error>,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer {
            reader,
            buffer: Vec::new(),
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        let mut byte = [0; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let mut in_comment = false;

        while let Some(byte) = self.read_byte() {
            if in_comment {
                if byte == b'\n' {
                    in_comment = false;
                    if !self.buffer.is_empty() {
                        break;
                    }
                }
                continue;
            }
            if byte == b'#' {
                in_comment = true;
                continue;
            }
            if byte.is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte);
            }
        }

        if self.buffer.is_empty() || self.error.is_some() {
            return None;
        }

        Some(String::from_utf8_lossy(&self.buffer).into_owned())
    }
}
