//! Line and token cursor over comma-delimited catalog text.
//!
//! The stream is consumed in two nested loops:
//!
//! ```ignore
//! while stream.has_more_lines() {
//!     stream.next_line()?;
//!     while stream.has_more_tokens() {
//!         let token = stream.next_token();
//!     }
//! }
//! ```
//!
//! Fields are split on a single comma. There is no quoting, escaping or
//! whitespace trimming, so `CSCI101,Intro,` has three tokens, the last one
//! empty. Blank lines are still reported as lines, but carry no tokens.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{IngestError, Result};

/// Whether the stream can advance to another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    HasMoreLines,
    Exhausted,
}

/// Whether the current line has unread tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    HasMoreTokens,
    LineExhausted,
}

/// Stateful token source over catalog text.
pub struct TokenStream<R> {
    source_name: String,
    reader: R,
    lookahead: Option<String>,
    lines_read: u64,
    stream_state: StreamState,
    tokens: Vec<String>,
    next_token: usize,
    line_state: LineState,
    line_number: u64,
}

impl TokenStream<BufReader<File>> {
    /// Opens `path` for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Open`] when the file cannot be opened and
    /// [`IngestError::EmptyInput`] when it has no content at all.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened catalog file");
        Self::from_reader(path.display().to_string(), file)
    }
}

impl<R: Read> TokenStream<BufReader<R>> {
    /// Wraps any reader. `source_name` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::EmptyInput`] when the reader yields no bytes.
    pub fn from_reader(source_name: impl Into<String>, reader: R) -> Result<Self> {
        Self::from_buf_read(source_name, BufReader::new(reader))
    }
}

impl<R: BufRead> TokenStream<R> {
    /// Wraps an already buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::EmptyInput`] when the reader yields no bytes.
    pub fn from_buf_read(source_name: impl Into<String>, mut reader: R) -> Result<Self> {
        let source_name = source_name.into();
        if reader.fill_buf()?.is_empty() {
            return Err(IngestError::EmptyInput { source_name });
        }
        let mut stream = Self {
            source_name,
            reader,
            lookahead: None,
            lines_read: 0,
            stream_state: StreamState::Exhausted,
            tokens: Vec::new(),
            next_token: 0,
            line_state: LineState::LineExhausted,
            line_number: 0,
        };
        stream.prefetch()?;
        Ok(stream)
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn stream_state(&self) -> StreamState {
        self.stream_state
    }

    pub fn line_state(&self) -> LineState {
        self.line_state
    }

    pub fn has_more_lines(&self) -> bool {
        self.stream_state == StreamState::HasMoreLines
    }

    pub fn has_more_tokens(&self) -> bool {
        self.line_state == LineState::HasMoreTokens
    }

    /// 1-based line number of the current line (0 before the first line).
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Makes the next line current.
    ///
    /// After the last line has been made current the stream reports
    /// [`StreamState::Exhausted`]. Calling this on an exhausted stream leaves
    /// an empty current line.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Read`] when the following line cannot be read.
    pub fn next_line(&mut self) -> Result<()> {
        self.next_token = 0;
        match self.lookahead.take() {
            Some(line) => {
                self.line_number = self.lines_read;
                if line.is_empty() {
                    self.tokens.clear();
                    self.line_state = LineState::LineExhausted;
                } else {
                    self.tokens = line.split(',').map(str::to_string).collect();
                    self.line_state = LineState::HasMoreTokens;
                }
                trace!(line = self.line_number, tokens = self.tokens.len(), "line");
                self.prefetch()
            }
            None => {
                self.tokens.clear();
                self.line_state = LineState::LineExhausted;
                Ok(())
            }
        }
    }

    /// Returns and consumes the next token on the current line.
    ///
    /// Returns an empty string once the line is exhausted.
    pub fn next_token(&mut self) -> String {
        if self.line_state == LineState::LineExhausted {
            return String::new();
        }
        let token = self
            .tokens
            .get_mut(self.next_token)
            .map(std::mem::take)
            .unwrap_or_default();
        self.next_token += 1;
        if self.next_token >= self.tokens.len() {
            self.line_state = LineState::LineExhausted;
        }
        token
    }

    fn prefetch(&mut self) -> Result<()> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|source| IngestError::Read {
                source_name: self.source_name.clone(),
                line: self.lines_read + 1,
                source,
            })?;
        if read == 0 {
            self.lookahead = None;
            self.stream_state = StreamState::Exhausted;
            return Ok(());
        }
        self.lines_read += 1;
        strip_line_ending(&mut line);
        self.lookahead = Some(line);
        self.stream_state = StreamState::HasMoreLines;
        Ok(())
    }
}

impl<R: BufRead + Seek> TokenStream<R> {
    /// Rewinds the stream to the first line.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot seek or the first line cannot
    /// be read.
    pub fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.lines_read = 0;
        self.line_number = 0;
        self.tokens.clear();
        self.next_token = 0;
        self.line_state = LineState::LineExhausted;
        self.prefetch()
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
