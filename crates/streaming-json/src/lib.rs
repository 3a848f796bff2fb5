//! # Concatenated-JSON stream decoding
//!
//! Some providers stream results as a sequence of self-contained JSON
//! documents written back to back on the response body, without SSE framing
//! or length prefixes. This crate provides `JsonChunkDecoder`, an incremental
//! decoder that re-frames arbitrary byte chunks into complete top-level JSON
//! documents, handling documents split across chunk boundaries.
//!
//! The decoder does not parse the documents; callers deserialize each yielded
//! `Bytes` payload themselves so that schema errors surface where the schema
//! is known.

use bytes::Bytes;
use std::collections::VecDeque;

/// Incremental decoder for concatenated top-level JSON documents.
pub struct JsonChunkDecoder {
    /// Bytes not yet assembled into a complete document.
    buffer: Vec<u8>,
    /// Scan position within `buffer` (everything before it has been scanned).
    scan_pos: usize,
    /// Byte offset where the current document started, if one is open.
    doc_start: Option<usize>,
    /// Brace/bracket nesting depth inside the current document.
    depth: usize,
    /// Whether the scanner is inside a JSON string literal.
    in_string: bool,
    /// Whether the previous byte inside a string was a backslash.
    escaped: bool,
    /// Completed documents ready to be yielded.
    queue: VecDeque<Bytes>,
}

impl JsonChunkDecoder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            scan_pos: 0,
            doc_start: None,
            depth: 0,
            in_string: false,
            escaped: false,
            queue: VecDeque::new(),
        }
    }

    /// Push new data and get any complete JSON documents.
    ///
    /// Incomplete documents stay buffered until a later push (or `finish`)
    /// completes them.
    pub fn push(&mut self, chunk: &[u8]) -> impl Iterator<Item = Bytes> + '_ {
        self.buffer.extend_from_slice(chunk);
        self.process_buffer();
        self.queue.drain(..)
    }

    /// Finalize the stream and return any leftover non-whitespace bytes.
    ///
    /// A non-empty remainder means the peer closed the connection mid-document
    /// (or sent something that is not JSON); callers should treat it as a
    /// protocol error after attempting to parse it.
    pub fn finish(&mut self) -> Option<Bytes> {
        let leftover: Vec<u8> = std::mem::take(&mut self.buffer);
        self.scan_pos = 0;
        self.doc_start = None;
        self.depth = 0;
        self.in_string = false;
        self.escaped = false;
        if leftover.iter().any(|b| !b.is_ascii_whitespace()) {
            Some(Bytes::from(leftover))
        } else {
            None
        }
    }

    fn process_buffer(&mut self) {
        while self.scan_pos < self.buffer.len() {
            let b = self.buffer[self.scan_pos];

            if self.doc_start.is_none() {
                if b.is_ascii_whitespace() {
                    self.scan_pos += 1;
                    continue;
                }
                // Anything else starts a document. Non-JSON garbage will never
                // close and surfaces via `finish` as a protocol error.
                self.doc_start = Some(self.scan_pos);
            }

            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if b == b'\\' {
                    self.escaped = true;
                } else if b == b'"' {
                    self.in_string = false;
                }
                self.scan_pos += 1;
                continue;
            }

            match b {
                b'"' => self.in_string = true,
                b'{' | b'[' => self.depth += 1,
                b'}' | b']' => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.depth == 0 {
                        let start = self.doc_start.take().unwrap_or(0);
                        let doc = self.buffer[start..=self.scan_pos].to_vec();
                        self.queue.push_back(Bytes::from(doc));
                        // Drop the consumed prefix and restart the scan.
                        self.buffer.drain(..=self.scan_pos);
                        self.scan_pos = 0;
                        continue;
                    }
                }
                _ => {}
            }
            self.scan_pos += 1;
        }
    }
}

impl Default for JsonChunkDecoder {
    fn default() -> Self {
        Self::new()
    }
}
