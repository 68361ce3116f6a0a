//! Line-oriented wordlist reader.
//!
//! Bytes are decoded incrementally and split into lines afterwards, so
//! encodings such as UTF-16 never break on a raw `0x0A` byte. `\n`, `\r\n`
//! and a lone `\r` all end a line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::encoding::{Encoding, TextDecoder};
use crate::error::{MaskError, Result};

const READ_BUFFER: usize = 1 << 16;

/// One decoded wordlist line without its terminator.
#[derive(Debug)]
pub struct Line<'a> {
    pub text: &'a str,
    /// Whether the line ended with a terminator rather than end of input.
    pub terminated: bool,
    /// 1-based line number.
    pub number: u64,
}

impl Line<'_> {
    /// Char length of the line as read, with the terminator counted as one.
    pub fn raw_len(&self) -> usize {
        self.text.chars().count() + usize::from(self.terminated)
    }

    /// The candidate word: the line with surrounding whitespace removed.
    pub fn word(&self) -> &str {
        self.text.trim_matches(is_space)
    }
}

/// Unicode `White_Space` plus the ASCII information separators
/// `\x1c`..=`\x1f`, which also count as whitespace when stripping words.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub struct WordlistReader<R> {
    inner: R,
    encoding: Encoding,
    decoder: TextDecoder,
    /// Decoded text not yet handed out as lines, starting at `pos`.
    pending: String,
    pos: usize,
    line: String,
    eof: bool,
    line_no: u64,
    offset: u64,
}

impl<R: BufRead> WordlistReader<R> {
    pub fn new(inner: R, encoding: Encoding) -> Self {
        Self {
            inner,
            encoding,
            decoder: encoding.decoder(),
            pending: String::new(),
            pos: 0,
            line: String::new(),
            eof: false,
            line_no: 0,
            offset: 0,
        }
    }

    /// Read and decode the next line. Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> Result<Option<Line<'_>>> {
        loop {
            let found = {
                let rest = &self.pending[self.pos..];
                rest.find(is_break).map(|i| {
                    let bytes = rest.as_bytes();
                    (i, bytes[i], bytes.get(i + 1).copied())
                })
            };
            match found {
                // `\r` at the end of the buffer may be the first half of `\r\n`.
                Some((_, b'\r', None)) if !self.eof => self.fill()?,
                Some((i, first, next)) => {
                    let term = if first == b'\r' && next == Some(b'\n') { 2 } else { 1 };
                    let start = self.pos;
                    self.line.clear();
                    self.line.push_str(&self.pending[start..start + i]);
                    self.pos = start + i + term;
                    return Ok(Some(self.emit(true)));
                }
                None if self.eof => {
                    if self.pos == self.pending.len() {
                        return Ok(None);
                    }
                    self.line.clear();
                    self.line.push_str(&self.pending[self.pos..]);
                    self.pos = self.pending.len();
                    return Ok(Some(self.emit(false)));
                }
                None => self.fill()?,
            }
        }
    }

    /// Lines read so far.
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    fn emit(&mut self, terminated: bool) -> Line<'_> {
        self.line_no += 1;
        Line {
            text: &self.line,
            terminated,
            number: self.line_no,
        }
    }

    /// Decode the next chunk of input onto `pending`.
    fn fill(&mut self) -> Result<()> {
        if self.pos > 0 {
            self.pending.drain(..self.pos);
            self.pos = 0;
        }
        let chunk = self.inner.fill_buf()?;
        let len = chunk.len();
        let last = len == 0;
        let decoded = self.decoder.decode(chunk, last, &mut self.pending);
        self.inner.consume(len);
        let chunk_start = self.offset;
        self.offset += len as u64;
        self.eof = last;
        decoded.map_err(|at| self.decode_error(chunk_start + at as u64))
    }

    /// Decode failure at byte `offset`, numbered by the line it falls in.
    fn decode_error(&self, offset: u64) -> MaskError {
        let rest = &self.pending[self.pos..];
        let bytes = rest.as_bytes();
        let breaks = bytes
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
            .count();
        MaskError::Decode {
            line: self.line_no + breaks as u64 + 1,
            offset,
            encoding: self.encoding.name(),
        }
    }
}

/// Open a wordlist file for buffered reading.
pub fn open(path: &Path, encoding: Encoding) -> Result<WordlistReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| MaskError::from_io(path, e))?;
    if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
        return Err(MaskError::from_io(
            path,
            io::Error::new(io::ErrorKind::Other, "is a directory"),
        ));
    }
    Ok(WordlistReader::new(
        BufReader::with_capacity(READ_BUFFER, file),
        encoding,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_from<R: BufRead>(input: R, encoding: Encoding) -> Result<Vec<(String, bool)>> {
        let mut reader = WordlistReader::new(input, encoding);
        let mut out = Vec::new();
        while let Some(line) = reader.next_line()? {
            out.push((line.text.to_string(), line.terminated));
        }
        Ok(out)
    }

    fn collect(input: &[u8], encoding: Encoding) -> Result<Vec<(String, bool)>> {
        collect_from(Cursor::new(input.to_vec()), encoding)
    }

    fn texts(lines: &[(String, bool)]) -> Vec<&str> {
        lines.iter().map(|(t, _)| t.as_str()).collect()
    }

    #[test]
    fn handles_mixed_terminators() {
        let lines = collect(b"one\r\ntwo\nthree", Encoding::utf8()).unwrap();
        assert_eq!(
            lines,
            vec![
                ("one".to_string(), true),
                ("two".to_string(), true),
                ("three".to_string(), false),
            ]
        );
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let lines = collect(b"ab\rCD\n\r\rx\r", Encoding::utf8()).unwrap();
        assert_eq!(texts(&lines), vec!["ab", "CD", "", "", "x"]);
        assert!(lines.iter().all(|(_, terminated)| *terminated));
    }

    #[test]
    fn crlf_split_across_reads_counts_once() {
        let input = io::BufReader::with_capacity(1, Cursor::new(b"ab\r\ncd\r\n".to_vec()));
        let lines = collect_from(input, Encoding::utf8()).unwrap();
        assert_eq!(texts(&lines), vec!["ab", "cd"]);
    }

    #[test]
    fn raw_len_counts_terminator_once() {
        let mut reader = WordlistReader::new(Cursor::new(b"ab\r\nab\rab".to_vec()), Encoding::utf8());
        assert_eq!(reader.next_line().unwrap().unwrap().raw_len(), 3);
        assert_eq!(reader.next_line().unwrap().unwrap().raw_len(), 3);
        assert_eq!(reader.next_line().unwrap().unwrap().raw_len(), 2);
        assert!(reader.next_line().unwrap().is_none());
        assert_eq!(reader.lines_read(), 3);
    }

    #[test]
    fn decode_error_reports_position() {
        let err = collect(b"ok\nbad\xFF\n", Encoding::utf8()).unwrap_err();
        match err {
            MaskError::Decode { line, offset, encoding } => {
                assert_eq!(line, 2);
                assert_eq!(offset, 6);
                assert_eq!(encoding, "UTF-8");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let err = collect(b"a\rb\r\nc\xC3\n", Encoding::Ascii).unwrap_err();
        assert!(matches!(err, MaskError::Decode { line: 3, offset: 6, .. }));
    }

    #[test]
    fn utf16le_is_split_after_decoding() {
        // U+0A0A encodes as 0x0A 0x0A in UTF-16LE.
        let bytes: Vec<u8> = "a\u{a0a}\r\nB\n"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        let encoding: Encoding = "utf-16le".parse().unwrap();
        let lines = collect(&bytes, encoding).unwrap();
        assert_eq!(texts(&lines), vec!["a\u{a0a}", "B"]);
    }

    #[test]
    fn latin1_accepts_any_bytes() {
        let lines = collect(b"caf\xE9\n", Encoding::Latin1).unwrap();
        assert_eq!(lines[0].0, "caf\u{e9}");
    }

    #[test]
    fn word_strips_surrounding_whitespace() {
        let mut reader = WordlistReader::new(Cursor::new(b"  pass word \t\n".to_vec()), Encoding::utf8());
        let line = reader.next_line().unwrap().unwrap();
        assert_eq!(line.word(), "pass word");
        assert_eq!(line.raw_len(), 14);
    }

    #[test]
    fn word_strips_information_separators() {
        let mut reader = WordlistReader::new(Cursor::new(b"\x1cab\x1f\n".to_vec()), Encoding::utf8());
        assert_eq!(reader.next_line().unwrap().unwrap().word(), "ab");
        assert!(is_space('\u{85}'));
        assert!(!is_space('\u{1b}'));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(
            open(&path, Encoding::utf8()),
            Err(MaskError::NotFound { .. })
        ));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open(dir.path(), Encoding::utf8()),
            Err(MaskError::Io { .. })
        ));
    }
}
