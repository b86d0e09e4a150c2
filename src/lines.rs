use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A lazy, forward-only sequence of text lines over a reader.
///
/// The underlying reader is released the moment the source is
/// exhausted (or a read fails), not when the value is dropped, so a
/// long-lived `LineSource` never pins an open file handle it will no
/// longer use. Iteration after exhaustion keeps returning `None`
/// without reopening anything; there is no way to restart — open a
/// fresh source to re-read.
///
/// Line terminators (`\n` and `\r\n`) are stripped.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: Option<R>,
}

impl LineSource<BufReader<File>> {
    /// Opens the file at `path` for line-by-line reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    /// Releases the underlying reader. Idempotent; also happens
    /// automatically on end-of-input and on a read error.
    pub fn close(&mut self) {
        self.reader = None;
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                self.close();
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(err) => {
                self.close();
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn source(input: &str) -> LineSource<Cursor<Vec<u8>>> {
        LineSource::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn yields_lines_without_terminators() {
        let lines: Vec<String> = source("R 4\nU 4\r\nL 3\n").map(Result::unwrap).collect();
        assert_eq!(lines, ["R 4", "U 4", "L 3"]);
    }

    #[test]
    fn final_line_without_newline() {
        let lines: Vec<String> = source("R 4\nU 4").map(Result::unwrap).collect();
        assert_eq!(lines, ["R 4", "U 4"]);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut lines = source("R 4\n");
        assert_eq!(lines.next().map(Result::unwrap), Some(String::from("R 4")));
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }

    #[test]
    fn close_is_idempotent() {
        let mut lines = source("R 4\n");
        lines.close();
        lines.close();
        assert!(lines.next().is_none());
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken stream"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::Other, "broken stream"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn read_error_surfaces_once_then_ends() {
        let mut lines = LineSource::new(FailingReader);
        assert!(matches!(lines.next(), Some(Err(_))));
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }
}
