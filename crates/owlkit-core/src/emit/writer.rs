//! Buffered row writers

use std::io::{self, BufWriter, Write};

use crate::constants::{LINE_ENDING, RELATIONSHIP_HEADER};
use crate::emit::RelationshipRow;
use crate::error::{Error, Result};

/// Writes the relationship header once, then one line per row.
///
/// Output goes through a fixed-size `BufWriter`; call [`RowWriter::finish`] to
/// flush and get the sink back.
pub struct RowWriter<W: Write> {
    out: BufWriter<W>,
    rows: usize,
}

impl<W: Write> RowWriter<W> {
    pub fn new(sink: W) -> io::Result<Self> {
        let mut out = BufWriter::new(sink);
        write!(out, "{RELATIONSHIP_HEADER}{LINE_ENDING}")?;
        Ok(Self { out, rows: 0 })
    }

    pub fn write_row(&mut self, row: &RelationshipRow) -> io::Result<()> {
        write!(self.out, "{row}{LINE_ENDING}")?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

/// Row writer for use inside record callbacks.
///
/// Callbacks cannot return errors, so the first write failure is kept and
/// every later row is skipped. The failure surfaces from [`RowEmitter::finish`].
pub struct RowEmitter<W: Write> {
    writer: RowWriter<W>,
    failure: Option<Error>,
}

impl<W: Write> RowEmitter<W> {
    pub fn new(sink: W) -> io::Result<Self> {
        Ok(Self {
            writer: RowWriter::new(sink)?,
            failure: None,
        })
    }

    pub fn emit(&mut self, row: &RelationshipRow) {
        if self.failure.is_some() {
            return;
        }
        if let Err(source) = self.writer.write_row(row) {
            self.failure = Some(Error::RowEmission {
                relationship_id: row.id,
                source,
            });
        }
    }

    pub fn rows(&self) -> usize {
        self.writer.rows()
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Flush pending rows, then report the first captured failure if any.
    pub fn finish(self) -> Result<W> {
        let flushed = self.writer.finish();
        if let Some(failure) = self.failure {
            return Err(failure);
        }
        Ok(flushed?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::RelationshipState;
    use crate::constants::IS_A;

    /// Accepts `budget` bytes, then fails every write.
    struct Failing {
        budget: usize,
    }

    impl Write for Failing {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget < buf.len() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn row(id: u64) -> RelationshipRow {
        RelationshipRow::inactivation(&RelationshipState::stated(id, 10, IS_A, 20).module(9999))
    }

    #[test]
    fn test_writes_header_then_rows() {
        let mut writer = RowWriter::new(Vec::new()).unwrap();
        writer.write_row(&row(100)).unwrap();
        assert_eq!(writer.rows(), 1);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            format!("{RELATIONSHIP_HEADER}\r\n100\t0\t9999\t10\t20\t0\t116680003\r\n")
        );
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let writer = RowWriter::new(Vec::new()).unwrap();
        let out = writer.finish().unwrap();
        assert_eq!(out, format!("{RELATIONSHIP_HEADER}\r\n").into_bytes());
    }

    #[test]
    fn test_emitter_captures_first_failure() {
        // BufWriter only touches the sink once its buffer fills, so push
        // enough rows to force a write through.
        let mut emitter = RowEmitter::new(Failing { budget: 0 }).unwrap();
        for id in 1..=2000 {
            emitter.emit(&row(id));
        }
        assert!(emitter.has_failed());

        match emitter.finish() {
            Err(Error::RowEmission { relationship_id, .. }) => assert!(relationship_id > 1),
            other => panic!("expected row emission failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_emitter_surfaces_flush_failure() {
        let mut emitter = RowEmitter::new(Failing { budget: 0 }).unwrap();
        emitter.emit(&row(1));
        assert!(!emitter.has_failed());
        assert_eq!(emitter.rows(), 1);
        assert!(matches!(emitter.finish(), Err(Error::Io(_))));
    }
}
