// pepreader: Read KEGG .pep protein flat files.
//
// Copyright 2025 Alexander da Franca Fernandes [alexander@francafernandes.com.br].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use crate::OffsetConvention;
use crate::Record;
use crate::error::PepError;
use crate::header::full_header;
use crate::scanner::LineScanner;

use std::io::BufRead;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

/// Append a sequence line to the sequence read so far.
///
/// `None` means no sequence line has been read for the current record.
pub fn append_sequence(
    sequence: Option<String>,
    line: &str,
) -> String {
    match sequence {
        Some(mut seq) => {
            seq.push_str(line);
            seq
        },
        None => line.to_string(),
    }
}

/// Iterator over the records of a .pep file.
///
/// A record is completed by the next header line or by the end of the input.
/// Every header produces a record; a header followed directly by another
/// header or by the end of the input has an empty sequence.
///
/// Lines before the first header are skipped.
pub struct Records<'a, R: BufRead> {
    lines: LineScanner<'a, R>,

    // Record in progress
    header: Option<String>,
    sequence: Option<String>,

    n_skipped: usize,
}

impl<'a, R: BufRead> Records<'a, R> {
    pub fn new(
        conn: &'a mut R,
    ) -> Self {
        Records{
            lines: LineScanner::new(conn, 0, OffsetConvention::Exact),
            header: None, sequence: None,
            n_skipped: 0,
        }
    }

    // Continue from a header line that has already been consumed.
    fn resume(
        lines: LineScanner<'a, R>,
        header: &str,
    ) -> Self {
        Records{
            lines,
            header: Some(full_header(header)), sequence: None,
            n_skipped: 0,
        }
    }

    fn complete(
        &mut self,
    ) -> Option<Record> {
        let header = self.header.take()?;
        let sequence = match self.sequence.take() {
            Some(seq) => seq,
            None => {
                log::trace!("Record {} has no sequence lines", header);
                String::new()
            },
        };
        Some(Record{ header, sequence })
    }
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = Result<Record, PepError>;

    fn next(
        &mut self,
    ) -> Option<Result<Record, PepError>> {
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    // Drop the partial record so iteration ends here.
                    self.header = None;
                    self.sequence = None;
                    return Some(Err(e))
                },
                None => break,
            };

            if line.is_header() {
                let record = self.complete();
                self.header = Some(full_header(&line.text));
                if record.is_some() {
                    return record.map(Ok)
                }
            } else if self.header.is_some() {
                self.sequence = Some(append_sequence(self.sequence.take(), &line.text));
            } else {
                self.n_skipped += 1;
            }
        }

        if self.n_skipped > 0 {
            log::warn!("Skipped {} line(s) before the first header", self.n_skipped);
            self.n_skipped = 0;
        }

        self.complete().map(Ok)
    }
}

/// Read the record whose header line starts at `offset`.
///
/// Seeks `conn` to `offset` and reads until the next header line or the end
/// of the input.
///
/// ## Errors
///
/// Returns [PepError::InvalidOffset] if `offset` is at or past the end of the
/// input, if `offset` is not the first byte of a line, or if the line at
/// `offset` is not a header line.
///
pub fn extract_from_read<R: BufRead + Seek>(
    conn: &mut R,
    offset: u64,
) -> Result<Record, PepError> {
    let len = conn.seek(SeekFrom::End(0))?;
    if offset >= len {
        return Err(PepError::InvalidOffset{ offset, reason: format!("input is {} bytes long", len) })
    }
    if offset > 0 {
        let mut previous = [0_u8; 1];
        conn.seek(SeekFrom::Start(offset - 1))?;
        conn.read_exact(&mut previous)?;
        if previous[0] != b'\n' {
            return Err(PepError::InvalidOffset{ offset, reason: "not the start of a line".to_string() })
        }
    }
    conn.seek(SeekFrom::Start(offset))?;

    let mut lines = LineScanner::new(conn, offset, OffsetConvention::Exact);
    let first = match lines.next() {
        Some(line) => line?,
        None => return Err(PepError::InvalidOffset{ offset, reason: "no line at offset".to_string() }),
    };
    if !first.is_header() {
        return Err(PepError::InvalidOffset{ offset, reason: "not the start of a header line".to_string() })
    }

    let mut records = Records::resume(lines, &first.text);
    match records.next() {
        Some(record) => record,
        None => Err(PepError::InvalidOffset{ offset, reason: "no record at offset".to_string() }),
    }
}

/// Read every record from `conn` in file order.
pub fn extract_all_from_read<R: BufRead>(
    conn: &mut R,
) -> Result<Vec<Record>, PepError> {
    let records = Records::new(conn).collect::<Result<Vec<Record>, PepError>>()?;
    log::info!("Extracted {} record(s)", records.len());
    Ok(records)
}
