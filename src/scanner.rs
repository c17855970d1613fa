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

//! Line-oriented scanning shared by the [index](crate::index) and
//! [extract](crate::extract) modules.

use crate::OffsetConvention;
use crate::error::PepError;
use crate::header::is_header;

use std::io::BufRead;

use bstr::ByteSlice;

/// One line of a .pep file with its terminator stripped.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line {
    /// Position of the first byte of the line.
    pub offset: u64,
    /// Line contents without the trailing `\r` and `\n` characters.
    pub text: String,
}

impl Line {
    /// Returns true if the line starts with `>`.
    pub fn is_header(&self) -> bool {
        is_header(&self.text)
    }
}

/// Iterates over the lines of a [BufRead] while keeping track of where each
/// line starts.
///
/// With [OffsetConvention::Exact] the reported offset is the number of bytes
/// consumed before the line. With [OffsetConvention::SingleByteTerminator] the
/// offset is reconstructed from the stripped line lengths plus one byte per
/// line, which drifts on `\r\n` input.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD in [Line::text].
pub struct LineScanner<'a, R: BufRead> {
    conn: &'a mut R,
    buf: Vec<u8>,
    convention: OffsetConvention,

    // Position of the next line under each convention.
    pos: u64,
    legacy_pos: u64,

    done: bool,
}

impl<'a, R: BufRead> LineScanner<'a, R> {
    /// Scan `conn` from its current position, which is taken to be `start`.
    pub fn new(
        conn: &'a mut R,
        start: u64,
        convention: OffsetConvention,
    ) -> Self {
        LineScanner{
            conn, buf: Vec::new(), convention,
            pos: start, legacy_pos: start,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<'_, R> {
    type Item = Result<Line, PepError>;

    fn next(
        &mut self,
    ) -> Option<Result<Line, PepError>> {
        if self.done {
            return None
        }

        self.buf.clear();
        let nbytes = match self.conn.read_until(b'\n', &mut self.buf) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()))
            },
        };
        if nbytes == 0 {
            self.done = true;
            return None
        }

        let stripped = self.buf.trim_end_with(|c| c == '\r' || c == '\n');
        let offset = match self.convention {
            OffsetConvention::Exact => self.pos,
            OffsetConvention::SingleByteTerminator => self.legacy_pos,
        };

        self.pos += nbytes as u64;
        self.legacy_pos += stripped.len() as u64 + 1;

        Some(Ok(Line{ offset, text: stripped.to_str_lossy().into_owned() }))
    }
}
