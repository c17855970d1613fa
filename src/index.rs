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
use crate::error::PepError;
use crate::scanner::LineScanner;

use std::io::BufRead;

/// Find the offset of every record in a .pep file.
///
/// Reads `conn` from its current position to the end and returns the offsets
/// of the header lines in file order. Empty input gives an empty vector.
///
/// With [OffsetConvention::Exact] only header lines produce an offset; lines
/// before the first header are skipped with a warning.
///
/// With [OffsetConvention::SingleByteTerminator] the first line always
/// produces offset 0, and later offsets assume every line ends in a single
/// byte. This reproduces offsets stored by older tools but is wrong for
/// `\r\n` files.
///
pub fn index_from_read<R: BufRead>(
    conn: &mut R,
    convention: OffsetConvention,
) -> Result<Vec<u64>, PepError> {
    let mut offsets: Vec<u64> = Vec::new();
    let mut n_preamble = 0_usize;

    for (line_idx, line) in LineScanner::new(conn, 0, convention).enumerate() {
        let line = line?;
        let first_line = line_idx == 0;
        match convention {
            OffsetConvention::Exact => {
                if line.is_header() {
                    offsets.push(line.offset);
                } else if offsets.is_empty() {
                    n_preamble += 1;
                }
            },
            OffsetConvention::SingleByteTerminator => {
                if first_line || line.is_header() {
                    offsets.push(line.offset);
                }
            },
        }
    }

    if n_preamble > 0 {
        log::warn!("Skipped {} line(s) before the first header", n_preamble);
    }
    log::info!("Indexed {} record(s)", offsets.len());

    Ok(offsets)
}
