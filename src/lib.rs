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

//! pepreader is a library and a command-line client for reading the .pep
//! protein files distributed with KEGG releases.
//!
//! A .pep file is FASTA-like: every record starts with a header line beginning
//! with `>` and continues with sequence lines until the next header or the end
//! of the file.
//!
//! ```text
//! >rno:294324  Agpat3; 1-acylglycerol-3-phosphate O-acyltransferase 3 (EC:2.3.1.51); ... [EC:2.3.1.51 2.3.1.-]
//! MGLLAFLKTQFVLHLLVGFVFVVSGLVINFVQLCTLALWPVSKQLYRRLNCRLAYSLWSQ
//! LVMLLEWWSCTECTLFTDQATVERFGKEHAVIILNHNFEIDFLCGWTMCERFGVLGSSKV
//! >hsa:10555  AGPAT2, ...
//! ```
//!
//! pepreader can
//!
//!   - Find the byte offset of every record ([index()]).
//!   - Read a single record given its offset ([extract()]) or all records ([extract_all]).
//!   - Parse the identifier, organism code, description, and EC numbers from a header ([header]).
//!
//! ## Usage
//!
//! ### Command line
//!
//! The pepreader CLI supports the following subcommands:
//!   - `pepreader index` print the offset of every record.
//!   - `pepreader entries` print the parsed fields of every record, or of the records at `--offset`.
//!   - `pepreader dump` print every record with its sequence on a single line.
//!
//! ### Rust API
//!
//! The functions taking a path open the file themselves. The `_from_read`
//! variants in [index](mod@index) and [extract](mod@extract) work on anything
//! implementing [BufRead](std::io::BufRead), and [Seek](std::io::Seek) when
//! seeking to an offset.
//!
//! ```rust
//! use pepreader::{index, parsed_entry, OffsetConvention};
//!
//! let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/example.pep");
//!
//! let offsets = index(path, OffsetConvention::Exact).unwrap();
//! let entry = parsed_entry(path, offsets[0]).unwrap();
//!
//! assert_eq!(entry.header.identification, "rno:294324");
//! assert_eq!(entry.header.organism_code, "rno");
//! assert_eq!(entry.header.ec_numbers_square, vec!["2.3.1.51".to_string(), "2.3.1.-".to_string()]);
//! ```
//!
//! Iterating over [Records](extract::Records) avoids holding the whole file
//! in memory.
//!

use crate::error::PepError;
use crate::header::ParsedHeader;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod error;
pub mod extract;
pub mod header;
pub mod index;
pub mod scanner;

/// How record offsets are computed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetConvention {
    /// Byte position reported by the reader.
    #[default]
    Exact,
    /// Stripped line length plus one byte per line. Matches offsets stored by
    /// tools that assume `\n` line endings.
    SingleByteTerminator,
}

impl std::str::FromStr for OffsetConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(OffsetConvention::Exact),
            "single-byte-terminator" => Ok(OffsetConvention::SingleByteTerminator),
            _ => Err(format!("'{}' is not a valid OffsetConvention", s)),
        }
    }
}

/// A record read from a .pep file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record {
    /// Header line including the leading `>`, without the line terminator
    /// and with `\` and `"` removed.
    pub header: String,
    /// Sequence lines concatenated without separators.
    pub sequence: String,
}

/// A record with its header parsed into fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedEntry {
    pub header: ParsedHeader,
    pub sequence: String,
}

impl From<Record> for ParsedEntry {
    fn from(record: Record) -> Self {
        ParsedEntry{ header: ParsedHeader::new(&record.header), sequence: record.sequence }
    }
}

fn open<P: AsRef<Path>>(
    path: P,
) -> Result<BufReader<File>, PepError> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(source) => Err(PepError::FileAccess{ path: path.to_path_buf(), source }),
    }
}

/// Offsets of every record in the file at `path`.
///
/// See [index_from_read](index::index_from_read).
///
/// ## Usage
///
/// ```rust
/// use pepreader::{index, OffsetConvention};
///
/// let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/example.pep");
/// let offsets = index(path, OffsetConvention::Exact).unwrap();
///
/// assert_eq!(offsets.len(), 5);
/// assert_eq!(offsets[0], 0);
/// ```
///
pub fn index<P: AsRef<Path>>(
    path: P,
    convention: OffsetConvention,
) -> Result<Vec<u64>, PepError> {
    let mut conn = open(path)?;
    index::index_from_read(&mut conn, convention)
}

/// Read the record whose header starts at `offset` in the file at `path`.
///
/// See [extract_from_read](extract::extract_from_read).
///
/// ## Usage
///
/// ```rust
/// use pepreader::{extract, index, OffsetConvention};
///
/// let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/example.pep");
/// let offsets = index(path, OffsetConvention::Exact).unwrap();
///
/// let record = extract(path, offsets[3]).unwrap();
///
/// assert_eq!(record.header, ">eco:b0001  thrL; thr operon leader peptide");
/// assert_eq!(record.sequence, "MKRISTTITTTITITTGNGAG");
/// ```
///
pub fn extract<P: AsRef<Path>>(
    path: P,
    offset: u64,
) -> Result<Record, PepError> {
    let mut conn = open(path)?;
    extract::extract_from_read(&mut conn, offset)
}

/// Read every record in the file at `path`.
///
/// See [extract_all_from_read](extract::extract_all_from_read).
///
/// ## Usage
///
/// ```rust
/// use pepreader::extract_all;
/// use std::io::Cursor;
///
/// let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/example.pep");
/// let records = extract_all(path).unwrap();
///
/// assert_eq!(records.len(), 5);
/// assert_eq!(records[2].header, ">mmu:66369  Tmem86b; transmembrane protein 86B; K01256 membrane protein");
///
/// // Reading from memory works the same way
/// let mut input = Cursor::new(b">a:1 x\nMKV\nLLA\n".to_vec());
/// let records = pepreader::extract::extract_all_from_read(&mut input).unwrap();
///
/// assert_eq!(records[0].sequence, "MKVLLA");
/// ```
///
pub fn extract_all<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Record>, PepError> {
    let mut conn = open(path)?;
    extract::extract_all_from_read(&mut conn)
}

/// Read and parse the record at `offset` in the file at `path`.
pub fn parsed_entry<P: AsRef<Path>>(
    path: P,
    offset: u64,
) -> Result<ParsedEntry, PepError> {
    Ok(extract(path, offset)?.into())
}

/// Read and parse every record in the file at `path`, visiting the records
/// through their offsets.
///
/// The file is opened once and the reader is seeked to each offset in turn.
///
pub fn parsed_entries<P: AsRef<Path>>(
    path: P,
    convention: OffsetConvention,
) -> Result<Vec<ParsedEntry>, PepError> {
    let mut conn = open(path)?;
    let offsets = index::index_from_read(&mut conn, convention)?;

    let mut entries: Vec<ParsedEntry> = Vec::with_capacity(offsets.len());
    for offset in offsets {
        entries.push(extract::extract_from_read(&mut conn, offset)?.into());
    }
    Ok(entries)
}
