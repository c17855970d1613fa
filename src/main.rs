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
use std::io::BufWriter;
use std::io::Write;

use clap::Parser;
use clap::CommandFactory;

use pepreader::OffsetConvention;
use pepreader::ParsedEntry;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

fn convention(legacy_offsets: bool) -> OffsetConvention {
    if legacy_offsets {
        OffsetConvention::SingleByteTerminator
    } else {
        OffsetConvention::Exact
    }
}

/// Formats `entry` as a tab-separated line.
///
/// Columns are identification, organism code, square bracket EC numbers,
/// round bracket EC numbers, description, and sequence. EC numbers are
/// separated by `,`.
fn format_entry_line(entry: &ParsedEntry) -> String {
    let mut line = entry.header.identification.clone();
    line += "\t";
    line += &entry.header.organism_code;
    line += "\t";
    line += &entry.header.ec_numbers_square.join(",");
    line += "\t";
    line += &entry.header.ec_numbers_round.join(",");
    line += "\t";
    line += &entry.header.description;
    line += "\t";
    line += &entry.sequence;
    line += "\n";
    line
}

fn run(cli: &cli::Cli) -> Result<(), E> {
    let stdout = std::io::stdout();
    let mut conn_out = BufWriter::new(stdout.lock());

    match &cli.command {
        // Index
        Some(cli::Commands::Index {
            input_file,
            legacy_offsets,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let offsets = pepreader::index(input_file, convention(*legacy_offsets))?;
            for offset in offsets {
                writeln!(conn_out, "{}", offset)?;
            }
        },

        // Entries
        Some(cli::Commands::Entries {
            input_file,
            offsets,
            legacy_offsets,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let entries: Vec<ParsedEntry> = if offsets.is_empty() {
                pepreader::parsed_entries(input_file, convention(*legacy_offsets))?
            } else {
                offsets.iter().map(|offset| {
                    pepreader::parsed_entry(input_file, *offset)
                }).collect::<Result<Vec<ParsedEntry>, _>>()?
            };
            for entry in entries.iter() {
                conn_out.write_all(format_entry_line(entry).as_bytes())?;
            }
        },

        // Dump
        Some(cli::Commands::Dump {
            input_file,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let records = pepreader::extract_all(input_file)?;
            for record in records {
                writeln!(conn_out, "{}", record.header)?;
                writeln!(conn_out, "{}", record.sequence)?;
            }
        },

        None => {
            cli::Cli::command().print_help()?;
        },
    }

    conn_out.flush()?;
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_entry_line_columns() {
        use super::format_entry_line;
        use pepreader::ParsedEntry;
        use pepreader::header::ParsedHeader;

        let header = ">rno:294324  Agpat3; desc text (EC:2.3.1.51) [EC:2.3.1.51 2.3.1.-]";
        let entry = ParsedEntry{ header: ParsedHeader::new(header), sequence: "MGLL".to_string() };

        let expected = "rno:294324\trno\t2.3.1.51,2.3.1.-\t2.3.1.51\tAgpat3; desc text (EC:2.3.1.51) [EC:2.3.1.51 2.3.1.-]\tMGLL\n";

        assert_eq!(format_entry_line(&entry), expected);
    }

    #[test]
    fn legacy_flag_selects_convention() {
        use super::convention;
        use pepreader::OffsetConvention;

        assert_eq!(convention(false), OffsetConvention::Exact);
        assert_eq!(convention(true), OffsetConvention::SingleByteTerminator);
    }

    #[test]
    fn offsets_conflict_with_legacy_offsets() {
        use crate::cli::Cli;
        use clap::Parser;

        let both = Cli::try_parse_from(["pepreader", "entries", "example.pep", "--offset", "0", "--legacy-offsets"]);
        let offsets_only = Cli::try_parse_from(["pepreader", "entries", "example.pep", "--offset", "0", "--offset", "15"]);

        assert!(both.is_err());
        assert!(offsets_only.is_ok());
    }
}
