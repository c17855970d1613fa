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
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // Print the offset of every record
    Index {
        // Input .pep file
        #[arg(group = "input", required = true, help = "Input file")]
        input_file: PathBuf,

        // Assume single byte line terminators when computing offsets
        #[arg(long = "legacy-offsets", default_value_t = false)]
        legacy_offsets: bool,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Print the parsed fields of records as tab-separated lines
    Entries {
        // Input .pep file
        #[arg(group = "input", required = true, help = "Input file")]
        input_file: PathBuf,

        // Only print the records at these offsets; they are used as given
        #[arg(long = "offset", required = false, conflicts_with = "legacy_offsets", help = "Offset of a record (can be repeated)")]
        offsets: Vec<u64>,

        // Assume single byte line terminators when computing offsets
        #[arg(long = "legacy-offsets", default_value_t = false)]
        legacy_offsets: bool,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Print every record with the sequence on one line
    Dump {
        // Input .pep file
        #[arg(group = "input", required = true, help = "Input file")]
        input_file: PathBuf,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },
}
