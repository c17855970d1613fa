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

//! Field extraction from .pep header lines.
//!
//! A KEGG .pep header looks like
//!
//! ```text
//! >rno:294324  Agpat3; 1-acylglycerol-3-phosphate O-acyltransferase 3 (EC:2.3.1.51); K13523 ... [EC:2.3.1.51 2.3.1.-]
//! ```
//!
//! where the first field is `organism:gene` and the rest is free text that may
//! carry Enzyme Commission numbers in `(EC: ...)` or `[EC: ...]` blocks,
//! depending on the release of the database.
//!
//! The functions here assume they are given a header line and never fail; a
//! missing annotation gives an empty result.

/// Bracket style of an EC number annotation.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EcBrackets {
    /// `[EC:2.3.1.51 2.3.1.-]`
    #[default]
    Square,
    /// `(EC:2.3.1.51)`
    Round,
}

impl EcBrackets {
    fn markers(&self) -> (&'static str, char) {
        match self {
            EcBrackets::Square => ("[EC:", ']'),
            EcBrackets::Round => ("(EC:", ')'),
        }
    }
}

impl std::str::FromStr for EcBrackets {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(EcBrackets::Square),
            "round" => Ok(EcBrackets::Round),
            _ => Err(format!("'{}' is not a valid EcBrackets", s)),
        }
    }
}

/// All fields of a header line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedHeader {
    /// Lowercased `organism:gene` identifier.
    pub identification: String,
    /// Free text following the identifier.
    pub description: String,
    /// Organism code, eg. `rno` or `hsa`.
    pub organism_code: String,
    /// EC numbers from the first `[EC: ...]` block.
    pub ec_numbers_square: Vec<String>,
    /// EC numbers from the first `(EC: ...)` block.
    pub ec_numbers_round: Vec<String>,
    /// Header with `\` and `"` removed.
    pub full_header: String,
}

impl ParsedHeader {
    pub fn new(
        header: &str,
    ) -> Self {
        ParsedHeader{
            identification: identification(header),
            description: description(header),
            organism_code: organism_code(header),
            ec_numbers_square: ec_numbers(header, EcBrackets::Square),
            ec_numbers_round: ec_numbers(header, EcBrackets::Round),
            full_header: full_header(header),
        }
    }
}

/// Returns true if `line` starts with `>`.
pub fn is_header(
    line: &str,
) -> bool {
    line.starts_with('>')
}

fn first_field(
    header: &str,
) -> &str {
    // split always yields at least one item
    let field = header.split(' ').next().unwrap_or(header);
    field.strip_prefix('>').unwrap_or(field)
}

fn remove_quoting(
    text: &str,
) -> String {
    text.chars().filter(|c| *c != '\\' && *c != '"').collect()
}

/// Lowercased identifier from the first space-separated field.
///
/// `>rno:294324  Agpat3; ...` gives `rno:294324`.
pub fn identification(
    header: &str,
) -> String {
    first_field(header).trim_end_matches(['\r', '\n']).to_lowercase()
}

/// Organism code, the part of the identifier before the first `:`.
///
/// Case is kept as is.
pub fn organism_code(
    header: &str,
) -> String {
    let field = first_field(header);
    field.split(':').next().unwrap_or(field).to_string()
}

/// Everything after the identifier with runs of spaces collapsed and `\` and
/// `"` removed.
pub fn description(
    header: &str,
) -> String {
    let rest: Vec<&str> = header.split(' ').skip(1).filter(|x| !x.is_empty()).collect();
    remove_quoting(&rest.join(" "))
}

/// Returns true if the header contains an EC annotation with `brackets`.
pub fn has_ec(
    header: &str,
    brackets: EcBrackets,
) -> bool {
    header.contains(brackets.markers().0)
}

/// EC numbers from the first annotation block with `brackets`.
///
/// The block ends at the first matching closing bracket. Numbers are returned
/// in order and duplicates are kept. An unterminated block gives an empty
/// list.
pub fn ec_numbers(
    header: &str,
    brackets: EcBrackets,
) -> Vec<String> {
    let (open, close) = brackets.markers();
    let Some(start) = header.find(open) else {
        return Vec::new()
    };
    let block = &header[(start + open.len())..];
    match block.find(close) {
        Some(end) => block[..end].split(' ').map(|x| x.to_string()).collect(),
        None => Vec::new(),
    }
}

/// The header with `\` and `"` removed.
pub fn full_header(
    header: &str,
) -> String {
    remove_quoting(header)
}

// Tests
#[cfg(test)]
mod tests {

    const AGPAT3: &str = ">rno:294324  Agpat3; 1-acylglycerol-3-phosphate O-acyltransferase 3 (EC:2.3.1.51); K13523 lysophosphatidic acid acyltransferase / lysophosphatidylinositol acyltransferase [EC:2.3.1.51 2.3.1.-]";

    #[test]
    fn is_header_line() {
        use super::is_header;

        assert!(is_header(">test"));
        assert!(!is_header("MKVLAA"));
        assert!(!is_header(" >test"));
        assert!(!is_header(""));
    }

    #[test]
    fn identification_from_header() {
        use super::identification;

        assert_eq!(identification(AGPAT3), "rno:294324");
        assert_eq!(identification(">HSA:10555\r\n"), "hsa:10555");
    }

    #[test]
    fn organism_code_keeps_case() {
        use super::organism_code;

        assert_eq!(organism_code(AGPAT3), "rno");
        assert_eq!(organism_code(">SCE:YAL005C SSA1"), "SCE");
    }

    #[test]
    fn description_from_header() {
        use super::description;

        let expected = "Agpat3; 1-acylglycerol-3-phosphate O-acyltransferase 3 (EC:2.3.1.51); K13523 lysophosphatidic acid acyltransferase / lysophosphatidylinositol acyltransferase [EC:2.3.1.51 2.3.1.-]";

        assert_eq!(description(AGPAT3), expected);
    }

    #[test]
    fn description_collapses_spaces_and_removes_quoting() {
        use super::description;

        let header = ">eco:b0001   thrL;  \"thr\" operon\\ leader   peptide ";
        let got = description(header);

        assert_eq!(got, "thrL; thr operon leader peptide");
        assert!(!got.contains('\\'));
        assert!(!got.contains('"'));
    }

    #[test]
    fn description_of_bare_identifier() {
        use super::description;

        assert_eq!(description(">eco:b0001"), "");
    }

    #[test]
    fn has_ec_square() {
        use super::{has_ec, EcBrackets};

        let with_ec = ">rno:294324  Agpat3; (EC:2.3.1.51); K13523 acyltransferase [EC:2.3.1.51 2.3.1.-]";
        let without_ec = ">rno:294324  Agpat3; (EC:2.3.1.51); K13523 acyltransferase ";

        assert!(has_ec(with_ec, EcBrackets::Square));
        assert!(!has_ec(without_ec, EcBrackets::Square));
    }

    #[test]
    fn has_ec_round() {
        use super::{has_ec, EcBrackets};

        let with_ec = ">rno:294324  Agpat3; (EC:2.3.1.51); K13523 acyltransferase [EC:2.3.1.51 2.3.1.-]";
        let without_ec = ">rno:294324  Agpat3; K13523 acyltransferase [EC:2.3.1.51 2.3.1.-]";

        assert!(has_ec(with_ec, EcBrackets::Round));
        assert!(!has_ec(without_ec, EcBrackets::Round));
    }

    #[test]
    fn ec_numbers_square() {
        use super::{ec_numbers, EcBrackets};

        assert_eq!(ec_numbers(AGPAT3, EcBrackets::Square), vec!["2.3.1.51".to_string(), "2.3.1.-".to_string()]);
    }

    #[test]
    fn ec_numbers_round_stops_at_first_closing_bracket() {
        use super::{ec_numbers, EcBrackets};

        let header = ">rno:294324  Agpat3; K13523 acyltransferase (EC:2.3.1.51 2.3.1.-) extra (string)";

        assert_eq!(ec_numbers(AGPAT3, EcBrackets::Round), vec!["2.3.1.51".to_string()]);
        assert_eq!(ec_numbers(header, EcBrackets::Round), vec!["2.3.1.51".to_string(), "2.3.1.-".to_string()]);
    }

    #[test]
    fn ec_numbers_keep_duplicates() {
        use super::{ec_numbers, EcBrackets};

        let header = ">hsa:1 X [EC:1.1.1.1 1.1.1.1]";

        assert_eq!(ec_numbers(header, EcBrackets::Square), vec!["1.1.1.1".to_string(), "1.1.1.1".to_string()]);
    }

    #[test]
    fn ec_numbers_missing_or_unterminated() {
        use super::{ec_numbers, EcBrackets};

        assert!(ec_numbers(">mmu:66369  Tmem86b; membrane protein", EcBrackets::Square).is_empty());
        assert!(ec_numbers(">mmu:66369  Tmem86b; (EC:3.3.2.2", EcBrackets::Round).is_empty());
    }

    #[test]
    fn full_header_removes_quoting() {
        use super::full_header;

        let header = ">rno:294324  Agpat3; acyltransferase (EC:2.3.1.51 2.3.1.-) extra string";

        assert_eq!(full_header(header), header);
        assert_eq!(full_header(">a:1 \"quoted\\\" text"), ">a:1 quoted text");
    }

    #[test]
    fn parse_all_fields() {
        use super::ParsedHeader;

        let header = ">rno:294324  Agpat3; desc text [EC:2.3.1.51 2.3.1.-]";
        let expected = ParsedHeader{
            identification: "rno:294324".to_string(),
            description: "Agpat3; desc text [EC:2.3.1.51 2.3.1.-]".to_string(),
            organism_code: "rno".to_string(),
            ec_numbers_square: vec!["2.3.1.51".to_string(), "2.3.1.-".to_string()],
            ec_numbers_round: vec![],
            full_header: header.to_string(),
        };

        assert_eq!(ParsedHeader::new(header), expected);
    }

    #[test]
    fn ec_brackets_from_str() {
        use super::EcBrackets;
        use std::str::FromStr;

        assert_eq!(EcBrackets::from_str("square").unwrap(), EcBrackets::Square);
        assert_eq!(EcBrackets::from_str("round").unwrap(), EcBrackets::Round);
        assert!(EcBrackets::from_str("curly").is_err());
    }
}
