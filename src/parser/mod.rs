//! Alignment record contract and the line parser that drives it.
//!
//! The core consumes already-parsed `(query, subject, length, begin, end)`
//! tuples; SAM/BLAST/PAF parsing is out of scope. This module supplies the
//! minimum glue to produce those tuples from a plain tabular format so
//! `ordmap` runs end to end as a program.

pub mod util;

use std::io::BufRead;

pub use util::create_buffered_reader;

/// A single already-parsed alignment: the contract the core consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRecord {
    pub query: String,
    pub subject: String,
    pub length: u32,
    pub begin: i64,
    pub end: i64,
}

/// A header or malformed line. The core drops these silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError;

/// Parse one line of the 6-column alignment TSV:
/// `query<TAB>subject<TAB>pctid<TAB>length<TAB>begin<TAB>end`.
///
/// `_` is bound to percent identity, matching BLAST/PAF-style tabular
/// alignment formats; fields beyond the sixth, if present, are ignored.
pub fn parse_alignment_line(line: &str) -> Result<AlignmentRecord, ParseError> {
    let mut fields = line.split('\t');
    let query = fields.next().ok_or(ParseError)?;
    let subject = fields.next().ok_or(ParseError)?;
    let _pctid = fields.next().ok_or(ParseError)?;
    let length = fields.next().ok_or(ParseError)?;
    let begin = fields.next().ok_or(ParseError)?;
    let end = fields.next().ok_or(ParseError)?;

    if query.is_empty() || subject.is_empty() {
        return Err(ParseError);
    }

    let length: u32 = length.parse().map_err(|_| ParseError)?;
    let begin: i64 = begin.parse().map_err(|_| ParseError)?;
    let end: i64 = end.parse().map_err(|_| ParseError)?;

    Ok(AlignmentRecord {
        query: query.to_string(),
        subject: subject.to_string(),
        length,
        begin: begin.min(end),
        end: begin.max(end),
    })
}

/// Parse every non-blank line of an alignment stream, yielding one result
/// per line; I/O errors on a line are treated the same as a parse failure.
pub fn parse_alignments<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<AlignmentRecord, ParseError>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.is_empty() => None,
        Ok(line) => Some(parse_alignment_line(&line)),
        Err(_) => Some(Err(ParseError)),
    })
}
