// Line oriented format: the job count, then one `r p q` triple per line.
// chumsky splits the document into lines of integers, the shape checks
// (field counts, job count, positive processing time) happen afterwards so
// they can report the offending line.

use chumsky::{prelude::*, Parser};
use structs::{RpqJob, RpqProblem};
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum RpqParseError {
    #[error("ParseError occurred: {0:?}")]
    ParseError(Vec<Simple<char>>),
    #[error("Job count missing")]
    MissingJobCount,
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line count mismatch: expected {expected} jobs, found {found}")]
    JobCountMismatch { expected: usize, found: usize },
    #[error("Line {line}: processing time must be positive")]
    ZeroProcessingTime { line: usize },
}

pub fn parse_rpq(content: &str) -> Result<RpqProblem, RpqParseError> {
    let lines = document_parser()
        .parse(content)
        .map_err(RpqParseError::ParseError)?;

    // Line numbers are 1-based, blank lines are skipped but still counted
    let mut rows = lines
        .into_iter()
        .enumerate()
        .map(|(index, fields)| (index + 1, fields))
        .filter(|(_, fields)| !fields.is_empty());

    let (header_line, header) = rows.next().ok_or(RpqParseError::MissingJobCount)?;
    let expected = match header.as_slice() {
        [count] => *count as usize,
        _ => {
            return Err(RpqParseError::FieldCount {
                line: header_line,
                expected: 1,
                found: header.len(),
            })
        }
    };

    let jobs = rows
        .map(|(line, fields)| match fields.as_slice() {
            [_, 0, _] => Err(RpqParseError::ZeroProcessingTime { line }),
            [release, processing, delivery] => Ok(RpqJob {
                release: *release,
                processing: *processing,
                delivery: *delivery,
            }),
            _ => Err(RpqParseError::FieldCount {
                line,
                expected: 3,
                found: fields.len(),
            }),
        })
        .collect::<Result<Vec<RpqJob>, RpqParseError>>()?;

    if jobs.len() != expected {
        return Err(RpqParseError::JobCountMismatch {
            expected,
            found: jobs.len(),
        });
    }

    Ok(RpqProblem { jobs })
}

pub(crate) fn number_parser() -> impl Parser<char, u64, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits: String, span| {
            digits
                .parse::<u64>()
                .map_err(|err| Simple::custom(span, format!("{digits}: {err}")))
        })
        .labelled("number")
}

pub(crate) fn line_parser() -> impl Parser<char, Vec<u64>, Error = Simple<char>> + Clone {
    let inline_whitespace = one_of(" \t").repeated().ignored();

    inline_whitespace
        .clone()
        .ignore_then(number_parser().then_ignore(inline_whitespace).repeated())
        .labelled("line")
}

pub(crate) fn document_parser() -> impl Parser<char, Vec<Vec<u64>>, Error = Simple<char>> {
    line_parser()
        .separated_by(text::newline())
        .then_ignore(end())
}
