/// Error types for the segment analyser.
///
/// `ParseError` and `SegmentError` describe one bad line or one bad segment
/// and never stop a run. `AnalyzerError` covers the input file itself.
use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// A line of the input file that could not be turned into a segment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Skipping invalid line: {line}")]
    WrongTokenCount {
        line_number: usize,
        line: String,
        found: usize,
    },

    #[error("Error processing line: {line}. invalid coordinate {token:?}: {source}")]
    InvalidCoordinate {
        line_number: usize,
        line: String,
        token: String,
        source: ParseFloatError,
    },

    #[error("Error processing line: {line}. invalid segment id {token:?}: {source}")]
    InvalidId {
        line_number: usize,
        line: String,
        token: String,
        source: ParseIntError,
    },
}

impl ParseError {
    /// 1-based line number in the input.
    pub fn line_number(&self) -> usize {
        match self {
            Self::WrongTokenCount { line_number, .. }
            | Self::InvalidCoordinate { line_number, .. }
            | Self::InvalidId { line_number, .. } => *line_number,
        }
    }
}

/// Why a segment's area ratio could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("Coordinates must lay on the sides of the unit square.")]
    OutsideUnitSquare,

    #[error("Segment does not connect two sides of the square.")]
    UnconnectedSides,
}

/// The input file could not be read.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("failed to read segments from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
