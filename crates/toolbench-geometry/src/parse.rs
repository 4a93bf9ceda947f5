/// Reader for the segment file format.
///
/// One segment per line: `x1 y1 x2 y2 id`, whitespace-separated, four
/// floats then an integer. Bad lines are reported and skipped; they never
/// stop the rest of the file from being read. Blank lines are ignored.
use crate::error::{AnalyzerError, ParseError};
use crate::model::{Point, Segment};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Segments in file order plus the lines that were rejected.
#[derive(Debug, Default)]
pub struct ParsedSegments {
    pub segments: Vec<Segment>,
    pub rejected: Vec<ParseError>,
}

/// Open `path` and parse it with [`parse_segments`].
pub fn read_segments(path: &Path) -> Result<ParsedSegments, AnalyzerError> {
    let to_error = |source| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    let parsed = parse_segments(BufReader::new(file)).map_err(to_error)?;
    debug!(
        "Read {} segments from {} ({} lines rejected)",
        parsed.segments.len(),
        path.display(),
        parsed.rejected.len()
    );
    Ok(parsed)
}

/// Parse every line of `reader`.
///
/// Only a failing reader is an error. Malformed lines are logged at WARN
/// and collected in [`ParsedSegments::rejected`].
pub fn parse_segments(reader: impl BufRead) -> io::Result<ParsedSegments> {
    let mut parsed = ParsedSegments::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(index + 1, &line) {
            Ok(segment) => parsed.segments.push(segment),
            Err(err) => {
                warn!("{err}");
                parsed.rejected.push(err);
            }
        }
    }

    Ok(parsed)
}

/// Parse a single non-blank line.
pub fn parse_line(line_number: usize, line: &str) -> Result<Segment, ParseError> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() != 5 {
        return Err(ParseError::WrongTokenCount {
            line_number,
            line: trimmed.to_owned(),
            found: tokens.len(),
        });
    }

    let mut coords = [0.0f64; 4];
    for (slot, token) in coords.iter_mut().zip(&tokens[..4]) {
        *slot = token
            .parse::<f64>()
            .map_err(|source| ParseError::InvalidCoordinate {
                line_number,
                line: trimmed.to_owned(),
                token: (*token).to_owned(),
                source,
            })?;
    }

    let id = tokens[4]
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidId {
            line_number,
            line: trimmed.to_owned(),
            token: tokens[4].to_owned(),
            source,
        })?;

    let [x1, y1, x2, y2] = coords;
    Ok(Segment::new(Point::new(x1, y1), Point::new(x2, y2), id))
}
