/// End-to-end tests for the segment analyser.
///
/// Segment files are written to a `TempDir`, read back through
/// `read_segments`, and analysed with `analyse`, exercising the same path
/// the `segments` binary takes.
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use toolbench_geometry::{analyse, read_segments, AnalyzerError, Point, RatioOutcome};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("segments.txt");
    fs::write(&path, contents).unwrap();
    path
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Malformed lines are dropped, the rest of the file is still analysed.
#[test]
fn malformed_lines_do_not_stop_the_run() {
    let tmp = TempDir::new().unwrap();
    let path = write_input(
        &tmp,
        "0 0.5 1 0.5 1\n\
         1 2 3\n\
         0 zero 1 1 9\n\
         0.5 0 0.5 1 2\n",
    );

    let parsed = read_segments(&path).unwrap();
    assert_eq!(parsed.segments.len(), 2);
    assert_eq!(parsed.rejected.len(), 2);
    assert_eq!(parsed.rejected[0].line_number(), 2);
    assert_eq!(parsed.rejected[1].line_number(), 3);

    let report = analyse(&parsed.segments);
    assert_eq!(report.ratios.len(), 2);
    assert_eq!(report.intersections, vec![Point::new(0.5, 0.5)]);
    assert!(report.triple_intersections.is_empty());
}

/// Concurrent lines through the centre show up in the triple section;
/// parallel pairs contribute nothing.
#[test]
fn concurrent_lines_reach_the_triple_section() {
    let tmp = TempDir::new().unwrap();
    let path = write_input(
        &tmp,
        "0 0 1 1 1\n\
         0 1 1 0 2\n\
         0 0.5 1 0.5 3\n\
         0 0.8 1 0.8 4\n",
    );

    let parsed = read_segments(&path).unwrap();
    let report = analyse(&parsed.segments);

    let centre = Point::new(0.5, 0.5);
    let at_centre = report.intersections.iter().filter(|p| **p == centre).count();
    assert_eq!(at_centre, 3);
    assert_eq!(report.triple_intersections.len(), 1);
    assert_eq!(report.triple_intersections[0].point, centre);

    let text = report.to_string();
    let triple_section = text.split("Triple Intersections:\n").nth(1).unwrap();
    assert_eq!(triple_section, "Intersection point: (0.5, 0.5)\n");
}

/// A segment outside the square is an error line in the report, not a crash.
#[test]
fn out_of_range_segment_is_reported() {
    let tmp = TempDir::new().unwrap();
    let path = write_input(&tmp, "2 2 3 3 7\n0 0.25 1 0.75 8\n");

    let report = analyse(&read_segments(&path).unwrap().segments);

    assert!(matches!(report.ratios[0], RatioOutcome::Error { id: 7, .. }));
    assert!(matches!(report.ratios[1], RatioOutcome::Ok(_)));
    assert!(report
        .to_string()
        .contains("Segment 7 error: Coordinates must lay on the sides of the unit square."));
}

/// Sections always appear in the same order.
#[test]
fn sections_are_in_fixed_order() {
    let tmp = TempDir::new().unwrap();
    let path = write_input(&tmp, "0 0.2 1 0.2 1\n0 0.8 1 0.8 2\n");

    let text = analyse(&read_segments(&path).unwrap().segments).to_string();

    let ratios = text.find("Segment Area Ratios:").unwrap();
    let pairs = text.find("Intersections:\nNo intersection points were found.").unwrap();
    let triples = text.find("Triple Intersections:").unwrap();
    assert!(ratios < pairs && pairs < triples);
}

/// The JSON form carries the same data as the text report.
#[test]
fn report_serialises_to_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_input(&tmp, "0 0.5 1 0.5 1\n0.2 0.3 0.7 0.8 2\n");

    let report = analyse(&read_segments(&path).unwrap().segments);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ratios"][0]["status"], "ok");
    assert_eq!(json["ratios"][0]["connection"], "left_right");
    assert_eq!(json["ratios"][0]["left"], 0.5);
    assert_eq!(json["ratios"][1]["status"], "error");
    assert_eq!(
        json["ratios"][1]["error"],
        "Segment does not connect two sides of the square."
    );
    assert!(json["triple_intersections"].as_array().unwrap().is_empty());
}

/// A missing input file is an `AnalyzerError`, not a panic.
#[test]
fn missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = read_segments(&tmp.path().join("absent.txt"));
    assert!(matches!(result, Err(AnalyzerError::Io { .. })));
}
