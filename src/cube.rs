//! CUBE-format text parser (§4.1, §6).
//!
//! Recognises `TITLE`, `LUT_3D_SIZE`, `DOMAIN_MIN`, `DOMAIN_MAX`; skips blank
//! lines and `#` comments; rejects a file whose `LUT_3D_SIZE` is missing,
//! <2, or whose data section doesn't have exactly `size^3` three-float rows.
//! Data is read in R-fastest, B-slowest order and stored into the Grid's
//! native `(i, j, k)` layout. `DOMAIN_MIN`/`DOMAIN_MAX` must appear before
//! `LUT_3D_SIZE`, matching every generated fixture in this crate and in
//! the reference loader this was ported from: once the size line is seen,
//! every following non-blank line is treated as a data row.

use crate::error::Error;
use crate::grid::{Grid, Triple};

/// Parse a CUBE file's full text into a `Grid<f64>`.
pub fn parse(text: &str) -> Result<Grid<f64>, Error> {
    let mut title = String::new();
    let mut size: Option<usize> = None;
    let mut domain_min = [0.0_f64, 0.0, 0.0];
    let mut domain_max = [1.0_f64, 1.0, 1.0];
    let mut entries: Vec<Triple<f64>> = Vec::new();
    let mut reading_data = false;

    for (line_num, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        if !reading_data {
            let keyword = parts[0].to_ascii_uppercase();
            match keyword.as_str() {
                "TITLE" => {
                    if let Some(rest) = line.splitn(2, char::is_whitespace).nth(1) {
                        title = rest.trim().trim_matches('"').to_string();
                    }
                    continue;
                },
                "LUT_3D_SIZE" => {
                    if size.is_some() {
                        log::warn!("duplicate LUT_3D_SIZE on line {}, ignoring", line_num + 1);
                        continue;
                    }
                    let n: usize = parts.get(1).and_then(|s| s.parse().ok()).ok_or_else(|| {
                        Error::LoadError(format!("invalid LUT_3D_SIZE on line {}", line_num + 1))
                    })?;
                    if n < 2 {
                        return Err(Error::LoadError(format!(
                            "LUT_3D_SIZE must be >= 2, found {n} on line {}",
                            line_num + 1
                        )));
                    }
                    size = Some(n);
                    reading_data = true;
                    continue;
                },
                "DOMAIN_MIN" => {
                    domain_min = parse_triple(&parts, line_num)?;
                    continue;
                },
                "DOMAIN_MAX" => {
                    domain_max = parse_triple(&parts, line_num)?;
                    continue;
                },
                _ => {
                    log::warn!("ignoring unrecognised header line {}: {line}", line_num + 1);
                    continue;
                },
            }
        }

        // reading_data: a data row.
        if parts.len() != 3 {
            log::warn!("ignoring malformed data line {}: {line}", line_num + 1);
            continue;
        }
        let values: Result<Vec<f64>, _> = parts.iter().map(|p| p.parse::<f64>()).collect();
        match values {
            Ok(v) => entries.push(Triple::new(v[0], v[1], v[2])),
            Err(_) => log::warn!("skipping non-numeric data line {}: {line}", line_num + 1),
        }
    }

    let size = size.ok_or_else(|| Error::LoadError("LUT_3D_SIZE not found".to_string()))?;
    let expected = size * size * size;
    if entries.len() != expected {
        return Err(Error::LoadError(format!(
            "expected {expected} data points for LUT_3D_SIZE {size}, found {}",
            entries.len()
        )));
    }

    // File order is R-fastest, B-slowest; the Grid's own storage uses the
    // same convention, so entries can be copied across unchanged.
    let samples = entries;

    Grid::new(
        size,
        size,
        size,
        samples,
        Triple::new(domain_min[0], domain_min[1], domain_min[2]),
        Triple::new(domain_max[0], domain_max[1], domain_max[2]),
        if title.is_empty() { "untitled".to_string() } else { title },
    )
}

fn parse_triple(parts: &[&str], line_num: usize) -> Result<[f64; 3], Error> {
    if parts.len() != 4 {
        return Err(Error::LoadError(format!(
            "expected 3 values after {} on line {}",
            parts[0],
            line_num + 1
        )));
    }
    let mut out = [0.0_f64; 3];
    for (slot, p) in out.iter_mut().zip(&parts[1..]) {
        *slot = p.parse().map_err(|_| {
            Error::LoadError(format!("invalid float {p:?} on line {}", line_num + 1))
        })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_identity_cube() {
        let text = "\
TITLE \"test\"
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0
LUT_3D_SIZE 2
0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
";
        let grid = parse(text).unwrap();
        assert_eq!(grid.dims(), (2, 2, 2));
        assert_eq!(grid.title(), "test");
        assert_eq!(grid.sample(1, 0, 0), Triple::new(1.0, 0.0, 0.0));
        assert_eq!(grid.sample(0, 1, 1), Triple::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "\
# a comment

LUT_3D_SIZE 2

# another
0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";
        let grid = parse(text).unwrap();
        assert_eq!(grid.dims(), (2, 2, 2));
    }

    #[test]
    fn rejects_missing_size() {
        let err = parse("0 0 0\n1 1 1\n");
        assert!(matches!(err, Err(Error::LoadError(_))));
    }

    #[test]
    fn rejects_size_below_two() {
        let err = parse("LUT_3D_SIZE 1\n0 0 0\n");
        assert!(matches!(err, Err(Error::LoadError(_))));
    }

    #[test]
    fn rejects_wrong_entry_count() {
        let err = parse("LUT_3D_SIZE 2\n0 0 0\n1 0 0\n");
        assert!(matches!(err, Err(Error::LoadError(_))));
    }

    #[test]
    fn defaults_domain_to_unit_cube() {
        let text = "LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
        let grid = parse(text).unwrap();
        assert_eq!(grid.domain_min(), &Triple::new(0.0, 0.0, 0.0));
        assert_eq!(grid.domain_max(), &Triple::new(1.0, 1.0, 1.0));
    }
}
