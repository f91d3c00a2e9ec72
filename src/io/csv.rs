use csv::ReaderBuilder;

use crate::error::ParseError;
use crate::limits::{INPUT_MAX, MAX_TAXA};
use crate::phylo::matrix::DistanceMatrix;

/// Parses a CSV-formatted distance matrix: a header row of column
/// labels followed by one row per taxon, each starting with a row
/// label that must match the header's label for that row.
///
/// Line splitting, `#`-comment skipping, and field tokenization are
/// delegated to the `csv` crate's reader (`comment(Some(b'#'))` handles
/// comment-line skipping directly); everything the tokenizer itself
/// does not enforce — the numeric digit grammar, the no-leading-zero
/// rule, row-shape, and label-match checks — is validated
/// field-by-field below, label fields first, then each numeric field
/// in turn.
pub fn parse(bytes: &[u8]) -> Result<DistanceMatrix, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(bytes);
    let mut records = reader.records();

    let header = records
        .next()
        .ok_or(ParseError::RowShapeMismatch {
            row: 0,
            got: 0,
            expected: 1,
        })?
        .map_err(ParseError::Csv)?;

    if header.is_empty() {
        return Err(ParseError::RowShapeMismatch {
            row: 0,
            got: 0,
            expected: 1,
        });
    }
    let n = header.len() - 1;
    if n == 0 {
        return Err(ParseError::RowShapeMismatch {
            row: 0,
            got: header.len(),
            expected: 2,
        });
    }
    if n > MAX_TAXA {
        return Err(ParseError::TooManyTaxa { n, max: MAX_TAXA });
    }

    let mut labels: Vec<Box<str>> = Vec::with_capacity(n);
    for (col, field) in header.iter().enumerate().skip(1) {
        check_field_len(field, 0, col)?;
        if field.is_empty() {
            return Err(ParseError::MalformedLabel { row: 0, col });
        }
        labels.push(field.to_string().into_boxed_str());
    }

    let mut data = vec![0.0f64; n * n];
    for ridx in 0..n {
        let row = records
            .next()
            .ok_or(ParseError::RowShapeMismatch {
                row: ridx + 1,
                got: 0,
                expected: n + 1,
            })?
            .map_err(ParseError::Csv)?;

        if row.len() != n + 1 {
            return Err(ParseError::RowShapeMismatch {
                row: ridx + 1,
                got: row.len(),
                expected: n + 1,
            });
        }

        let row_label = row.get(0).unwrap();
        check_field_len(row_label, ridx + 1, 0)?;
        if row_label.is_empty() {
            return Err(ParseError::MalformedLabel {
                row: ridx + 1,
                col: 0,
            });
        }
        if row_label != &*labels[ridx] {
            return Err(ParseError::LabelMismatch {
                row: ridx + 1,
                got: row_label.to_string(),
                expected: labels[ridx].to_string(),
            });
        }

        for col in 0..n {
            let field = row.get(col + 1).unwrap();
            let value = parse_number(field, ridx + 1, col + 1)?;
            data[ridx * n + col] = value;
        }
    }

    DistanceMatrix::new(labels, data)
}

fn check_field_len(field: &str, row: usize, col: usize) -> Result<(), ParseError> {
    if field.len() > INPUT_MAX {
        return Err(ParseError::FieldTooLong {
            row,
            col,
            max: INPUT_MAX,
        });
    }
    Ok(())
}

/// Parses one numeric field against the grammar `[0-9]+(\.[0-9]+)?`: no
/// sign, no exponent, no leading zeros other than a lone `0`, at most
/// one `.`. Accumulates the value by digit (`v = 10*v + digit` for the
/// integer part, `v += digit * 10^-k` for the fraction) rather than
/// delegating to `str::parse`, since the grammar is stricter than what
/// `f64::from_str` accepts (it rejects `+5`, `5.`, `.5`, `5e1`, and
/// `05`, all of which parse fine as floats).
fn parse_number(field: &str, row: usize, col: usize) -> Result<f64, ParseError> {
    check_field_len(field, row, col)?;
    if field.is_empty() {
        return Err(ParseError::MissingField { row, col });
    }

    let bytes = field.as_bytes();
    let malformed = || ParseError::MalformedNumber {
        row,
        col,
        field: field.to_string(),
    };

    let mut idx = 0;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let int_digits = idx;
    if int_digits == 0 {
        return Err(malformed());
    }
    if int_digits > 1 && bytes[0] == b'0' {
        return Err(malformed());
    }

    let mut frac_start = idx;
    let mut frac_digits = 0;
    if idx < bytes.len() {
        if bytes[idx] != b'.' {
            return Err(malformed());
        }
        idx += 1;
        frac_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        frac_digits = idx - frac_start;
        if frac_digits == 0 {
            return Err(malformed());
        }
    }
    if idx != bytes.len() {
        return Err(malformed());
    }

    let mut v = 0.0f64;
    for &b in &bytes[0..int_digits] {
        v = 10.0 * v + (b - b'0') as f64;
    }
    if frac_digits > 0 {
        let mut scale = 0.1f64;
        for &b in &bytes[frac_start..frac_start + frac_digits] {
            v += (b - b'0') as f64 * scale;
            scale *= 0.1;
        }
    }
    Ok(v)
}
