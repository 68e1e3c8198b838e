// src/csv.rs
//
// Typed CSV I/O for the data files. Headers are written explicitly so that an
// empty table still produces a header line.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/* ---------------- Reading ---------------- */

/// Rows that deserialized, plus how many were skipped as malformed.
pub struct ReadOutcome<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

/// Read every row of `path` by header name. Unknown columns are ignored;
/// a row that cannot be decoded is logged and skipped, never fatal.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<ReadOutcome<T>> {
    let file = File::open(path)?;
    read_rows_from(file, &path.display().to_string())
}

pub fn read_rows_from<T: DeserializeOwned, R: io::Read>(reader: R, label: &str) -> Result<ReadOutcome<T>> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .flexible(true)
        .trim(::csv::Trim::Fields)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        match rec {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                logw!("CSV: {} row {} skipped: {}", label, i + 2, e);
            }
        }
    }
    Ok(ReadOutcome { rows, skipped })
}

/* ---------------- Writing ---------------- */

/// Write a header line then every row, to any writer.
pub fn write_table<W: Write, T: Serialize>(w: W, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut wtr = ::csv::WriterBuilder::new().has_headers(false).from_writer(w);
    wtr.write_record(headers)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Like `write_table`, but for rows that are already strings (export views).
pub fn write_string_table<W: Write>(w: W, headers: Option<&[String]>, rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = ::csv::WriterBuilder::new().has_headers(false).from_writer(w);
    if let Some(h) = headers {
        wtr.write_record(h)?;
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create/truncate `path` (parents included) and write the table.
pub fn write_table_to_path<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    crate::file::ensure_parent(path)?;
    let file = File::create(path)?;
    write_table(io::BufWriter::new(file), headers, rows)
}

/// Stringify a string table (Copy to clipboard).
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_string_table(&mut buf, headers, rows) {
        loge!("CSV: in-memory write failed: {}", e);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        #[serde(rename = "A")]
        a: String,
        #[serde(rename = "B")]
        b: f64,
    }

    #[test]
    fn bad_rows_are_skipped_extra_columns_ignored() {
        let text = "A,Extra,B\nx,zz,1.5\ny,zz,notanumber\n\"q,r\",zz,2\n";
        let out: ReadOutcome<Pair> = read_rows_from(text.as_bytes(), "mem").unwrap();
        assert_eq!(out.skipped, 1);
        assert_eq!(out.rows, vec![
            Pair { a: "x".into(), b: 1.5 },
            Pair { a: "q,r".into(), b: 2.0 },
        ]);
    }

    #[test]
    fn empty_table_still_has_header() {
        let rows: Vec<Vec<String>> = Vec::new();
        let h = vec![s!("A"), s!("B")];
        assert_eq!(rows_to_string(Some(&h), &rows), "A,B\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let rows = vec![vec![s!("Ega, Idah"), s!("1")]];
        assert_eq!(rows_to_string(None, &rows), "\"Ega, Idah\",1\n");
    }
}
