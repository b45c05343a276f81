//! CSV corpus loader.
//!
//! Reads a headed CSV file and turns each row into a corpus document,
//! in file order.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};

use crate::{
    error::{MatchError, Result},
    vectorizer::corpus::Corpus,
};

fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| MatchError::MissingColumn(column.to_string()))
}

/// Load a corpus from CSV data.
///
/// Rows without a label or without the text field are skipped with a
/// warning. An empty text is kept: the document simply never matches.
pub fn load_csv<R: Read>(reader: R, label_column: &str, text_column: &str) -> Result<Corpus> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let label_idx = column_index(&headers, label_column)?;
    let text_idx = column_index(&headers, text_column)?;

    let mut corpus = Corpus::new();
    let mut skipped = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        match (record.get(label_idx).map(str::trim), record.get(text_idx)) {
            (Some(label), Some(text)) if !label.is_empty() => {
                corpus.push(label, text);
            }
            _ => {
                skipped += 1;
                // +2: one for the header, one for 1-based line numbers
                tracing::warn!(line = row + 2, "skipping row without label or text");
            }
        }
    }
    tracing::info!(documents = corpus.len(), skipped, "corpus loaded");
    Ok(corpus)
}

/// Load a corpus from a CSV file.
pub fn load_csv_path<P: AsRef<Path>>(path: P, label_column: &str, text_column: &str) -> Result<Corpus> {
    let file = File::open(path.as_ref())?;
    load_csv(file, label_column, text_column)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "type,posts\n\
        INTJ,'plans|||more plans'\n\
        ENFP,\"people, parties|||fun\"\n\
        INTJ,systems thinking\n";

    #[test]
    fn loads_rows_in_order() {
        let corpus = load_csv(SAMPLE.as_bytes(), "type", "posts").unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.label_num(), 2);
        let doc = corpus.get(1).unwrap();
        assert_eq!(doc.index, 1);
        assert_eq!(&*doc.label, "ENFP");
        assert_eq!(doc.raw_text, "people, parties|||fun");
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = "posts,id,type\nhello there,1,INFP\n";
        let corpus = load_csv(data.as_bytes(), "type", "posts").unwrap();
        assert_eq!(&*corpus.get(0).unwrap().label, "INFP");
        assert_eq!(corpus.get(0).unwrap().raw_text, "hello there");
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = load_csv(SAMPLE.as_bytes(), "label", "posts").unwrap_err();
        assert!(matches!(err, MatchError::MissingColumn(ref c) if c == "label"));
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let data = "type,posts\nINTJ,ok\n,no label\nENFP\nISTP,\n";
        let corpus = load_csv(data.as_bytes(), "type", "posts").unwrap();
        let labels: Vec<&str> = corpus.iter().map(|d| &*d.label).collect();
        assert_eq!(labels, vec!["INTJ", "ISTP"]);
        assert_eq!(corpus.get(1).unwrap().raw_text, "");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let corpus = load_csv_path(file.path(), "type", "posts").unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_csv_path("/nonexistent/corpus.csv", "type", "posts").unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
    }
}
