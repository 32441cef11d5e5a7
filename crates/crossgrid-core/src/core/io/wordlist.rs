use super::traits::WordListFile;
use crate::core::models::entry::WordEntry;
use serde::Deserialize;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: WordListParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordListParseErrorKind {
    #[error("Expected 'WORD:HINT' but found no ':' separator")]
    MissingSeparator,
    #[error("Word is empty")]
    EmptyWord,
}

/// Plain-text word list with one `WORD:HINT` pair per line.
///
/// Lines are split at the first colon, so hints may contain colons. Blank
/// lines are ignored.
pub struct HintFile;

impl HintFile {
    fn parse_line(line: &str, line_number: usize) -> Result<WordEntry, WordListError> {
        let (word, hint) = line.split_once(':').ok_or(WordListError::Parse {
            line: line_number,
            kind: WordListParseErrorKind::MissingSeparator,
        })?;
        let word = word.trim();
        if word.is_empty() {
            return Err(WordListError::Parse {
                line: line_number,
                kind: WordListParseErrorKind::EmptyWord,
            });
        }
        Ok(WordEntry::new(word, hint.trim()))
    }
}

impl WordListFile for HintFile {
    type Error = WordListError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<WordEntry>, Self::Error> {
        let mut entries = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            entries.push(Self::parse_line(line, i + 1)?);
        }
        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    word: String,
    #[serde(default)]
    hint: String,
}

/// Headered CSV word list with `word` and `hint` columns.
pub struct CsvWordList;

impl WordListFile for CsvWordList {
    type Error = WordListError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<WordEntry>, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut raw = csv::StringRecord::new();
        let mut entries = Vec::new();
        while csv_reader.read_record(&mut raw)? {
            let record: CsvRecord = raw.deserialize(Some(&headers))?;
            if record.word.is_empty() {
                // Line where the record starts; quoted hints may span several lines.
                let line = raw.position().map_or(0, |pos| pos.line() as usize);
                return Err(WordListError::Parse {
                    line,
                    kind: WordListParseErrorKind::EmptyWord,
                });
            }
            entries.push(WordEntry::new(record.word, record.hint));
        }
        Ok(entries)
    }
}
