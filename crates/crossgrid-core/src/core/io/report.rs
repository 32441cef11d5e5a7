use crate::core::models::placement::{Orientation, WordOutcome};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    index: usize,
    word: &'a str,
    status: &'static str,
    row: Option<usize>,
    col: Option<usize>,
    orientation: Option<Orientation>,
}

impl<'a> From<&'a WordOutcome> for ReportRow<'a> {
    fn from(outcome: &'a WordOutcome) -> Self {
        let placement = outcome.placement();
        Self {
            index: outcome.index,
            word: &outcome.word,
            status: if placement.is_some() { "placed" } else { "skipped" },
            row: placement.map(|p| p.row),
            col: placement.map(|p| p.col),
            orientation: placement.map(|p| p.orientation),
        }
    }
}

/// Writes one CSV row per word, ordered by input index.
///
/// Skipped words leave the position columns empty.
pub fn write_report(outcomes: &[WordOutcome], writer: impl Write) -> Result<(), ReportError> {
    let mut sorted: Vec<&WordOutcome> = outcomes.iter().collect();
    sorted.sort_by_key(|o| o.index);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in sorted {
        csv_writer.serialize(ReportRow::from(outcome))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::placement::{Placement, PlacementOutcome};

    #[test]
    fn report_lists_words_in_input_order() {
        let outcomes = vec![
            WordOutcome {
                index: 1,
                word: "HOUSE".to_string(),
                outcome: PlacementOutcome::Placed(Placement::new(0, 0, Orientation::Horizontal)),
            },
            WordOutcome {
                index: 0,
                word: "USE".to_string(),
                outcome: PlacementOutcome::Skipped,
            },
            WordOutcome {
                index: 2,
                word: "SEA".to_string(),
                outcome: PlacementOutcome::Placed(Placement::new(0, 3, Orientation::Vertical)),
            },
        ];

        let mut out = Vec::new();
        write_report(&outcomes, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "index,word,status,row,col,orientation\n\
             0,USE,skipped,,,\n\
             1,HOUSE,placed,0,0,horizontal\n\
             2,SEA,placed,0,3,vertical\n"
        );
    }

    #[test]
    fn empty_report_has_no_rows() {
        let mut out = Vec::new();
        write_report(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
