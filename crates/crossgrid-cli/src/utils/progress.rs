use crossgrid::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Words placed and skipped so far in the current run.
#[derive(Debug, Default)]
struct Tally {
    placed: usize,
    skipped: Vec<String>,
}

impl Tally {
    fn status(&self) -> String {
        format!("{} placed, {} skipped", self.placed, self.skipped.len())
    }
}

/// Drives a word-count bar from placement events and prints the words that
/// did not fit once placement ends.
pub struct CliProgressHandler {
    pb: ProgressBar,
    tally: Arc<Mutex<Tally>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.finish_and_clear();
        Self {
            pb,
            tally: Arc::new(Mutex::new(Tally::default())),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();
        let tally = Arc::clone(&self.tally);

        Box::new(move |event: Progress<'_>| {
            let Ok(mut tally) = tally.lock() else {
                warn!("Placement tally mutex was poisoned. Cannot update progress.");
                return;
            };

            match event {
                Progress::PlacementStarted {
                    total_words,
                    grid_size,
                } => {
                    *tally = Tally::default();
                    pb.reset();
                    pb.set_length(total_words as u64);
                    pb.set_prefix(format!("{0}x{0}", grid_size));
                    pb.set_message(tally.status());
                }
                Progress::WordPlaced { word, .. } => {
                    tally.placed += 1;
                    pb.set_message(format!("{} ({})", word, tally.status()));
                }
                Progress::WordSkipped { word, .. } => {
                    tally.skipped.push(word.to_string());
                    pb.set_message(format!("{} ({})", word, tally.status()));
                }
                Progress::PlacementFinished { .. } => {
                    pb.finish_with_message(tally.status());
                    if let Some(summary) = skipped_summary(&tally.skipped) {
                        eprintln!("{}", summary);
                    }
                }
                Progress::ValidationFinished { is_valid } => {
                    if is_valid {
                        pb.set_message(format!("{}; grid accepted", tally.status()));
                    } else {
                        pb.set_message(format!("{}; grid rejected", tally.status()));
                    }
                }
            }

            if event.is_word_outcome() {
                pb.inc(1);
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{prefix:>7} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

/// Lists the words that could not be placed, or `None` when all of them fit.
fn skipped_summary(skipped: &[String]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }
    Some(format!(
        "  {} word(s) did not fit: {}",
        skipped.len(),
        skipped.join(", ")
    ))
}
