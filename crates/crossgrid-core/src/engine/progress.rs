use crate::core::models::placement::Placement;

/// Events emitted while a word list is laid onto the grid.
///
/// Word events borrow the word from the caller's entries, so listeners that
/// outlive the run must copy what they keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'w> {
    PlacementStarted {
        total_words: usize,
        grid_size: usize,
    },
    WordPlaced {
        /// Input index of the entry.
        index: usize,
        word: &'w str,
        placement: Placement,
        intersections: usize,
    },
    WordSkipped {
        index: usize,
        word: &'w str,
    },
    PlacementFinished {
        placed: usize,
        skipped: usize,
    },
    ValidationFinished {
        is_valid: bool,
    },
}

impl Progress<'_> {
    /// Whether this event settles the outcome of a single word.
    pub fn is_word_outcome(&self) -> bool {
        matches!(self, Progress::WordPlaced { .. } | Progress::WordSkipped { .. })
    }
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress<'_>) + Send + Sync + 'a>;

/// Forwards placement events to an optional listener.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    listener: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    /// A reporter that drops every event.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            listener: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress<'_>) {
        if let Some(listener) = &self.listener {
            listener(event);
        }
    }
}
