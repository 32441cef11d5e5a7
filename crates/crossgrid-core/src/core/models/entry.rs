/// A single word together with the hint shown to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }

    /// Length of the word in characters, which is what the grid measures.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_characters_not_bytes() {
        let entry = WordEntry::new("ÜBER", "over");
        assert_eq!(entry.len(), 4);
        assert_eq!(entry.letters(), vec!['Ü', 'B', 'E', 'R']);
    }

    #[test]
    fn is_empty_reflects_word_only() {
        assert!(WordEntry::new("", "hint").is_empty());
        assert!(!WordEntry::new("A", "").is_empty());
    }
}
