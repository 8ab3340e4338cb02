//! Question records and the bank the dialogue draws from.
use std::{fs::File, io, path::Path};

use bevy::log::{info, warn};
use bevy::prelude::Resource;
use rand::Rng;

use super::{
    errors::{EmptyQuestionBank, QuestionLoadError},
    rng::QuizRng,
};

/// Number of leading cells a row needs to become a question.
const COLUMNS: usize = 5;

/// A single quiz entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub correct_feedback: String,
    pub wrong_feedback: String,
    pub hint: String,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        correct_feedback: impl Into<String>,
        wrong_feedback: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            correct_feedback: correct_feedback.into(),
            wrong_feedback: wrong_feedback.into(),
            hint: hint.into(),
        }
    }

    /// Builds a question from the cells `question, answer, correct_feedback,
    /// wrong_feedback, hint`. Extra trailing cells are ignored.
    fn from_cells(cells: &[String]) -> Option<Self> {
        match cells {
            [prompt, answer, correct, wrong, hint, ..] => Some(Self::new(
                prompt.as_str(),
                answer.as_str(),
                correct.as_str(),
                wrong.as_str(),
                hint.as_str(),
            )),
            _ => None,
        }
    }
}

/// Ordered, read-only set of questions loaded once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Builds the bank from data rows (the header row already removed).
    ///
    /// Rows with fewer than five cells are skipped. An empty result is not an
    /// error here; it only fails once something tries to draw from it.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut questions = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            match Question::from_cells(&row) {
                Some(question) => questions.push(question),
                None => warn!(
                    target: "quiz",
                    "Skipping question row {} with {} of {} columns",
                    index + 1,
                    row.len(),
                    COLUMNS
                ),
            }
        }
        Self::new(questions)
    }

    /// Parses a CSV table whose first row is a header.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, QuestionLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Self::from_rows(rows))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, QuestionLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| QuestionLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    /// Loads the bank from disk, degrading to an empty bank on failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_csv_path(path) {
            Ok(bank) => {
                info!(
                    target: "quiz",
                    "Loaded {} questions from {}",
                    bank.len(),
                    path.display()
                );
                bank
            }
            Err(err) => {
                warn!(
                    target: "quiz",
                    "Failed to load questions ({}). Starting with an empty bank.",
                    err
                );
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Uniform draw with replacement using the scene's RNG.
    pub fn pick_random(&self, rng: &mut QuizRng) -> Result<&Question, EmptyQuestionBank> {
        self.pick_random_with_rng(&mut rng.0)
    }

    /// Uniform draw with replacement over `[0, len)`.
    pub fn pick_random_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&Question, EmptyQuestionBank> {
        if self.questions.is_empty() {
            return Err(EmptyQuestionBank);
        }
        let index = rng.gen_range(0..self.questions.len());
        Ok(&self.questions[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const TABLE: &str = "\
question,answer,correct_feedback,wrong_feedback,hint
2+2?,4,Yes!,\"No, try again\",math
Capital of France?,Paris,Correct,Nope,Starts with P
";

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn csv_skips_header_and_honours_quoting() {
        let bank = QuestionBank::from_csv_reader(TABLE.as_bytes()).expect("valid table");

        assert_eq!(bank.len(), 2);
        let first = &bank.questions[0];
        assert_eq!(first.prompt, "2+2?");
        assert_eq!(first.answer, "4");
        assert_eq!(first.correct_feedback, "Yes!");
        assert_eq!(first.wrong_feedback, "No, try again");
        assert_eq!(first.hint, "math");
    }

    #[test]
    fn short_rows_are_skipped_and_extra_cells_ignored() {
        let bank = QuestionBank::from_rows(vec![
            row(&["only", "three", "cells"]),
            row(&["q", "a", "yes", "no", "hint", "surplus"]),
        ]);

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions[0].hint, "hint");
    }

    #[test]
    fn header_only_table_loads_as_empty_bank() {
        let bank = QuestionBank::from_csv_reader(
            "question,answer,correct_feedback,wrong_feedback,hint\n".as_bytes(),
        )
        .expect("header-only table is valid");
        assert!(bank.is_empty());
    }

    #[test]
    fn missing_file_yields_empty_bank() {
        let bank = QuestionBank::load_or_default("assets/definitely-missing.csv");
        assert!(bank.is_empty());
        assert!(matches!(
            QuestionBank::from_csv_path("assets/definitely-missing.csv"),
            Err(QuestionLoadError::Io { .. })
        ));
    }

    #[test]
    fn empty_bank_draw_fails() {
        let bank = QuestionBank::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(bank.pick_random_with_rng(&mut rng), Err(EmptyQuestionBank));
        assert_eq!(
            bank.pick_random(&mut QuizRng::seeded(1)),
            Err(EmptyQuestionBank)
        );
    }

    #[test]
    fn draws_are_members_and_roughly_uniform() {
        let bank = QuestionBank::new(vec![
            Question::new("a", "1", "y", "n", ""),
            Question::new("b", "2", "y", "n", ""),
            Question::new("c", "3", "y", "n", ""),
            Question::new("d", "4", "y", "n", ""),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];
        let draws = 40_000;

        for _ in 0..draws {
            let drawn = bank.pick_random_with_rng(&mut rng).expect("non-empty");
            let index = bank
                .questions
                .iter()
                .position(|question| question == drawn)
                .expect("draw must come from the bank");
            counts[index] += 1;
        }

        for count in counts {
            let share = count as f64 / draws as f64;
            assert!((share - 0.25).abs() < 0.02, "share {share} drifted from 1/4");
        }
    }

    #[test]
    fn consecutive_draws_may_repeat() {
        let bank = QuestionBank::new(vec![Question::new("only", "x", "y", "n", "h")]);
        let mut rng = StdRng::seed_from_u64(7);
        let first = bank.pick_random_with_rng(&mut rng).expect("non-empty");
        let second = bank.pick_random_with_rng(&mut rng).expect("non-empty");
        assert_eq!(first, second);
    }
}
