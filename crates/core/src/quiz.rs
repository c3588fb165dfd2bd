//! Quiz questions and answer-order shuffling.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// A multiple-choice question attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question text
    pub prompt: String,

    /// Answer options, in display order
    pub options: Vec<String>,

    /// Index into `options` of the right answer
    pub correct_index: usize,
}

impl QuizQuestion {
    /// Create a question, checking that the correct index points at an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self> {
        let question = Self {
            prompt: prompt.into(),
            options,
            correct_index,
        };
        question.validate()?;
        Ok(question)
    }

    fn validate(&self) -> Result<()> {
        if self.correct_index >= self.options.len() {
            return Err(Error::CorrectOptionOutOfRange {
                index: self.correct_index,
                options: self.options.len(),
            });
        }
        Ok(())
    }

    /// Whether `answer` is the index of the right option.
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_index
    }

    /// Return a copy with the options in random order; the correct index follows
    /// its option.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        self.validate()?;

        let mut order: Vec<usize> = (0..self.options.len()).collect();
        order.shuffle(rng);

        let options = order.iter().map(|&i| self.options[i].clone()).collect();
        let correct_index = order
            .iter()
            .position(|&i| i == self.correct_index)
            .ok_or(Error::CorrectOptionOutOfRange {
                index: self.correct_index,
                options: self.options.len(),
            })?;

        Ok(Self {
            prompt: self.prompt.clone(),
            options,
            correct_index,
        })
    }
}

/// Shuffle questions in place (Fisher-Yates).
pub fn shuffle_questions<R: Rng + ?Sized>(questions: &mut [QuizQuestion], rng: &mut R) {
    questions.shuffle(rng);
}
