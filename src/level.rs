use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::Question;

/// An ordered set of questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, new)]
pub struct Level {
    questions: Vec<Question>,
}

impl Level {
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl FromIterator<Question> for Level {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
