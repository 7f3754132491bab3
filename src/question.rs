use equation_solver::{Equation, Operand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    text: String,
    image: String,
}

impl Choice {
    pub fn new(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: image.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// A multiple-choice question, optionally backed by the equation it asks about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    image: String,
    equation: Option<Equation>,
    choices: Vec<Choice>,
}

impl Question {
    pub fn new(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: image.into(),
            equation: None,
            choices: Vec::new(),
        }
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.choices.extend(choices);
        self
    }

    pub fn with_equation(mut self, equation: Equation) -> Self {
        self.equation = Some(equation);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn equation(&self) -> Option<&Equation> {
        self.equation.as_ref()
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The solved unknown of the attached equation.
    pub fn answer(&self) -> Option<Operand> {
        self.equation.as_ref()?.solve()
    }

    /// Whether `choice` names the answer, read in the answer's domain.
    pub fn is_correct(&self, choice: &Choice) -> bool {
        self.answer()
            .map_or(false, |answer| self.matches(&answer, choice))
    }

    pub fn correct_choice(&self) -> Option<&Choice> {
        let answer = self.answer()?;
        self.choices
            .iter()
            .find(|choice| self.matches(&answer, choice))
    }

    fn matches(&self, answer: &Operand, choice: &Choice) -> bool {
        match Operand::parse_in(answer.domain(), choice.text()) {
            Ok(value) => &value == answer,
            Err(err) => {
                log::debug!(
                    "choice {:?} of {:?} is not a {} value: {err}",
                    choice.text(),
                    self.text,
                    answer.domain()
                );
                false
            }
        }
    }
}
