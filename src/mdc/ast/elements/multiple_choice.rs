//! Multiple choice questions
//!
//! Consecutive `[ ]`/`[x]`/`[X]`/`[*]` lines form one group. A trailing period
//! after the brackets (`[ ]. text`) marks the inline variant; the whole group
//! shares the flag of its first line.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipleChoice {
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipleChoiceQuestions {
    pub inline: bool,
    pub questions: Vec<MultipleChoice>,
}

impl MultipleChoiceQuestions {
    pub fn new(inline: bool) -> Self {
        Self {
            inline,
            questions: Vec::new(),
        }
    }

    pub fn push(&mut self, text: impl Into<String>, correct: bool) {
        self.questions.push(MultipleChoice {
            text: text.into(),
            correct,
        });
    }

    pub fn digest(&self) -> String {
        self.questions
            .iter()
            .map(|q| q.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MultipleChoiceQuestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .questions
            .iter()
            .map(|q| format!("[{}] {}", if q.correct { "x" } else { " " }, q.text))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
