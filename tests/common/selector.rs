//! Selector that answers from a script instead of a terminal.

use std::collections::VecDeque;
use std::io;

use gitcompare::ui::Selector;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Answer {
    /// Choose the option whose label contains this text
    Containing(String),
    /// Choose by index
    Index(usize),
    Cancel,
}

/// Answers prompts in order and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    answers: VecDeque<Answer>,
    /// `(message, options)` of each prompt
    pub asked: Vec<(String, Vec<String>)>,
}

impl ScriptedSelector {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Pick options containing each of `texts`, in order.
    pub fn picking(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Answer::Containing(t.to_string())))
    }
}

impl Selector for ScriptedSelector {
    fn choose(
        &mut self,
        _title: &str,
        message: &str,
        options: &[String],
    ) -> io::Result<Option<usize>> {
        self.asked.push((message.to_string(), options.to_vec()));
        match self.answers.pop_front() {
            Some(Answer::Containing(text)) => Ok(options.iter().position(|o| o.contains(&text))),
            Some(Answer::Index(index)) => Ok(Some(index)),
            Some(Answer::Cancel) | None => Ok(None),
        }
    }
}
