use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use log::debug;

use crate::quiz::catalog::TypeCode;
use crate::quiz::engine::{Diagnosis, QuizEngine};
use crate::quiz::questions::QuestionBank;
use crate::quiz::{AnswerSet, Choice, Question, QuizError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Quiz,
    Result,
    History,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Quiz => "quiz",
            Screen::Result => "result",
            Screen::History => "history",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    /// Sequence number of the completed run this entry records.
    pub run: u64,
    pub timestamp: DateTime<Local>,
    pub code: TypeCode,
    pub title: String,
}

impl HistoryEntry {
    pub fn display_time(&self) -> String {
        self.timestamp.format("%Y/%m/%d %H:%M").to_string()
    }
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    Finished,
}

/// Per-user quiz state: the current screen, the answers of the run in
/// progress and the history of completed runs.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Session {
    screen: Screen,
    answers: AnswerSet,
    cursor: usize,
    history: Vec<HistoryEntry>,
    completed_runs: u64,
    finished_at: Option<DateTime<Local>>,
    // Run number of the newest history entry, 0 when nothing was recorded yet.
    last_run: u64,
}

impl Session {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[cfg(test)]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Completed runs, most recent first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    fn expect_screen(&self, expected: Screen, action: &'static str) -> Result<(), QuizError> {
        if self.screen != expected {
            return Err(QuizError::InvalidTransition {
                from: self.screen,
                action,
            });
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        self.expect_screen(Screen::Home, "start")?;
        self.answers.clear();
        self.cursor = 0;
        self.screen = Screen::Quiz;
        Ok(())
    }

    pub fn view_history(&mut self) -> Result<(), QuizError> {
        self.expect_screen(Screen::Home, "view history")?;
        self.screen = Screen::History;
        Ok(())
    }

    /// Records the answer to the current question and moves the cursor on.
    /// Returns [`Advance::Finished`] on the last question; the caller then
    /// calls [`Session::finish`].
    pub fn record(&mut self, engine: &QuizEngine, choice: Choice) -> Result<Advance, QuizError> {
        self.expect_screen(Screen::Quiz, "answer")?;
        let last = engine.bank().last_index();
        self.cursor = self.cursor.min(last);

        let question_id = engine
            .bank()
            .get(self.cursor)
            .map(|q| q.id)
            .ok_or_else(|| QuizError::InvalidInput("question bank is empty".to_string()))?;
        engine.record_answer(&mut self.answers, question_id, choice)?;

        if self.cursor < last {
            self.cursor += 1;
            Ok(Advance::Next)
        } else {
            Ok(Advance::Finished)
        }
    }

    /// Closes the run in progress and shows the result screen.
    pub fn finish(&mut self, now: DateTime<Local>) -> Result<(), QuizError> {
        self.expect_screen(Screen::Quiz, "finish")?;
        self.completed_runs += 1;
        self.finished_at = Some(now);
        self.screen = Screen::Result;
        Ok(())
    }

    /// Steps back one question, or leaves the history screen.
    pub fn back(&mut self) -> Result<(), QuizError> {
        match self.screen {
            Screen::Quiz => {
                self.cursor = self.cursor.saturating_sub(1);
                Ok(())
            }
            Screen::History => {
                self.screen = Screen::Home;
                Ok(())
            }
            from => Err(QuizError::InvalidTransition {
                from,
                action: "go back",
            }),
        }
    }

    /// Evaluates the answers for display. The first call after a completed
    /// run adds that run to the front of the history; later calls for the
    /// same run leave the history alone.
    pub fn enter_result(&mut self, engine: &QuizEngine) -> Result<Diagnosis, QuizError> {
        self.expect_screen(Screen::Result, "show the result")?;
        let diagnosis = engine.evaluate(&self.answers)?;

        if self.completed_runs > self.last_run {
            debug!(
                "recording run {} as {} with scores {:?}",
                self.completed_runs, diagnosis.code, diagnosis.scores
            );
            self.history.insert(
                0,
                HistoryEntry {
                    run: self.completed_runs,
                    timestamp: self.finished_at.unwrap_or_else(Local::now),
                    code: diagnosis.code.clone(),
                    title: diagnosis.record.title.to_string(),
                },
            );
            self.last_run = self.completed_runs;
        }

        Ok(diagnosis)
    }

    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.expect_screen(Screen::Result, "restart")?;
        self.screen = Screen::Home;
        Ok(())
    }

    /// The question under the cursor, clamped to the bank.
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        bank.get(self.cursor.min(bank.last_index()))
    }

    pub fn progress(&self, bank: &QuestionBank) -> f64 {
        if bank.is_empty() {
            return 0.0;
        }
        (self.cursor.min(bank.last_index()) + 1) as f64 / bank.len() as f64
    }

    /// Everything the quiz screen shows for the current question.
    pub fn question_view<'a>(&self, bank: &'a QuestionBank) -> Option<QuestionView<'a>> {
        let question = self.current_question(bank)?;
        Some(QuestionView {
            question,
            number: self.cursor.min(bank.last_index()) + 1,
            total: bank.len(),
            progress: self.progress(bank),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    /// 1-based position of the question.
    pub number: usize,
    pub total: usize,
    pub progress: f64,
}

/// Drives sessions through the quiz with the shared engine, pausing before
/// the result screen.
#[derive(Debug, Clone)]
pub struct SessionController {
    engine: Arc<QuizEngine>,
    analyzing_delay: Duration,
}

impl SessionController {
    pub fn new(engine: Arc<QuizEngine>, analyzing_delay: Duration) -> Self {
        Self {
            engine,
            analyzing_delay,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// Answers the current question. After the last one the session waits
    /// for the analyzing delay and moves to the result screen. The wait
    /// yields to the runtime, so other sessions keep running.
    pub async fn answer(&self, session: &mut Session, choice: Choice) -> Result<Advance, QuizError> {
        let advance = session.record(&self.engine, choice)?;
        if advance == Advance::Finished {
            debug!("analyzing for {:?}", self.analyzing_delay);
            tokio::time::sleep(self.analyzing_delay).await;
            session.finish(Local::now())?;
        }
        Ok(advance)
    }
}
