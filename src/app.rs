//! Text front end for the spell fixer.
//!
//! [`SpellApp`] feeds phrases to a [`SpellChecker`] and renders the resulting
//! [`View`]: `Result: …` goes to the output writer, `Error: …` to the error
//! writer. Each phrase is an independent submission.
//!
//! | View      | Rendered as                        |
//! |-----------|------------------------------------|
//! | `Idle`    | nothing                            |
//! | `Loading` | logged by the checker              |
//! | `Result`  | `Result: {corrected}` on out       |
//! | `Error`   | `Error: {details}` on err          |

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::pipeline::{SpellChecker, View};

pub struct SpellApp {
    checker: SpellChecker,
}

impl SpellApp {
    pub fn new(checker: SpellChecker) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &SpellChecker {
        &self.checker
    }

    /// Submit one phrase and return the view it settled on.
    pub async fn submit(&self, phrase: &str) -> View {
        match self.checker.submit(phrase).await {
            Ok(corrected) => log::debug!("submission done: {corrected:?}"),
            Err(e) => log::debug!("submission ended with error: {e}"),
        }
        self.checker.view()
    }

    /// Submit one phrase and render the outcome. Returns `true` on success.
    pub async fn run_once<O: Write, E: Write>(
        &self,
        phrase: &str,
        out: &mut O,
        err: &mut E,
    ) -> Result<bool> {
        let view = self.submit(phrase).await;
        render(&view, out, err)?;
        Ok(!matches!(view, View::Error(_)))
    }

    /// Treat every line of `input` as a separate submission until EOF.
    ///
    /// Returns the number of submissions that ended in an error.
    pub async fn run_lines<R, O, E>(&self, input: R, out: &mut O, err: &mut E) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
        E: Write,
    {
        let mut lines = input.lines();
        let mut failures = 0;

        while let Some(line) = lines.next_line().await? {
            if !self.run_once(&line, out, err).await? {
                failures += 1;
            }
        }

        log::debug!("input closed, {failures} failed submission(s)");
        Ok(failures)
    }
}

/// Write `view` to the matching stream.
pub fn render<O: Write, E: Write>(view: &View, out: &mut O, err: &mut E) -> std::io::Result<()> {
    match view {
        View::Idle | View::Loading => Ok(()),
        View::Result(_) => {
            writeln!(out, "{view}")?;
            out.flush()
        }
        View::Error(_) => {
            writeln!(err, "{view}")?;
            err.flush()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
