//! The interactive menu loop.
//!
//! One state, "awaiting command". Each recognized command runs to completion
//! and returns here; `quit` (or end of input) is the only way out. Input
//! errors are printed and the loop continues. Store faults end the loop.

use super::print::{write_messages, write_result};
use gradebook::api::{CmdMessage, GradebookApi};
use gradebook::commands::{add, delete};
use gradebook::error::{GradebookError, Result};
use gradebook::model::NewStudent;
use gradebook::store::RecordStore;
use std::io::{BufRead, Write};
use tracing::debug;

const BANNER: &str = "Gradebook Manager - commands: add, delete, list, stats, quit";
const COMMAND_PROMPT: &str = "\nEnter command (add/list/delete/stats/quit): ";
const USAGE_HINT: &str = "Unknown command. Try: add, list, delete, stats, quit";
const FAREWELL: &str = "Goodbye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellCommand {
    Add,
    Delete,
    List,
    Stats,
    Quit,
}

impl ShellCommand {
    /// Expects an already trimmed, lower-cased token.
    fn parse(token: &str) -> Option<Self> {
        match token {
            "add" | "a" => Some(ShellCommand::Add),
            "delete" | "del" | "d" => Some(ShellCommand::Delete),
            "list" | "l" => Some(ShellCommand::List),
            "stats" | "s" => Some(ShellCommand::Stats),
            "quit" | "q" | "exit" => Some(ShellCommand::Quit),
            _ => None,
        }
    }
}

pub struct Shell<S: RecordStore, R: BufRead, W: Write> {
    api: GradebookApi<S>,
    input: R,
    output: W,
}

impl<S: RecordStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: GradebookApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        self.api.init()?;
        writeln!(self.output, "{}", BANNER)?;

        loop {
            let Some(line) = self.ask(COMMAND_PROMPT)? else {
                // stdin closed: behave as if the user typed quit
                writeln!(self.output)?;
                return self.quit();
            };

            let token = line.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }

            let outcome = match ShellCommand::parse(&token) {
                Some(ShellCommand::Quit) => return self.quit(),
                Some(ShellCommand::Add) => self.handle_add(),
                Some(ShellCommand::Delete) => self.handle_delete(),
                Some(ShellCommand::List) => self.handle_list(),
                Some(ShellCommand::Stats) => self.handle_stats(),
                None => {
                    writeln!(self.output, "{}", USAGE_HINT)?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    debug!(command = %token, error = %e, "command aborted");
                    write_messages(&mut self.output, &[cancellation_message(&e)])?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn quit(&mut self) -> Result<()> {
        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `label` and reads one line. `None` means end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`ask`](Self::ask), but end of input reads as an empty answer.
    fn ask_line(&mut self, label: &str) -> Result<String> {
        Ok(self.ask(label)?.unwrap_or_default())
    }

    fn handle_add(&mut self) -> Result<()> {
        let name = add::parse_name(&self.ask_line("Student name: ")?)?;
        let subject = add::parse_subject(&self.ask_line("Subject (e.g., Math): ")?);
        let grade = add::parse_grade(&self.ask_line("Grade (0-100): ")?)?;

        let result = self.api.add_student(NewStudent {
            name,
            subject,
            grade,
        })?;
        write_result(&mut self.output, &result)?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        let session = self.api.begin_delete()?;
        if session.is_empty() {
            write_messages(&mut self.output, &[CmdMessage::info("No students found.")])?;
            return Ok(());
        }

        let limit = self.api.config().delete_list_limit;
        write_result(&mut self.output, &session.listing(limit))?;

        let id = delete::parse_id(&self.ask_line("Enter student id to delete: ")?)?;
        let target = session.target(id)?;
        let question = format!(
            "Delete {} (id={})? Type '{}' to confirm: ",
            target.name,
            target.id,
            delete::CONFIRM_TOKEN
        );
        if !delete::confirmed(&self.ask_line(&question)?) {
            return Err(GradebookError::Cancelled);
        }

        let result = self.api.commit_delete(session, id)?;
        write_result(&mut self.output, &result)?;
        Ok(())
    }

    fn handle_list(&mut self) -> Result<()> {
        let result = self.api.list_students()?;
        write_result(&mut self.output, &result)?;
        Ok(())
    }

    fn handle_stats(&mut self) -> Result<()> {
        let subject = self.ask_line("Enter subject to filter or press Enter for all: ")?;
        let result = self.api.stats(Some(&subject))?;
        write_result(&mut self.output, &result)?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (GradebookApi<S>, W) {
        (self.api, self.output)
    }
}

fn cancellation_message(err: &GradebookError) -> CmdMessage {
    match err {
        GradebookError::InvalidInput(msg) => CmdMessage::warning(format!("{} Cancelled.", msg)),
        other => CmdMessage::warning(other.to_string()),
    }
}
