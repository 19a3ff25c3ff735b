//! Line-oriented queue session, the terminal counterpart of the desktop window.

use std::io::{self, BufRead, Write};

use callq_core::{
    CallQueueManager, QueueError, clear_confirmation_prompt, processed_message, render_queue,
    size_label,
};
use tracing::{debug, warn};

pub const INPUT_ERROR: &str = "Input Error: Please enter both a name and an issue.";
pub const NOTHING_TO_PROCESS: &str = "No calls in queue to process!";
pub const ALREADY_EMPTY: &str = "The queue is already empty!";
pub const CLEARED: &str = "All calls have been cleared from the queue.";
pub const CLEAR_CANCELLED: &str = "Clear cancelled.";

const HELP: &str = "\
Commands:
  add <name> | <issue>  queue a new call
  next                  process the call at the front of the queue
  clear                 remove every queued call
  list                  show the queue front to back
  size                  show how many calls are waiting
  help                  show this message
  quit                  leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add { caller_name: String, issue: String },
    Next,
    Clear,
    List,
    Size,
    Help,
    Quit,
}

/// Parse an input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => {
            let (caller_name, issue) = rest
                .split_once('|')
                .ok_or_else(|| "usage: add <name> | <issue>".to_string())?;
            SessionCommand::Add {
                caller_name: caller_name.to_string(),
                issue: issue.to_string(),
            }
        }
        "next" | "process" => SessionCommand::Next,
        "clear" => SessionCommand::Clear,
        "list" | "show" => SessionCommand::List,
        "size" => SessionCommand::Size,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

/// Behaviour switches for a [`Session`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Ask before clearing a non-empty queue.
    pub confirm_clear: bool,
    /// Emit `list` as a JSON array.
    pub json: bool,
    /// Print a `> ` prompt before each command.
    pub prompt: bool,
}

/// Owns the queue for the lifetime of one session.
pub struct Session<R, W> {
    queue: CallQueueManager,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(queue: CallQueueManager, input: R, output: W, options: SessionOptions) -> Self {
        Self {
            queue,
            input,
            output,
            options,
        }
    }

    pub fn queue(&self) -> &CallQueueManager {
        &self.queue
    }

    /// Process commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while let Some(line) = self.read_line(self.options.prompt.then_some("> "))? {
            match parse_command(&line) {
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Ok(None) => {}
                Err(message) => writeln!(self.output, "Error: {message}")?,
            }
        }
        self.output.flush()
    }

    pub fn execute(&mut self, command: SessionCommand) -> io::Result<()> {
        debug!(?command, "Session command");
        match command {
            SessionCommand::Add { caller_name, issue } => {
                match self.queue.enqueue(&caller_name, &issue) {
                    Ok(id) => {
                        if let Some(call) = self.queue.get(id) {
                            writeln!(self.output, "Added {id}: {call}")?;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "Rejected call");
                        writeln!(self.output, "{INPUT_ERROR}")?;
                    }
                }
            }
            SessionCommand::Next => match self.queue.dequeue() {
                Ok(call) => writeln!(self.output, "{}", processed_message(&call))?,
                Err(QueueError::EmptyQueue) => writeln!(self.output, "{NOTHING_TO_PROCESS}")?,
                Err(err) => writeln!(self.output, "Error: {err}")?,
            },
            SessionCommand::Clear => self.clear()?,
            SessionCommand::List => self.list()?,
            SessionCommand::Size => writeln!(self.output, "{}", size_label(self.queue.size()))?,
            SessionCommand::Help => writeln!(self.output, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.queue.is_empty() {
            return writeln!(self.output, "{ALREADY_EMPTY}");
        }

        if self.options.confirm_clear {
            let question = format!("{} [y/N] ", clear_confirmation_prompt(self.queue.size()));
            let answer = self.read_line(Some(&question))?.unwrap_or_default();
            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                return writeln!(self.output, "{CLEAR_CANCELLED}");
            }
        }

        self.queue.clear();
        writeln!(self.output, "{CLEARED}")
    }

    fn list(&mut self) -> io::Result<()> {
        let calls = self.queue.snapshot();
        if self.options.json {
            let json = serde_json::to_string_pretty(&calls).map_err(io::Error::other)?;
            writeln!(self.output, "{json}")
        } else {
            let text = render_queue(&calls);
            writeln!(self.output, "{}", text.trim_end())
        }
    }

    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<Option<String>> {
        if let Some(prompt) = prompt {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
