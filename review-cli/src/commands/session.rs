//! Interactive review session shared by the slide and demo commands

use std::io::{BufRead, Write};

use review_core::{Content, ExportSink, ItemSequence, Report, ReviewItem};

/// A command typed at the review prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Next,
    Prev,
    /// Save the current item and continue; `None` keeps its existing remarks
    Save(Option<String>),
    Show,
    List,
    Status { json: bool },
    Report,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    /// Parse one input line; `None` for a blank line
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return None;
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "n" | "next" => SessionCommand::Next,
            "p" | "prev" | "previous" => SessionCommand::Prev,
            "s" | "save" => SessionCommand::Save(match rest {
                "-" => Some(String::new()),
                text if text.trim().is_empty() => None,
                text => Some(text.to_string()),
            }),
            "show" => SessionCommand::Show,
            "l" | "list" => SessionCommand::List,
            "status" => SessionCommand::Status {
                json: rest.trim() == "--json",
            },
            "report" => SessionCommand::Report,
            "h" | "help" | "?" => SessionCommand::Help,
            "q" | "quit" | "exit" => SessionCommand::Quit,
            other => SessionCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every item was reviewed and the report was delivered
    ReportDelivered,
    /// The user quit before finishing
    Quit,
    /// Input ran out
    InputClosed,
}

/// Drives one review over a sequence, reading commands from `input`
pub struct ReviewSession<'a, C, R, W> {
    sequence: ItemSequence<C>,
    sink: &'a dyn ExportSink,
    input: R,
    output: W,
}

impl<'a, C, R, W> ReviewSession<'a, C, R, W>
where
    C: Content,
    R: BufRead,
    W: Write,
{
    pub fn new(sequence: ItemSequence<C>, sink: &'a dyn ExportSink, input: R, output: W) -> Self {
        Self {
            sequence,
            sink,
            input,
            output,
        }
    }

    pub fn sequence(&self) -> &ItemSequence<C> {
        &self.sequence
    }

    /// Run until the report is delivered, the user quits, or input ends
    pub fn run(&mut self) -> anyhow::Result<SessionOutcome> {
        let kind = self.sequence.kind();
        writeln!(self.output, "{} Tracker", kind)?;
        writeln!(self.output, "Type 'help' for commands.")?;
        writeln!(self.output)?;
        self.print_current()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed, ending review session");
                return Ok(SessionOutcome::InputClosed);
            }

            let Some(command) = SessionCommand::parse(&line) else {
                continue;
            };

            match command {
                SessionCommand::Next => {
                    if self.sequence.move_next().is_some() {
                        self.print_current()?;
                    } else {
                        let label = self.label_lower();
                        writeln!(self.output, "Already at the last {}.", label)?;
                    }
                }
                SessionCommand::Prev => {
                    if self.sequence.move_prev().is_some() {
                        self.print_current()?;
                    } else {
                        let label = self.label_lower();
                        writeln!(self.output, "Already at the first {}.", label)?;
                    }
                }
                SessionCommand::Save(remarks) => self.save(remarks)?,
                SessionCommand::Show => self.print_current()?,
                SessionCommand::List => self.print_list()?,
                SessionCommand::Status { json } => self.print_status(json)?,
                SessionCommand::Report => {
                    if self.deliver_report()? {
                        return Ok(SessionOutcome::ReportDelivered);
                    }
                }
                SessionCommand::Help => self.print_help()?,
                SessionCommand::Quit => {
                    writeln!(
                        self.output,
                        "Review abandoned with {} of {} reviewed.",
                        self.sequence.reviewed_count(),
                        self.sequence.total_count()
                    )?;
                    return Ok(SessionOutcome::Quit);
                }
                SessionCommand::Unknown(word) => {
                    writeln!(self.output, "Unknown command '{}'. Type 'help'.", word)?;
                }
            }
        }
    }

    fn label_lower(&self) -> String {
        self.sequence.kind().item_label().to_ascii_lowercase()
    }

    /// Save remarks, then advance when there is a next item
    fn save(&mut self, remarks: Option<String>) -> anyhow::Result<()> {
        let label = self.sequence.kind().item_label();
        let remarks = match remarks {
            Some(text) => text,
            None => self
                .sequence
                .current()
                .map(|item| item.remarks().to_string())
                .unwrap_or_default(),
        };
        let Some(id) = self.sequence.update_current(remarks).map(ReviewItem::id) else {
            writeln!(self.output, "Nothing to review.")?;
            return Ok(());
        };
        writeln!(self.output, "{} {} review has been saved.", label, id)?;

        if self.sequence.is_complete() {
            writeln!(
                self.output,
                "All {} reviewed. Type 'report' to save the review report.",
                self.sequence.kind().plural()
            )?;
        }

        if self.sequence.move_next().is_some() {
            self.print_current()?;
        }
        Ok(())
    }

    /// Generate and deliver the report; false if items are still unreviewed
    fn deliver_report(&mut self) -> anyhow::Result<bool> {
        if !self.sequence.is_complete() {
            writeln!(
                self.output,
                "{} {} remaining. Review every item before saving the report.",
                self.sequence.remaining(),
                self.sequence.kind().plural()
            )?;
            return Ok(false);
        }

        let report = Report::for_sequence(&self.sequence);
        report.deliver_to(self.sink);
        writeln!(self.output, "Review complete! Report saved as {}.", report.filename)?;
        Ok(true)
    }

    fn print_current(&mut self) -> anyhow::Result<()> {
        let label = self.sequence.kind().item_label();
        let total = self.sequence.total_count();
        let progress = format_progress(&self.sequence);

        let Some(item) = self.sequence.current() else {
            writeln!(self.output, "No {} to review.", self.sequence.kind().plural())?;
            return Ok(());
        };

        let marker = if item.is_reviewed() {
            "Reviewed"
        } else {
            "Not Reviewed"
        };
        writeln!(self.output, "{} {} of {} [{}]", label, item.id(), total, marker)?;
        writeln!(self.output, "{}", progress)?;
        if let Some(url) = item.url() {
            writeln!(self.output, "URL: {}", url)?;
        }
        if item.has_remarks() {
            writeln!(self.output, "Remarks: {}", item.remarks())?;
        }
        Ok(())
    }

    fn print_list(&mut self) -> anyhow::Result<()> {
        let label = self.sequence.kind().item_label();
        let current = self.sequence.current().map(ReviewItem::id);

        for item in self.sequence.all_items() {
            let cursor = if Some(item.id()) == current { ">" } else { " " };
            let check = if item.is_reviewed() { "x" } else { " " };
            let mut line = format!("{} [{}] {} {}", cursor, check, label, item.id());
            if let Some(url) = item.url() {
                line.push_str(&format!("  {}", url));
            }
            if item.has_remarks() {
                line.push_str(&format!("  - {}", item.remarks()));
            }
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn print_status(&mut self, json: bool) -> anyhow::Result<()> {
        if json {
            let rendered = self.sequence.progress().to_json()?;
            writeln!(self.output, "{}", rendered)?;
        } else {
            let progress = format_progress(&self.sequence);
            writeln!(self.output, "{}", progress)?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  next, n             Go to the next item")?;
        writeln!(self.output, "  prev, p             Go to the previous item")?;
        writeln!(
            self.output,
            "  save, s [remarks]   Save and continue; without remarks the current ones are kept"
        )?;
        writeln!(
            self.output,
            "  save -, s -         Clear the remarks (everything is fine) and continue"
        )?;
        writeln!(self.output, "  show                Show the current item")?;
        writeln!(self.output, "  list, l             List all items")?;
        writeln!(self.output, "  status [--json]     Show progress")?;
        writeln!(
            self.output,
            "  report              Save the review report (once all items are reviewed)"
        )?;
        writeln!(self.output, "  quit, q             Abandon the review")?;
        Ok(())
    }
}

/// "3 slides remaining • 40% complete"
pub fn format_progress<C: Content>(sequence: &ItemSequence<C>) -> String {
    format!(
        "{} {} remaining \u{2022} {:.0}% complete",
        sequence.remaining(),
        sequence.kind().plural(),
        sequence.completion_percentage()
    )
}
