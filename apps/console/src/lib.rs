//! Line-oriented console over the site controller.
//!
//! Each input line is one interaction (`navigate`, `party`, `time`, `submit`) or an
//! inspection (`render`, `state`). Views are printed as an indented outline or as the
//! JSON view descriptor.

use std::{cell::RefCell, io::Write, rc::Rc};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use shared::{
    error::Notice,
    view::{PageContent, UiAction, ViewDescriptor},
};
use site_core::{Notifier, ViewController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug)]
enum ReplCommand {
    /// Go to a page id (home, book-table, contact, or anything else).
    Navigate { page: String },
    /// Edit the party-size field.
    Party {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        raw: Vec<String>,
    },
    /// Edit the preferred-time field; no value clears it.
    Time {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        raw: Vec<String>,
    },
    /// Press "Book Now".
    Submit,
    /// Print the current view.
    Render,
    /// Print the current page and form fields.
    State,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Buffers notices so they are printed after the command that raised them.
#[derive(Clone, Default)]
pub struct ConsoleNotifier {
    pending: Rc<RefCell<Vec<Notice>>>,
}

impl ConsoleNotifier {
    fn drain(&self) -> Vec<Notice> {
        self.pending.borrow_mut().drain(..).collect()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        self.pending.borrow_mut().push(notice.clone());
    }

    fn record_diagnostic(&self, line: &str) {
        tracing::info!(target: "booking", "{line}");
    }
}

pub struct Session {
    controller: ViewController<ConsoleNotifier>,
    notifier: ConsoleNotifier,
    format: OutputFormat,
}

impl Session {
    pub fn new(format: OutputFormat) -> Self {
        let notifier = ConsoleNotifier::default();
        Self {
            controller: ViewController::new(notifier.clone()),
            notifier,
            format,
        }
    }

    pub fn controller(&self) -> &ViewController<ConsoleNotifier> {
        &self.controller
    }

    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let parsed = match ReplLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        match parsed.command {
            ReplCommand::Navigate { page } => {
                self.controller.dispatch(UiAction::Navigate { page: page.into() });
            }
            ReplCommand::Party { raw } => {
                self.controller.dispatch(UiAction::SetPartySize {
                    raw: field_value(line, &raw).to_string(),
                });
            }
            ReplCommand::Time { raw } => {
                self.controller.dispatch(UiAction::SetPreferredTime {
                    raw: field_value(line, &raw).to_string(),
                });
            }
            ReplCommand::Submit => {
                self.controller.dispatch(UiAction::SubmitBooking);
            }
            ReplCommand::Render => self.write_view(out)?,
            ReplCommand::State => {
                let form = self.controller.form();
                writeln!(
                    out,
                    "page={} party_size={} preferred_time={:?}",
                    self.controller.current_page(),
                    form.party_size,
                    form.preferred_time
                )?;
            }
            ReplCommand::Quit => return Ok(Flow::Quit),
        }

        for notice in self.notifier.drain() {
            writeln!(out, "[notice] {}", notice.message)?;
        }
        Ok(Flow::Continue)
    }

    fn write_view(&self, out: &mut impl Write) -> Result<()> {
        let view = self.controller.render();
        match self.format {
            OutputFormat::Text => write!(out, "{}", render_text(&view))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
        }
        Ok(())
    }
}

/// Everything after the command word, as typed. Clap only validates the command; the field
/// text itself keeps its inner spacing.
fn field_value<'a>(line: &'a str, tokens: &[String]) -> &'a str {
    if tokens.is_empty() {
        return "";
    }
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start())
        .unwrap_or("")
}

pub fn render_text(view: &ViewDescriptor) -> String {
    let mut text = String::new();
    text.push_str(&view.nav.brand);
    text.push_str("\n ");
    for item in &view.nav.items {
        if item.active {
            text.push_str(&format!(" [{}]", item.label));
        } else {
            text.push_str(&format!("  {} ", item.label));
        }
    }
    text.push('\n');
    text.push_str(&format!("== {} ==\n", view.content.title()));

    match &view.content {
        PageContent::MenuGallery { cards, .. } => {
            for card in cards {
                text.push_str(&format!(
                    "* {}\n    {}\n    image: {}\n",
                    card.name, card.description, card.image.primary
                ));
            }
        }
        PageContent::BookingForm {
            party_size,
            preferred_time,
            submit,
            ..
        } => {
            text.push_str(&format!("{} {}\n", party_size.label, party_size.value));
            text.push_str(&format!("{} {}\n", preferred_time.label, preferred_time.value));
            text.push_str(&format!("<{}>\n", submit.label));
        }
        PageContent::Contact { body, .. } | PageContent::NotFound { body, .. } => {
            text.push_str(body);
            text.push('\n');
        }
    }
    text
}
