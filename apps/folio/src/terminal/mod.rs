//! The terminal session: an append-only transcript, a single in-flight
//! guard, and a command dispatcher. This is the hidden easter-egg widget of
//! the portfolio, driven here by the interactive CLI front end.
//!
//! Concurrency contract: one command at a time. A submission that arrives
//! while another is executing is dropped silently (no echo, no queuing, no
//! error line). The guard is released on every exit path via a drop guard.

pub mod command;
pub mod hack;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::error;

use crate::content::Content;
use crate::llm_client::{prompts, Completions};
use self::command::Command;
use self::hack::HackSequence;

pub const WELCOME_LINE: &str =
    "Welcome to the terminal. Type \"help\" for available commands.";

const ASK_USAGE: &str = "Usage: ask <question> (e.g. ask where did Omri work in 2019?)";
const ASK_PROCESSING: &str = "Processing your question...";
const ASK_CONNECTING: &str = "Connecting to AI service...";
const ASK_FAILURE: &str = "Sorry, I couldn't answer that right now. Please try again later.";

const MISSING_KEY_LINES: &[&str] = &[
    "The ask command needs an OpenAI API key, and none is configured.",
    "To enable it:",
    "  1. Create a .env file in the working directory (or export the variable)",
    "  2. Add OPENAI_API_KEY=<your key>",
    "  3. Restart folio",
];

/// Result of submitting one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The command ran (or the input was blank).
    Done,
    /// Another command was in flight; the input was dropped.
    Ignored,
    /// `exit` ran; the session is now hidden.
    Closed,
}

struct SessionState {
    transcript: Vec<String>,
    visible: bool,
}

/// A cloneable handle to one terminal session. All clones share the same
/// transcript, visibility flag, and in-flight guard.
#[derive(Clone)]
pub struct Terminal {
    state: Arc<Mutex<SessionState>>,
    busy: Arc<AtomicBool>,
    backend: Option<Arc<dyn Completions>>,
    content: Arc<Content>,
}

/// Clears the in-flight flag when the executing command unwinds, whatever
/// the exit path.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Terminal {
    pub fn new(content: Arc<Content>, backend: Option<Arc<dyn Completions>>) -> Self {
        Terminal {
            state: Arc::new(Mutex::new(SessionState {
                transcript: vec![WELCOME_LINE.to_string()],
                visible: true,
            })),
            busy: Arc::new(AtomicBool::new(false)),
            backend,
            content,
        }
    }

    pub async fn transcript(&self) -> Vec<String> {
        self.state.lock().await.transcript.clone()
    }

    pub async fn is_visible(&self) -> bool {
        self.state.lock().await.visible
    }

    /// Accepts one line of input, resolves it to a command, and appends the
    /// command's output to the transcript. Returns `Ignored` without side
    /// effects if another command is already executing.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let input = raw.trim().to_lowercase();
        if input.is_empty() {
            return SubmitOutcome::Done;
        }

        // Single in-flight command: idle -> executing, or drop the input.
        if self.busy.swap(true, Ordering::AcqRel) {
            return SubmitOutcome::Ignored;
        }
        let _busy = BusyGuard(self.busy.clone());

        self.push(format!("> {input}")).await;

        match Command::parse(&input) {
            Command::Help => self.push_block(help_text()).await,
            Command::About => self.push_block(about_text(&self.content)).await,
            Command::Skills => self.push_block(skills_text(&self.content)).await,
            Command::Contact => self.push_block(contact_text(&self.content)).await,
            Command::Clear => self.state.lock().await.transcript.clear(),
            Command::Exit => {
                self.state.lock().await.visible = false;
                return SubmitOutcome::Closed;
            }
            Command::Hack => self.run_hack().await,
            Command::Ask(question) => self.run_ask(&question).await,
            Command::Unknown(name) => {
                self.push(format!(
                    "Command not found: {name}. Type \"help\" for available commands."
                ))
                .await
            }
        }

        SubmitOutcome::Done
    }

    async fn run_hack(&self) {
        let mut sequence = HackSequence::new();
        while let Some(line) = sequence.next_line().await {
            self.push(line).await;
        }
    }

    async fn run_ask(&self, question: &str) {
        if question.is_empty() {
            self.push(ASK_USAGE).await;
            return;
        }

        // Pre-flight: a missing credential never reaches the network.
        let Some(backend) = &self.backend else {
            for line in MISSING_KEY_LINES {
                self.push(*line).await;
            }
            return;
        };

        self.push(ASK_PROCESSING).await;
        self.push(ASK_CONNECTING).await;

        let prompt = prompts::build_ask_prompt(&self.content, question);
        match backend.complete(prompts::RESUME_QA_SYSTEM, &prompt).await {
            Ok(answer) => {
                for line in answer.lines() {
                    self.push(line).await;
                }
            }
            Err(e) => {
                error!("ask command failed: {e}");
                self.push(ASK_FAILURE).await;
            }
        }
    }

    async fn push(&self, line: impl Into<String>) {
        self.state.lock().await.transcript.push(line.into());
    }

    async fn push_block(&self, text: String) {
        let mut state = self.state.lock().await;
        state.transcript.extend(text.lines().map(str::to_string));
    }
}

fn help_text() -> String {
    "Available commands:\n\
     \x20 help    - Show this help message\n\
     \x20 clear   - Clear the terminal\n\
     \x20 about   - Show about information\n\
     \x20 skills  - Display technical skills\n\
     \x20 contact - Show contact information\n\
     \x20 ask     - Ask the AI about this resume: ask <question>\n\
     \x20 hack    - Start hacking simulation\n\
     \x20 exit    - Close terminal"
        .to_string()
}

fn about_text(content: &Content) -> String {
    let mut out = format!(
        "{} - {}",
        content.personal.name, content.personal.title
    );
    for paragraph in &content.about.paragraphs {
        out.push('\n');
        out.push_str(paragraph);
    }
    out
}

fn skills_text(content: &Content) -> String {
    let mut out = String::from("Technical Skills:");
    for category in &content.skills.categories {
        out.push_str(&format!(
            "\n  {}: {}",
            category.title,
            category.items.join(", ")
        ));
    }
    out
}

fn contact_text(content: &Content) -> String {
    let c = &content.contact;
    format!(
        "Contact Information:\n\
         \x20 Email: {}\n\
         \x20 Phone: {}\n\
         \x20 Location: {}\n\
         \x20 LinkedIn: {}",
        c.email, c.phone, c.location, c.linkedin
    )
}
