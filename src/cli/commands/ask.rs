use anyhow::{Result, bail};

use super::{Purpose, load_config, select_model};
use crate::cli::ConversationArgs;
use crate::client::{LlmClient, Message, conversation};
use crate::input::InputReader;
use crate::quest::quest;
use crate::ui::{Console, Spinner};

/// Where the single user message comes from.
pub enum MessageSource {
    /// Words given on the command line, joined with spaces.
    Words(Vec<String>),
    /// A file, or stdin when `None`.
    Input(Option<String>),
}

pub struct AskOptions {
    pub conversation: ConversationArgs,
    pub source: MessageSource,
}

/// Sends one message (after the system message) and streams the answer.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let Some(config) = load_config()? else {
        return Ok(());
    };

    let model = select_model(
        &config,
        options.conversation.model.as_deref(),
        Purpose::Conversation,
    )?;

    let text = match options.source {
        MessageSource::Words(words) => words.join(" "),
        MessageSource::Input(file) => InputReader::read(file.as_deref())?,
    };
    if text.trim().is_empty() {
        bail!("No message given");
    }

    let system_msg = options
        .conversation
        .system
        .as_deref()
        .unwrap_or(&config.system_msg);
    let mut messages = conversation(system_msg);
    messages.push(Message::user(text));

    let client = LlmClient::new(model);
    let mut console = Console::stdout().with_spinner(Spinner::new("Thinking..."));
    quest(&client, &messages, &mut console).await?;

    if console.has_output() {
        println!();
    }

    Ok(())
}
