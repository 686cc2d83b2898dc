use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::Write;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::client::{LlmClient, Message, conversation};
use crate::quest::quest;
use crate::ui::{Console, Spinner};

/// An interactive multi-turn conversation with one model.
///
/// The conversation lives only as long as the session.
pub struct ChatSession {
    client: LlmClient,
    system_msg: String,
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new(client: LlmClient, system_msg: impl Into<String>) -> Self {
        let system_msg = system_msg.into();
        let messages = conversation(&system_msg);
        Self {
            client,
            system_msg,
            messages,
        }
    }

    /// The conversation so far, in dialogue order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drops every turn except the system message.
    pub fn clear(&mut self) {
        self.messages = conversation(&self.system_msg);
    }

    /// Sends `text` as the next user turn and records the reply.
    pub async fn ask<W: Write, E: Write>(
        &mut self,
        text: &str,
        console: &mut Console<W, E>,
    ) -> Result<String> {
        self.messages.push(Message::user(text));
        let reply = quest(&self.client, &self.messages, console).await?;
        self.messages.push(Message::assistant(reply.clone()));
        Ok(reply)
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.client.model());

        let prompt_style = Styled::new(">>>")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            println!();
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        let mut console = Console::stdout().with_spinner(Spinner::new("Thinking..."));
                        self.ask(&text, &mut console).await?;
                        if console.has_output() {
                            println!();
                        }
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Clear => {
                self.clear();
                ui::print_cleared();
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Model => {
                ui::print_model(self.client.model());
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Role;
    use crate::config::{Model, ModelKind};

    fn create_test_session(system_msg: &str) -> ChatSession {
        let model = Model {
            name: "deepseek-chat".to_string(),
            kind: ModelKind::Chat,
            url: "http://localhost:9/v1/chat".to_string(),
            api_key: "sk-test".to_string(),
        };
        ChatSession::new(LlmClient::new(model), system_msg)
    }

    #[test]
    fn test_session_starts_with_system_message() {
        let session = create_test_session("be terse");
        assert_eq!(session.messages(), &[Message::system("be terse")]);
    }

    #[test]
    fn test_session_without_system_message() {
        let session = create_test_session("");
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_clear_keeps_system_message() {
        let mut session = create_test_session("be terse");
        session.messages.push(Message::user("hi"));
        session.messages.push(Message::assistant("hello"));

        session.clear();

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::System);
    }

    #[test]
    fn test_handle_command_quit_stops_loop() {
        let mut session = create_test_session("");
        assert!(!session.handle_command(SlashCommand::Quit));
        assert!(session.handle_command(SlashCommand::Help));
    }
}
