use anyhow::Result;

use super::{Purpose, load_config, select_model};
use crate::chat::ChatSession;
use crate::cli::ConversationArgs;
use crate::client::LlmClient;

pub async fn run_chat(options: ConversationArgs) -> Result<()> {
    let Some(config) = load_config()? else {
        return Ok(());
    };

    let model = select_model(&config, options.model.as_deref(), Purpose::Conversation)?;
    let system_msg = options.system.unwrap_or(config.system_msg);

    let mut session = ChatSession::new(LlmClient::new(model), system_msg);
    session.run().await
}
