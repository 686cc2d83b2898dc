use anyhow::Result;

use super::{Purpose, load_config, select_model};
use crate::client::{LlmClient, TranslationSpec};
use crate::input::InputReader;
use crate::quest::translate;
use crate::ui::{Console, Spinner};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub model: Option<String>,
    pub spec: TranslationSpec,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let Some(config) = load_config()? else {
        return Ok(());
    };

    let model = select_model(&config, options.model.as_deref(), Purpose::Translation)?;
    let source_text = InputReader::read(options.file.as_deref())?;

    let client = LlmClient::new(model);
    let mut console = Console::stdout().with_spinner(Spinner::new("Translating..."));
    translate(&client, &options.spec, &source_text, &mut console).await?;

    if console.has_output() {
        println!();
    }

    Ok(())
}
