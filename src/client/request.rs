use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a conversation; order in a slice is dialogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Starts a conversation with the system message, if there is one.
pub fn conversation(system_msg: &str) -> Vec<Message> {
    if system_msg.is_empty() {
        Vec::new()
    } else {
        vec![Message::system(system_msg)]
    }
}

/// Body of a streaming chat completion request.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    pub const fn new(model: &'a str, messages: &'a [Message]) -> Self {
        Self {
            model,
            messages,
            stream: true,
        }
    }
}

/// Caller-side description of a translation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSpec {
    /// Source language, `auto` to let the model detect it.
    pub source_lang: String,
    /// Full English name of the target language, e.g. `Chinese`.
    pub target_lang: String,
    /// Free-text description of the text's domain, may be empty.
    pub domain: String,
}

impl Default for TranslationSpec {
    fn default() -> Self {
        Self {
            source_lang: "auto".to_string(),
            target_lang: "Chinese".to_string(),
            domain: String::new(),
        }
    }
}

// Borrowed view so the source text is not copied for serialization
#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct TranslationOptions<'a> {
    source_lang: &'a str,
    target_lang: &'a str,
    domains: &'a str,
}

/// Body of a streaming translation request.
#[derive(Debug, Serialize)]
pub struct TranslationRequest<'a> {
    model: &'a str,
    messages: [UserMessage<'a>; 1],
    translation_options: TranslationOptions<'a>,
    stream: bool,
}

impl<'a> TranslationRequest<'a> {
    pub fn new(model: &'a str, spec: &'a TranslationSpec, text: &'a str) -> Self {
        Self {
            model,
            messages: [UserMessage {
                role: Role::User,
                content: text,
            }],
            translation_options: TranslationOptions {
                source_lang: spec.source_lang.as_str(),
                target_lang: spec.target_lang.as_str(),
                domains: spec.domain.as_str(),
            },
            stream: true,
        }
    }
}
