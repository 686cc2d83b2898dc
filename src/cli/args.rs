use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "minall")]
#[command(about = "Use LLMs directly from the terminal")]
#[command(
    long_about = "Use LLMs directly from the terminal.\n\n\
                  If no command matches, all arguments are sent as one message."
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(flatten)]
    pub conversation: ConversationArgs,

    /// Message to send (words are joined with spaces)
    pub message: Vec<String>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by chat, pipe and one-shot questions.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ConversationArgs {
    /// Model abbreviation from the config file [default: default_model]
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// System message [default: system_msg]
    #[arg(short = 's', long)]
    pub system: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new chat session
    Chat {
        #[command(flatten)]
        conversation: ConversationArgs,
    },
    /// Send stdin (or a file) as one message
    Pipe {
        #[command(flatten)]
        conversation: ConversationArgs,

        /// File to send (reads from stdin if not provided)
        file: Option<String>,
    },
    /// Translate stdin (or a file); requires a translator model
    Trans {
        /// Model abbreviation from the config file [default: default_translator]
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Target language, using its full English name
        #[arg(short = 't', long = "to", default_value = "Chinese")]
        to: String,

        /// Source language
        #[arg(short = 'f', long = "from", default_value = "auto")]
        from: String,

        /// Describe the domain of the text
        #[arg(short = 'd', long, default_value = "")]
        domain: String,

        /// File to translate (reads from stdin if not provided)
        file: Option<String>,
    },
    /// List the models defined in the config file
    Models,
    /// Write a template config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
