use clap::{CommandFactory, Parser};

use minall::cli::commands::ask::{AskOptions, MessageSource};
use minall::cli::commands::{ask, chat, init, models, translate};
use minall::cli::{Args, Command};
use minall::client::{ClientError, TranslationSpec};
use minall::config::ConfigError;
use minall::output::{self, OutputConfig};
use minall::sse::StreamError;
use minall::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Chat { conversation }) => chat::run_chat(conversation).await,
        Some(Command::Pipe { conversation, file }) => {
            ask::run_ask(AskOptions {
                conversation,
                source: MessageSource::Input(file),
            })
            .await
        }
        Some(Command::Trans {
            model,
            to,
            from,
            domain,
            file,
        }) => {
            let options = translate::TranslateOptions {
                file,
                model,
                spec: TranslationSpec {
                    source_lang: from,
                    target_lang: to,
                    domain,
                },
            };
            translate::run_translate(options).await
        }
        Some(Command::Models) => models::print_models(),
        Some(Command::Init { force }) => init::run_init(force),
        None if args.message.is_empty() => {
            Args::command().print_help()?;
            Ok(())
        }
        None => {
            ask::run_ask(AskOptions {
                conversation: args.conversation,
                source: MessageSource::Words(args.message),
            })
            .await
        }
    }
}

fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.downcast_ref::<ConfigError>().is_some() {
        return exitcode::CONFIG;
    }

    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Status { .. }) => return exitcode::UNAVAILABLE,
        Some(ClientError::Request { .. }) => return exitcode::IOERR,
        None => {}
    }

    match err.downcast_ref::<StreamError>() {
        Some(StreamError::Transport(_)) => exitcode::IOERR,
        Some(StreamError::Decode { .. }) => exitcode::PROTOCOL,
        None => exitcode::SOFTWARE,
    }
}
