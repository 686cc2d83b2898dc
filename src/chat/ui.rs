//! Chat mode UI components.

use crate::config::Model;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(model: &Model) {
    println!(
        "{} {} - chatting with {} {}",
        Style::header("minall"),
        Style::version(format!("v{VERSION}")),
        Style::value(&model.name),
        Style::secondary(format!("({})", model.kind))
    );
    println!("{}", Style::secondary("q to quit, /help for commands"));
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_model(model: &Model) {
    println!("{}", Style::header("Model"));
    println!("  {}      {}", Style::label("name"), Style::value(&model.name));
    println!("  {}      {}", Style::label("type"), Style::code(model.kind));
    println!("  {}  {}", Style::label("endpoint"), Style::secondary(&model.url));
    println!();
}

pub fn print_cleared() {
    println!("{} Conversation cleared\n", Style::success("✓"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/clear"),
        Style::secondary("Start over, keeping the system message")
    );
    println!(
        "  {}   {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/model"),
        Style::secondary("Show the model in use")
    );
    println!(
        "  {}   {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode (or just q)")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
