//! Model listing command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Prints the config file location and every configured model.
///
/// Unlike the other commands this never writes the template: a missing
/// config file is reported instead.
pub fn print_models() -> Result<()> {
    let manager = ConfigManager::new()?;

    println!("{}", Style::header("Config file"));
    println!("  {}", Style::secondary(manager.config_path().display()));
    println!();

    if !manager.exists() {
        println!("No config file yet. Run 'minall init' to create one.");
        return Ok(());
    }

    let config = manager.load()?;
    let models = config.models();

    if models.is_empty() {
        println!("No models configured.");
        println!("Add models under [platforms.<name>.models.<abbr>] in config.toml");
        return Ok(());
    }

    let defaults = [
        config.default_model.as_deref(),
        config.default_translator.as_deref(),
    ];

    println!("{}", Style::header("Models defined in config file"));
    for (abbr, entry) in models.iter() {
        let is_default = defaults.contains(&Some(abbr.as_str()));
        println!(
            "  {} {} {} {}{}",
            Style::value(format!("{abbr:<8}")),
            entry.name,
            Style::code(format!("[{}]", entry.kind)),
            Style::secondary(&entry.platform),
            if is_default {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            }
        );
    }

    Ok(())
}
