use anyhow::Result;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Writes the template config file.
pub fn run_init(force: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    manager.init(force)?;

    println!(
        "{} Config template saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );
    println!("Please make necessary modifications.");
    Ok(())
}
