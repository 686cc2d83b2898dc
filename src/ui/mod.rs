//! Terminal UI components: streamed output console, spinner and colors.

mod console;
mod spinner;
mod theme;

pub use console::Console;
pub use spinner::Spinner;
pub use theme::Style;
