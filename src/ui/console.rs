use std::io::{self, Write};

use super::{Spinner, Style};
use crate::reducer::{CLOSE_MARKER, OPEN_MARKER, OutputEvent};
use crate::sse::Frame;

/// Writes streamed model output, flushing after every piece.
///
/// Model text goes to `out`; diagnostics about the stream go to a separate
/// writer, stderr unless replaced. An attached spinner is cleared right
/// before the first write or diagnostic.
pub struct Console<W: Write, E: Write = io::Stderr> {
    out: W,
    diagnostics: E,
    spinner: Option<Spinner>,
    written: bool,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console::with_writers(out, io::stderr())
    }
}

impl<W: Write, E: Write> Console<W, E> {
    pub const fn with_writers(out: W, diagnostics: E) -> Self {
        Self {
            out,
            diagnostics,
            spinner: None,
            written: false,
        }
    }

    #[must_use]
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = Some(spinner);
        self
    }

    /// Renders one think/answer event.
    pub fn emit(&mut self, event: &OutputEvent) -> io::Result<()> {
        match event {
            OutputEvent::OpenReasoning => self.write(&format!("{OPEN_MARKER}\n")),
            OutputEvent::CloseReasoning => self.write(&format!("\n{CLOSE_MARKER}\n\n")),
            OutputEvent::Reasoning(text) | OutputEvent::Answer(text) => self.write(text),
        }
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        self.stop_spinner();
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        self.written = true;
        Ok(())
    }

    /// Reports a frame that is neither data nor a terminal sentinel.
    ///
    /// Shown even in quiet mode.
    pub fn diagnostic(&mut self, raw: &[u8]) -> io::Result<()> {
        self.stop_spinner();
        writeln!(
            self.diagnostics,
            "\n{} {}",
            Style::warning("Unknown data:"),
            Frame::display_raw(raw)
        )?;
        self.diagnostics.flush()
    }

    /// Returns `true` once any model text has been written.
    pub const fn has_output(&self) -> bool {
        self.written
    }

    /// Clears the spinner if nothing was ever written.
    pub fn finish(&mut self) {
        self.stop_spinner();
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Returns the output and diagnostics writers.
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.diagnostics)
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(events: &[OutputEvent]) -> String {
        let mut console = Console::new(Vec::new());
        for event in events {
            console.emit(event).unwrap();
        }
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_reasoning_wrapped_in_markers() {
        let output = render(&[
            OutputEvent::OpenReasoning,
            OutputEvent::Reasoning("a".to_string()),
            OutputEvent::Reasoning("b".to_string()),
            OutputEvent::CloseReasoning,
            OutputEvent::Answer("c".to_string()),
            OutputEvent::Answer("d".to_string()),
        ]);
        assert_eq!(output, "<think>\nab\n</think>\n\ncd");
    }

    #[test]
    fn test_answer_written_verbatim() {
        let output = render(&[
            OutputEvent::Answer("Hi".to_string()),
            OutputEvent::Answer(" there".to_string()),
        ]);
        assert_eq!(output, "Hi there");
    }

    #[test]
    fn test_diagnostic_goes_to_its_own_writer() {
        let mut console = Console::with_writers(Vec::new(), Vec::new());
        console.write("a").unwrap();
        console.diagnostic(b"event: ping\r\n").unwrap();
        console.write("b").unwrap();

        let (out, diagnostics) = console.into_parts();
        let diagnostics = String::from_utf8(diagnostics).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab");
        assert_eq!(diagnostics.matches("Unknown data:").count(), 1);
        assert!(diagnostics.trim_end().ends_with("event: ping"));
    }

    #[test]
    fn test_has_output_ignores_empty_writes() {
        let mut console = Console::new(Vec::new()).with_spinner(Spinner::hidden());
        console.write("").unwrap();
        assert!(!console.has_output());

        console.write("x").unwrap();
        assert!(console.has_output());
        console.finish();
    }
}
