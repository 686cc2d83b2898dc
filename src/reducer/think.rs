use crate::sse::Delta;

/// Printed on its own line before the first reasoning text.
pub const OPEN_MARKER: &str = "<think>";
/// Printed after the last reasoning text, before the answer.
pub const CLOSE_MARKER: &str = "</think>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThinkState {
    #[default]
    Idle,
    Thinking,
}

/// What the console should do for one delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    OpenReasoning,
    CloseReasoning,
    Reasoning(String),
    Answer(String),
}

/// Pure transition of the think/answer machine.
///
/// A delta counts as reasoning if and only if its reasoning text is
/// non-empty; anything else is answer text and closes an open reasoning span.
pub fn step(state: ThinkState, delta: &Delta) -> (ThinkState, Vec<OutputEvent>) {
    let mut events = Vec::with_capacity(2);

    let next = if delta.reasoning.is_empty() {
        if state == ThinkState::Thinking {
            events.push(OutputEvent::CloseReasoning);
        }
        if !delta.answer.is_empty() {
            events.push(OutputEvent::Answer(delta.answer.clone()));
        }
        ThinkState::Idle
    } else {
        if state == ThinkState::Idle {
            events.push(OutputEvent::OpenReasoning);
        }
        events.push(OutputEvent::Reasoning(delta.reasoning.clone()));
        ThinkState::Thinking
    };

    (next, events)
}

/// Think/answer reducer for one response stream.
///
/// Reasoning and answer text both go into the transcript, which becomes the
/// assistant reply once the stream ends.
#[derive(Debug, Default)]
pub struct ThinkAnswerReducer {
    state: ThinkState,
    transcript: String,
}

impl ThinkAnswerReducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> ThinkState {
        self.state
    }

    pub fn feed(&mut self, delta: &Delta) -> Vec<OutputEvent> {
        let (next, events) = step(self.state, delta);
        self.state = next;

        for event in &events {
            if let OutputEvent::Reasoning(text) | OutputEvent::Answer(text) = event {
                self.transcript.push_str(text);
            }
        }

        events
    }

    /// Ends the stream and returns the accumulated reply.
    ///
    /// An open reasoning span is left open.
    pub fn finish(self) -> String {
        self.transcript
    }
}
