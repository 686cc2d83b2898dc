//! Classification of a single line of a server-sent-event body.

/// Prefix every meaningful line of the body starts with.
pub const DATA_PREFIX: &[u8] = b"data: ";

/// Lines this long (terminator included) cannot carry a payload.
const MIN_FRAME_LEN: usize = DATA_PREFIX.len() + 2;

/// One classified line of the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A `data: ` line; holds the JSON payload with prefix and terminator removed.
    Data(Vec<u8>),
    /// A `data: [...]` sentinel such as `data: [DONE]`.
    Terminal,
    /// A line that is neither data nor a sentinel; holds the raw line.
    Unrecognized(Vec<u8>),
    /// Blank keep-alives and other fragments too short to inspect.
    TooShort,
}

impl Frame {
    /// Classifies a raw line as read from the body, terminator included.
    ///
    /// The length guard counts the trailing `\n`, so `data: x\n` is the
    /// shortest line that can yield a payload.
    pub fn classify(line: &[u8]) -> Self {
        if line.len() < MIN_FRAME_LEN {
            return Self::TooShort;
        }

        let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
            return Self::Unrecognized(line.to_vec());
        };

        if rest.first() == Some(&b'[') {
            return Self::Terminal;
        }

        Self::Data(trim_line_end(rest).to_vec())
    }

    /// Returns the raw line of an unrecognized frame as text for diagnostics.
    pub fn display_raw(raw: &[u8]) -> String {
        String::from_utf8_lossy(trim_line_end(raw)).into_owned()
    }
}

fn trim_line_end(mut bytes: &[u8]) -> &[u8] {
    while let Some((&(b'\n' | b'\r'), rest)) = bytes.split_last() {
        bytes = rest;
    }
    bytes
}
