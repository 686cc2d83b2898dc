/// Snapshot-diff reducer for translation streams.
///
/// Translation endpoints resend the whole translation with every frame, so
/// only the part beyond what was already printed is emitted.
#[derive(Debug, Default)]
pub struct SnapshotDiff {
    last_len: usize,
}

impl SnapshotDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the newly appended suffix of `snapshot`.
    ///
    /// A snapshot that does not grow (or whose cut point is not a character
    /// boundary) yields an empty suffix; the printed length still follows it.
    pub fn feed<'a>(&mut self, snapshot: &'a str) -> &'a str {
        let suffix = snapshot.get(self.last_len..).unwrap_or_default();
        self.last_len = snapshot.len();
        suffix
    }
}
