//! Per-session message buffer.
//!
//! Every mutating operation appends at least one human-readable line here,
//! so the transport layer never observes a silent turn. The buffer is
//! append-only from the engine's perspective; the session layer drains it
//! after each request.

/// Append-only log of human-readable lines for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    lines: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Removes and returns all buffered lines.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Lines buffered since the last drain.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_buffer() {
        let mut log = MessageLog::new();
        log.push("first");
        log.push(String::from("second"));
        assert_eq!(log.len(), 2);

        let drained = log.drain();
        assert_eq!(drained, vec!["first".to_string(), "second".to_string()]);
        assert!(log.is_empty());
    }
}
