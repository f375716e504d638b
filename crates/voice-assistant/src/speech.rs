//! Boundary with the speech components: ranked transcription hypotheses in,
//! sentences out.

use std::io::{self, Write};

/// Split one input line into ranked hypotheses, best first.
pub fn split_hypotheses(line: &str, separator: &str, max: usize) -> Vec<String> {
    line.split(separator)
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}

/// Renders feedback for the player.
pub trait Speaker {
    fn say(&mut self, text: &str) -> io::Result<()>;
}

/// Speaks by printing one sentence per line.
pub struct ConsoleSpeaker<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

/// Keeps everything said, for tests and transcripts.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    pub spoken: Vec<String>,
}

impl Speaker for RecordingSpeaker {
    fn say(&mut self, text: &str) -> io::Result<()> {
        self.spoken.push(text.to_string());
        Ok(())
    }
}
