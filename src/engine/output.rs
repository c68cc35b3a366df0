use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputBlock {
    Text(String),
    Exits(String),
}

/// Everything one command wants to show the player, in order.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Exits block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// Plain-text lines, exits included. Handy for tests and logs.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Text(s) | OutputBlock::Exits(s) => s.as_str(),
            })
            .collect()
    }
}

/// Write the blocks out as the console transcript.
pub fn flush_output<W: Write>(out: Output, w: &mut W) -> io::Result<()> {
    for block in out.blocks {
        match block {
            OutputBlock::Text(line) => writeln!(w, "{}", line)?,
            OutputBlock::Exits(exits) => writeln!(w, "{}", exits)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_dropped() {
        let mut out = Output::new();
        out.say("   ");
        out.say("");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn test_exits_replaced_and_kept_last() {
        let mut out = Output::new();
        out.set_exits("Exits: back");
        out.say("Hall");
        out.set_exits("Exits: forward");
        assert_eq!(out.lines(), vec!["Hall", "Exits: forward"]);
    }

    #[test]
    fn test_flush_writes_one_line_per_block() {
        let mut out = Output::new();
        out.say("Hall");
        out.say("Items: key");
        out.set_exits("Exits: (none)");

        let mut buf: Vec<u8> = Vec::new();
        flush_output(out, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Hall\nItems: key\nExits: (none)\n"
        );
    }
}
