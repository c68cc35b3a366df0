//! Turning a raw input line into a command.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Move(String),
    PickUp(String),
    /// `pick` without the `up ` prefix.
    PickUsage,
    Inventory,
    Help,
    Quit,
    Unknown,
}

impl Command {
    /// Trim and lowercase `line`, then split it once on the first space into
    /// a command word and an argument. The argument is kept as-is after that
    /// space, so `"move  forward"` asks for the direction `" forward"`.
    pub fn parse(line: &str) -> Command {
        let normalized = line.trim().to_lowercase();
        let (command, argument) = split_command(&normalized);

        match command {
            "look" => Command::Look,
            "move" => Command::Move(argument.to_string()),
            "pick" => match argument.strip_prefix("up ") {
                Some(name) => Command::PickUp(name.to_string()),
                None => Command::PickUsage,
            },
            "inventory" => Command::Inventory,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

/// `(command, argument)`; the argument is empty when there is no space.
pub fn split_command(line: &str) -> (&str, &str) {
    line.split_once(' ').unwrap_or((line, ""))
}
