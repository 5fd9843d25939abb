/// What one line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw tag text, passed through untouched (may be empty).
    Submit(String),
    /// Re-run history entry by 0-based index.
    Select(usize),
    ShowHistory,
    Help,
    Quit,
}

pub const HELP: &str = "Type a tag and press Enter to search. \
Commands: :h history, :N rerun history entry N, :? help, :q quit";

/// Lines starting with `:` are commands; everything else is a tag.
pub fn parse_command(line: &str) -> Command {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let Some(command) = line.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };
    match command.trim() {
        "q" | "quit" => Command::Quit,
        "h" | "history" => Command::ShowHistory,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Select(n - 1),
            _ => Command::Help,
        },
    }
}
