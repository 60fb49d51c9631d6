//! Console commands
//!
//! Token 0 of a committed line selects one of a fixed set of commands by
//! whole-token equality. Anything else is not a command and is ignored.

/// Commands understood by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Info,
    Upcase,
    Downcase,
    Titlize,
    Template,
    Search,
    Shutdown,
    Clear,
    Tests,
}

impl Command {
    /// Every command, in the order the banner lists them
    pub const ALL: [Command; 9] = [
        Command::Info,
        Command::Upcase,
        Command::Downcase,
        Command::Titlize,
        Command::Template,
        Command::Search,
        Command::Clear,
        Command::Tests,
        Command::Shutdown,
    ];

    /// Looks up a command by its name
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == token)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Info => "info",
            Command::Upcase => "upcase",
            Command::Downcase => "downcase",
            Command::Titlize => "titlize",
            Command::Template => "template",
            Command::Search => "search",
            Command::Shutdown => "shutdown",
            Command::Clear => "clear",
            Command::Tests => "tests",
        }
    }
}

/// Built-in fixture groups run by `tests <suite>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestSuite {
    Base,
    Search,
}

impl TestSuite {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "base" => Some(TestSuite::Base),
            "search" => Some(TestSuite::Search),
            _ => None,
        }
    }
}

/// What the host should do after a key has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    /// `shutdown` was entered; the platform should power off
    Shutdown,
}

impl DispatchOutcome {
    pub fn is_shutdown(&self) -> bool {
        *self == DispatchOutcome::Shutdown
    }
}
