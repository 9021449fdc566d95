use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenerationKind {
    Intro,
    Summary,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Intro => "introduction",
            Self::Summary => "summary",
        };
        write!(f, "{repr}")
    }
}

#[derive(Debug, PartialEq)]
pub enum UserRequest {
    Append(String),
    Generate(GenerationKind),
    ClearSummary,
    Save,
    Load,
    Clear,
    Theme,
    Preview,
    Help,
    Unknown(String),
    Quit,
}

impl UserRequest {
    /// Lines starting with `:` are commands. Everything else is markdown.
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Self::Append(line.to_string());
        };
        match command.trim() {
            "intro" => Self::Generate(GenerationKind::Intro),
            "summary" => Self::Generate(GenerationKind::Summary),
            "clear-summary" => Self::ClearSummary,
            "save" => Self::Save,
            "load" => Self::Load,
            "clear" => Self::Clear,
            "theme" => Self::Theme,
            "preview" | "p" => Self::Preview,
            "help" | "h" => Self::Help,
            "quit" | "q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum ServerRequest {
    Generate(GenerationKind, String),
}

pub enum ServerResponse {
    Generated(GenerationKind, String),
    Error(GenerationKind, String),
}
