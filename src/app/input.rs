//! Parsing of prompt lines into editor actions.
//!
//! Plain text is a command submission; a leading `/` selects one of the
//! slash commands below.

/// Canonical definition of a slash command for help output.
#[derive(Debug, Clone)]
pub struct SlashCommandInfo {
    pub command: &'static str,
    pub description: &'static str,
}

pub const SLASH_COMMANDS: &[SlashCommandInfo] = &[
    SlashCommandInfo {
        command: "/undo",
        description: "Reset the page and drop the latest edit",
    },
    SlashCommandInfo {
        command: "/redo",
        description: "Not available",
    },
    SlashCommandInfo {
        command: "/quick",
        description: "List quick commands, or run one (e.g., /quick 2)",
    },
    SlashCommandInfo {
        command: "/preview",
        description: "Show the live website preview",
    },
    SlashCommandInfo {
        command: "/workflow",
        description: "Show the agent stages of the latest command",
    },
    SlashCommandInfo {
        command: "/history",
        description: "Show the edit history",
    },
    SlashCommandInfo {
        command: "/commands",
        description: "Show submitted commands",
    },
    SlashCommandInfo {
        command: "/status",
        description: "Show every panel",
    },
    SlashCommandInfo {
        command: "/help",
        description: "Show this help",
    },
    SlashCommandInfo {
        command: "/quit",
        description: "Exit once the current command finishes",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    Submit(String),
    Undo,
    Redo,
    /// `None` lists quick commands; `Some(n)` runs the n-th (1-based).
    Quick(Option<usize>),
    Preview,
    Workflow,
    History,
    Commands,
    Status,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_input(line: &str) -> EditorInput {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return EditorInput::Submit(line.to_string());
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();
    let extra = parts.next();

    match (command.as_str(), arg, extra) {
        ("/undo", None, None) => EditorInput::Undo,
        ("/redo", None, None) => EditorInput::Redo,
        ("/quick", None, None) => EditorInput::Quick(None),
        ("/quick", Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => EditorInput::Quick(Some(n)),
            _ => EditorInput::Unknown(trimmed.to_string()),
        },
        ("/preview", None, None) => EditorInput::Preview,
        ("/workflow", None, None) => EditorInput::Workflow,
        ("/history", None, None) => EditorInput::History,
        ("/commands", None, None) => EditorInput::Commands,
        ("/status", None, None) => EditorInput::Status,
        ("/help", None, None) => EditorInput::Help,
        ("/quit", None, None) | ("/exit", None, None) => EditorInput::Quit,
        _ => EditorInput::Unknown(trimmed.to_string()),
    }
}

pub fn help_text() -> String {
    let width = SLASH_COMMANDS
        .iter()
        .map(|c| c.command.len())
        .max()
        .unwrap_or(0);
    let mut out = String::from("Type a command in plain English, or:\n");
    for info in SLASH_COMMANDS {
        out.push_str(&format!(
            "  {:width$}  {}\n",
            info.command,
            info.description,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_submitted_verbatim() {
        assert_eq!(
            parse_input("make the header blue"),
            EditorInput::Submit("make the header blue".to_string())
        );
        // Blank lines are passed through; the session rejects them.
        assert_eq!(parse_input("   "), EditorInput::Submit("   ".to_string()));
    }

    #[test]
    fn slash_commands_parse() {
        assert_eq!(parse_input("/undo"), EditorInput::Undo);
        assert_eq!(parse_input(" /REDO "), EditorInput::Redo);
        assert_eq!(parse_input("/quick"), EditorInput::Quick(None));
        assert_eq!(parse_input("/quick 3"), EditorInput::Quick(Some(3)));
        assert_eq!(parse_input("/exit"), EditorInput::Quit);
        assert_eq!(parse_input("/status"), EditorInput::Status);
    }

    #[test]
    fn bad_arguments_are_unknown() {
        assert_eq!(
            parse_input("/quick 0"),
            EditorInput::Unknown("/quick 0".to_string())
        );
        assert_eq!(
            parse_input("/quick two"),
            EditorInput::Unknown("/quick two".to_string())
        );
        assert_eq!(
            parse_input("/undo now"),
            EditorInput::Unknown("/undo now".to_string())
        );
        assert_eq!(
            parse_input("/frobnicate"),
            EditorInput::Unknown("/frobnicate".to_string())
        );
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text();
        for info in SLASH_COMMANDS {
            assert!(help.contains(info.command));
        }
    }
}
