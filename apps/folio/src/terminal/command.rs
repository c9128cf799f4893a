//! Command grammar for the terminal session.
//!
//! Dispatch is a tagged enum rather than a string-keyed handler table, so
//! unknown-command handling and exhaustiveness are checked at compile time.

/// A parsed terminal command. Input is trimmed and lower-cased before
/// matching, so parsing is case-insensitive throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Contact,
    Hack,
    Clear,
    Exit,
    /// `ask <question>`. The question may be empty (bare `ask` or `ask `
    /// with nothing after it), which the dispatcher answers with usage.
    Ask(String),
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let normalized = input.trim().to_lowercase();

        if let Some(rest) = normalized.strip_prefix("ask ") {
            return Command::Ask(rest.trim().to_string());
        }

        match normalized.as_str() {
            "help" => Command::Help,
            "about" => Command::About,
            "skills" => Command::Skills,
            "contact" => Command::Contact,
            "hack" => Command::Hack,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            "ask" => Command::Ask(String::new()),
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_commands_parse() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("about"), Command::About);
        assert_eq!(Command::parse("skills"), Command::Skills);
        assert_eq!(Command::parse("contact"), Command::Contact);
        assert_eq!(Command::parse("hack"), Command::Hack);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("exit"), Command::Exit);
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("Clear"), Command::Clear);
        assert_eq!(
            Command::parse("ASK Who Are You"),
            Command::Ask("who are you".to_string())
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(Command::parse("  exit  "), Command::Exit);
        assert_eq!(Command::parse("\thack\n"), Command::Hack);
    }

    #[test]
    fn test_ask_captures_the_question() {
        assert_eq!(
            Command::parse("ask who are you"),
            Command::Ask("who are you".to_string())
        );
    }

    #[test]
    fn test_ask_with_no_question_is_empty_ask() {
        assert_eq!(Command::parse("ask"), Command::Ask(String::new()));
        assert_eq!(Command::parse("ask   "), Command::Ask(String::new()));
    }

    #[test]
    fn test_unknown_commands_keep_their_name() {
        assert_eq!(
            Command::parse("sudo rm -rf /"),
            Command::Unknown("sudo rm -rf /".to_string())
        );
        // Prefix of a real command is still unknown
        assert_eq!(Command::parse("hel"), Command::Unknown("hel".to_string()));
        assert_eq!(
            Command::parse("askwho"),
            Command::Unknown("askwho".to_string())
        );
    }
}
