#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    IsReady,
    Options,
    Position(Vec<String>),
    SetOption(Vec<String>),
    Go,
    Eval,
    Display,
    Move(Option<String>),
    SelfPlay(Vec<String>),
    Debug(Option<String>),
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "isready" => Command::IsReady,
        "options" => Command::Options,
        "position" => Command::Position(owned_parts()),
        "setoption" => Command::SetOption(owned_parts()),
        "go" => Command::Go,
        "eval" => Command::Eval,
        "d" | "display" => Command::Display,
        "move" => Command::Move(parts.get(1).map(|v| (*v).to_string())),
        "selfplay" => Command::SelfPlay(owned_parts()),
        "debug" => Command::Debug(parts.get(1).map(|v| (*v).to_string())),
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn position_keeps_all_parts() {
        let cmd = parse_command("position 2,2/.,4");
        assert_eq!(
            cmd,
            Some(Command::Position(vec![
                "position".to_string(),
                "2,2/.,4".to_string()
            ]))
        );
    }

    #[test]
    fn move_takes_one_argument() {
        assert_eq!(
            parse_command("move left"),
            Some(Command::Move(Some("left".to_string())))
        );
        assert_eq!(parse_command("move"), Some(Command::Move(None)));
    }

    #[test]
    fn unknown_command_is_preserved() {
        assert_eq!(
            parse_command("jump high"),
            Some(Command::Unknown("jump high".to_string()))
        );
    }
}
