/// One line typed at the booking prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Date(String),
    Slots,
    Select(i64),
    Book,
    Auth,
    History,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Command::Empty;
        };
        let arg = parts.next();

        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("date", Some(date)) => Command::Date(date.to_string()),
            ("slots" | "refresh", _) => Command::Slots,
            ("select", Some(id)) => match id.parse() {
                Ok(id) => Command::Select(id),
                Err(_) => Command::Unknown(line.trim().to_string()),
            },
            ("book", _) => Command::Book,
            ("auth" | "login" | "logout", _) => Command::Auth,
            ("history" | "bookings", _) => Command::History,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", _) => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  date <YYYY-MM-DD>   show slots for another date
  slots               reload slots for the current date
  select <id>         pick an available slot
  book                fill in patient details and book the selected slot
  auth                login / register, or logout when logged in
  history             list your bookings
  help                show this text
  quit                exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("date 2024-01-01"), Command::Date("2024-01-01".to_string()));
        assert_eq!(Command::parse("  select 3 "), Command::Select(3));
        assert_eq!(Command::parse("LOGOUT"), Command::Auth);
        assert_eq!(Command::parse("history"), Command::History);
        assert_eq!(Command::parse(""), Command::Empty);
    }

    #[test]
    fn test_parse_bad_arguments() {
        assert_eq!(Command::parse("select nine"), Command::Unknown("select nine".to_string()));
        assert_eq!(Command::parse("date"), Command::Unknown("date".to_string()));
    }
}
