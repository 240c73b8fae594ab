use skiphire_core::{Location, Msg};

pub const HELP: &str = "\
Commands:
  select <id>               pick a skip and open the confirmation
  continue                  confirm the selected skip and move on
  back                      clear the selection
  close                     close the confirmation, keep the selection
  retry                     reload skips after an error
  postcode <code> [area]    look up skips for another location
  help                      show this list
  quit                      leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Invalid(String),
    Empty,
}

/// Turns one line of user input into a command.
pub fn parse(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Empty;
    };

    match head.to_ascii_lowercase().as_str() {
        "select" | "s" => match words.next().map(str::parse::<u64>) {
            Some(Ok(id)) => Command::Dispatch(Msg::OfferSelected(id)),
            _ => Command::Invalid("usage: select <id>".to_string()),
        },
        "continue" | "c" => Command::Dispatch(Msg::ContinueClicked),
        "back" | "b" => Command::Dispatch(Msg::BackClicked),
        "close" => Command::Dispatch(Msg::ConfirmationDismissed),
        "retry" | "r" => Command::Dispatch(Msg::RetryClicked),
        "postcode" | "p" => {
            let postcode = words.next().unwrap_or_default();
            let area = words.collect::<Vec<_>>().join(" ");
            match Location::new(postcode, Some(&area)) {
                Ok(location) => Command::Dispatch(Msg::LocationSubmitted(location)),
                Err(err) => Command::Invalid(err.to_string()),
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command {other:?}; type help")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wizard_actions() {
        assert_eq!(parse("select 17933"), Command::Dispatch(Msg::OfferSelected(17933)));
        assert_eq!(parse("  CONTINUE "), Command::Dispatch(Msg::ContinueClicked));
        assert_eq!(parse("b"), Command::Dispatch(Msg::BackClicked));
        assert_eq!(parse("close"), Command::Dispatch(Msg::ConfirmationDismissed));
        assert_eq!(parse("retry"), Command::Dispatch(Msg::RetryClicked));
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("   "), Command::Empty);
    }

    #[test]
    fn postcode_takes_multi_word_area() {
        assert_eq!(
            parse("postcode NR32 Great Yarmouth"),
            Command::Dispatch(Msg::LocationSubmitted(
                Location::new("NR32", Some("Great Yarmouth")).unwrap()
            ))
        );
        assert_eq!(
            parse("p LE10"),
            Command::Dispatch(Msg::LocationSubmitted(Location::new("LE10", None).unwrap()))
        );
        assert!(matches!(parse("postcode"), Command::Invalid(_)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse("select"), Command::Invalid(_)));
        assert!(matches!(parse("select four"), Command::Invalid(_)));
        assert!(matches!(parse("dance"), Command::Invalid(_)));
    }
}
