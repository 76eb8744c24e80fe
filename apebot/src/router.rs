//! Decides what an inbound text message is: a command, a launch attempt, or nothing for us.

use launch_client::SEPARATOR;

/// Where a text message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/start`: welcome text.
    Start,
    /// `/launch`: format instructions.
    Usage,
    /// Text containing `|`: parse and launch.
    Launch(&'a str),
    /// Anything else, including unknown commands and commands for other bots. No reply.
    Ignore,
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits the leading run of command characters off `s`.
fn take_word(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_command_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Routes trimmed text.
///
/// A command is `/` followed by `[A-Za-z0-9_]+`, optionally `@username`; anything after it is ignored,
/// so `/launch|A|B|1` is `/launch`. A command addressed to another bot is ignored. Usernames compare
/// case-insensitively; with `bot_username` unknown, any `@username` is accepted.
pub fn route<'a>(text: &'a str, bot_username: Option<&str>) -> Route<'a> {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix('/') {
        let (command, rest) = take_word(rest);
        if let Some(mention) = rest.strip_prefix('@') {
            let (target, _) = take_word(mention);
            if let Some(own) = bot_username {
                if !target.is_empty() && !target.eq_ignore_ascii_case(own) {
                    return Route::Ignore;
                }
            }
        }
        return match command {
            "start" => Route::Start,
            "launch" => Route::Usage,
            _ => Route::Ignore,
        };
    }

    if text.contains(SEPARATOR) {
        Route::Launch(text)
    } else {
        Route::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: Option<&str> = Some("ApeCityBot");

    #[test]
    fn test_commands() {
        assert_eq!(route("/start", ME), Route::Start);
        assert_eq!(route("/start@ApeCityBot", ME), Route::Start);
        assert_eq!(route("/start@apecitybot", ME), Route::Start);
        assert_eq!(route("  /start extra words", ME), Route::Start);
        assert_eq!(route("/launch", ME), Route::Usage);
        assert_eq!(route("/launch@ApeCityBot now", ME), Route::Usage);
    }

    #[test]
    fn test_command_ends_at_non_word_char() {
        assert_eq!(route("/launch|A|B|1", ME), Route::Usage);
        assert_eq!(route("/start-now", ME), Route::Start);
        assert_eq!(route("/launchpad", ME), Route::Ignore);
    }

    #[test]
    fn test_command_for_other_bot_ignored() {
        assert_eq!(route("/start@OtherBot", ME), Route::Ignore);
        assert_eq!(route("/launch@OtherBot", ME), Route::Ignore);
    }

    #[test]
    fn test_unknown_username_accepts_any_mention() {
        assert_eq!(route("/start@OtherBot", None), Route::Start);
        assert_eq!(route("/launch", None), Route::Usage);
    }

    #[test]
    fn test_unknown_command_ignored() {
        assert_eq!(route("/help", ME), Route::Ignore);
        assert_eq!(route("/buy A|B|1", ME), Route::Ignore);
        assert_eq!(route("/", ME), Route::Ignore);
    }

    #[test]
    fn test_launch_text() {
        assert_eq!(route(" MyCoin|MYC|100 ", ME), Route::Launch("MyCoin|MYC|100"));
        assert_eq!(route("MyCoin|MYC", ME), Route::Launch("MyCoin|MYC"));
    }

    #[test]
    fn test_plain_text_ignored() {
        assert_eq!(route("hello", ME), Route::Ignore);
        assert_eq!(route("", ME), Route::Ignore);
    }
}
