//! Input-line parsing: verb recognition and argument splitting.
//!
//! A line is normalized by title-casing, then matched against the verb
//! prefixes in a fixed priority order; the first prefix match wins. The
//! tokens of the remainder become the arguments, so free-text names come
//! out title-cased and match the keys stored by `add`.

/// The command selected by a parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Delete,
    Search,
    DaysToBirthday,
    Birthday,
    Save,
    Help,
    Unknown,
}

/// Verb prefixes in match priority order.
///
/// A trailing space means the verb only matches when argument text follows
/// it, so a bare `add` stays unrecognized while `hello` matches on its own.
const VERB_TABLE: [(&str, Verb); 11] = [
    ("Hello", Verb::Hello),
    ("Add ", Verb::Add),
    ("Change ", Verb::Change),
    ("Phone ", Verb::Phone),
    ("Show All", Verb::ShowAll),
    ("Delete ", Verb::Delete),
    ("Search ", Verb::Search),
    ("Days To Birthday ", Verb::DaysToBirthday),
    ("Birthday ", Verb::Birthday),
    ("Save", Verb::Save),
    ("Help", Verb::Help),
];

/// One parsed input line: the selected verb and its argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: Verb,
    pub args: Vec<String>,
}

/// Parse one input line into a verb and its arguments.
///
/// Unrecognized input yields [`Verb::Unknown`] with no arguments.
pub fn parse(line: &str) -> ParsedCommand {
    let normalized = title_case(line);

    for (prefix, verb) in VERB_TABLE {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            let args = rest.split_whitespace().map(str::to_string).collect();
            return ParsedCommand { verb, args };
        }
    }

    ParsedCommand {
        verb: Verb::Unknown,
        args: Vec::new(),
    }
}

/// Title-case `input`: uppercase each letter that follows a non-letter,
/// lowercase every other letter, leave non-letters untouched.
fn title_case(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len());
    let mut prev_is_alpha = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                normalized.extend(ch.to_lowercase());
            } else {
                normalized.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            normalized.push(ch);
            prev_is_alpha = false;
        }
    }

    normalized
}
