//! Named user actions and their text form.
//!
//! A line is split into words on whitespace. Double quotes group words
//! (`add "my file.pdf"`), and inside quotes `\"` and `\\` escape a quote
//! and a backslash. Positions are 1-based in the text form and 0-based in
//! [`Action`].

use std::path::PathBuf;

/// One user operation against a [`Session`](super::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append files, directories or glob patterns to the list.
    Add(Vec<String>),
    /// Remove the entries at the given positions.
    Remove(Vec<usize>),
    /// Move one entry to a new position.
    Move { from: usize, to: usize },
    /// Exchange two entries.
    Swap { a: usize, b: usize },
    /// Show the list.
    List,
    /// Empty the list.
    Clear,
    /// Set or clear the title.
    Title(Option<String>),
    /// Set or clear the author.
    Author(Option<String>),
    /// Merge the list into a file. `None` means no destination was chosen.
    Merge(Option<PathBuf>),
    Help,
    Quit,
}

/// Commands accepted by [`Action::parse`], with a usage line each.
pub const COMMANDS: &[(&str, &str)] = &[
    ("add <file|dir|glob>...", "append files to the list"),
    ("remove <n>...", "remove the files at positions n"),
    ("move <from> <to>", "move a file to another position"),
    ("swap <a> <b>", "exchange two files"),
    ("list", "show the files in merge order"),
    ("clear", "remove every file"),
    ("title [text]", "set the title, or clear it"),
    ("author [text]", "set the author, or clear it"),
    ("merge [output]", "merge the files into output"),
    ("help", "show this help"),
    ("quit", "leave"),
];

/// A line that does not form a valid action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unexpected argument '{value}' for '{command}'")]
    UnexpectedArgument { command: &'static str, value: String },

    #[error("'{0}' is not a position (positions start at 1)")]
    InvalidPosition(String),
}

impl Action {
    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let words = split_words(line)?;
        let Some((command, args)) = words.split_first() else {
            return Ok(None);
        };
        if command.starts_with('#') {
            return Ok(None);
        }

        let action = match command.to_ascii_lowercase().as_str() {
            "add" | "a" => {
                if args.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "add",
                        argument: "at least one file",
                    });
                }
                Self::Add(args.to_vec())
            }
            "remove" | "rm" => {
                if args.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "remove",
                        argument: "at least one position",
                    });
                }
                Self::Remove(
                    args.iter()
                        .map(|arg| position(arg))
                        .collect::<Result<_, _>>()?,
                )
            }
            "move" | "mv" => {
                let (from, to) = two_positions("move", args)?;
                Self::Move { from, to }
            }
            "swap" => {
                let (a, b) = two_positions("swap", args)?;
                Self::Swap { a, b }
            }
            "list" | "ls" => {
                no_arguments("list", args)?;
                Self::List
            }
            "clear" => {
                no_arguments("clear", args)?;
                Self::Clear
            }
            "title" => Self::Title(rest_of_line(args)),
            "author" => Self::Author(rest_of_line(args)),
            "merge" | "save" => match args {
                [] => Self::Merge(None),
                [output] => Self::Merge(Some(PathBuf::from(output))),
                [_, extra, ..] => {
                    return Err(ParseError::UnexpectedArgument {
                        command: "merge",
                        value: extra.clone(),
                    });
                }
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ParseError::UnknownCommand(command.clone())),
        };

        Ok(Some(action))
    }
}

fn split_words(line: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let word = current.get_or_insert_with(String::new);
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped @ ('"' | '\\')) => word.push(escaped),
                            Some(other) => {
                                word.push('\\');
                                word.push(other);
                            }
                            None => return Err(ParseError::UnterminatedQuote),
                        },
                        Some(other) => word.push(other),
                        None => return Err(ParseError::UnterminatedQuote),
                    }
                }
            }
            c if c.is_whitespace() => {
                if let Some(word) = current.take() {
                    words.push(word);
                }
            }
            c => current.get_or_insert_with(String::new).push(c),
        }
    }

    if let Some(word) = current {
        words.push(word);
    }
    Ok(words)
}

/// Parse a 1-based position into a 0-based index.
fn position(arg: &str) -> Result<usize, ParseError> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidPosition(arg.to_string())),
    }
}

fn two_positions(command: &'static str, args: &[String]) -> Result<(usize, usize), ParseError> {
    match args {
        [first, second] => Ok((position(first)?, position(second)?)),
        [_, _, extra, ..] => Err(ParseError::UnexpectedArgument {
            command,
            value: extra.clone(),
        }),
        _ => Err(ParseError::MissingArgument {
            command,
            argument: "two positions",
        }),
    }
}

fn no_arguments(command: &'static str, args: &[String]) -> Result<(), ParseError> {
    match args.first() {
        Some(value) => Err(ParseError::UnexpectedArgument {
            command,
            value: value.clone(),
        }),
        None => Ok(()),
    }
}

fn rest_of_line(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}
