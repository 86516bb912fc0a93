//! Minimal reader for Valve's KeyValues text format
//!
//! Enough to read `steamapps/libraryfolders.vdf`: quoted keys and values,
//! nested `{ }` blocks, `//` line comments and backslash escapes.

use std::path::PathBuf;

use thiserror::Error;

/// A KeyValues node value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Block(Vec<(String, Value)>),
}

impl Value {
    /// First child value under `key` (case-insensitive, like Steam)
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Block(entries) => entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Block(_) => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VdfError {
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),

    #[error("unexpected '{found}' at byte {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("'{0}' where a key was expected")]
    StrayBrace(char),

    #[error("key \"{0}\" has no value")]
    MissingValue(String),

    #[error("unclosed block")]
    UnclosedBlock,
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Str(String),
    Open,
    Close,
}

fn tokenize(input: &str) -> Result<Vec<Token>, VdfError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '{' => tokens.push(Token::Open),
            '}' => tokens.push(Token::Close),
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '"' => {
                let mut value = String::new();
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some((_, 'n')) => value.push('\n'),
                            Some((_, 't')) => value.push('\t'),
                            Some((_, other)) => value.push(other),
                            None => break,
                        },
                        c => value.push(c),
                    }
                }
                if !closed {
                    return Err(VdfError::UnterminatedString(offset));
                }
                tokens.push(Token::Str(value));
            }
            // Conditional tags like [$WIN32] are not used in library files
            found => return Err(VdfError::Unexpected { found, offset }),
        }
    }

    Ok(tokens)
}

/// Parse a KeyValues document into its top-level entries
pub fn parse(input: &str) -> Result<Vec<(String, Value)>, VdfError> {
    let tokens = tokenize(input)?;
    let mut iter = tokens.into_iter();
    let entries = parse_entries(&mut iter, false)?;
    Ok(entries)
}

fn parse_entries(
    tokens: &mut impl Iterator<Item = Token>,
    nested: bool,
) -> Result<Vec<(String, Value)>, VdfError> {
    let mut entries = Vec::new();

    loop {
        let key = match tokens.next() {
            Some(Token::Str(key)) => key,
            Some(Token::Close) if nested => return Ok(entries),
            Some(Token::Close) => return Err(VdfError::StrayBrace('}')),
            Some(Token::Open) => return Err(VdfError::StrayBrace('{')),
            None if nested => return Err(VdfError::UnclosedBlock),
            None => return Ok(entries),
        };

        let value = match tokens.next() {
            Some(Token::Str(value)) => Value::Str(value),
            Some(Token::Open) => Value::Block(parse_entries(tokens, true)?),
            Some(Token::Close) | None => return Err(VdfError::MissingValue(key)),
        };

        entries.push((key, value));
    }
}

/// One Steam library folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFolder {
    pub path: PathBuf,
    /// App ids installed in this library
    pub apps: Vec<String>,
}

impl LibraryFolder {
    pub fn has_app(&self, app_id: &str) -> bool {
        self.apps.iter().any(|a| a == app_id)
    }
}

/// Library folders listed in `libraryfolders.vdf`
///
/// Handles both the current layout (numbered blocks with `"path"` and
/// `"apps"`) and the legacy one where numbered keys map directly to paths.
pub fn parse_library_folders(input: &str) -> Result<Vec<LibraryFolder>, VdfError> {
    let document = parse(input)?;
    let Some((_, Value::Block(root))) = document.into_iter().next() else {
        return Ok(Vec::new());
    };

    let folders = root
        .iter()
        .filter(|(key, _)| key.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|(_, value)| match value {
            Value::Str(path) => Some(LibraryFolder {
                path: PathBuf::from(path),
                apps: Vec::new(),
            }),
            Value::Block(_) => {
                let path = value.get("path")?.as_str()?;
                let apps = match value.get("apps") {
                    Some(Value::Block(apps)) => apps.iter().map(|(id, _)| id.clone()).collect(),
                    _ => Vec::new(),
                };
                Some(LibraryFolder {
                    path: PathBuf::from(path),
                    apps,
                })
            }
        })
        .collect();

    Ok(folders)
}
