//! Map Name Value Object
//!
//! A validated map identifier. It is embedded in generated file names and in
//! the texture path inside description files, so it must be a single plain
//! path segment.

use std::fmt;

/// Error when map name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapNameError {
    /// Name is empty (after trimming)
    Empty,
    /// Name contains a character outside `[A-Za-z0-9_-]`
    InvalidChar(char),
}

impl fmt::Display for MapNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapNameError::Empty => write!(f, "map name cannot be empty"),
            MapNameError::InvalidChar(c) => write!(
                f,
                "contains '{}' (only letters, digits, '_' and '-' are allowed)",
                c
            ),
        }
    }
}

impl std::error::Error for MapNameError {}

/// A validated map identifier (e.g. `kz_jakke`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapName(String);

impl MapName {
    /// Parse user input into a map name. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, MapNameError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(MapNameError::Empty);
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(MapNameError::InvalidChar(c));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MapName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for MapName {
    type Err = MapNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
