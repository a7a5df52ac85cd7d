//! Metro line types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

/// A metro line.
///
/// The set of lines is closed: every line the network knows about is a
/// variant here, so matching on a `Line` is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Line {
    Blue,
    Yellow,
    Red,
    Pink,
    Magenta,
    Violet,
}

impl Line {
    /// Every line, in declaration order.
    pub const ALL: [Line; 6] = [
        Line::Blue,
        Line::Yellow,
        Line::Red,
        Line::Pink,
        Line::Magenta,
        Line::Violet,
    ];

    /// Returns the line name as used in station labels.
    pub fn name(self) -> &'static str {
        match self {
            Line::Blue => "Blue",
            Line::Yellow => "Yellow",
            Line::Red => "Red",
            Line::Pink => "Pink",
            Line::Magenta => "Magenta",
            Line::Violet => "Violet",
        }
    }

    /// Returns the display color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Line::Blue => "#4169E1",
            Line::Yellow => "#FFDF00",
            Line::Red => "#FF4040",
            Line::Pink => "#FC8EAC",
            Line::Magenta => "#CC338B",
            Line::Violet => "#8b5cf6",
        }
    }
}

impl FromStr for Line {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Line::ALL
            .into_iter()
            .find(|line| line.name() == s)
            .ok_or_else(|| DomainError::UnknownLine(s.to_string()))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The lines serving a station.
///
/// Always non-empty, with no repeats. Order is significant: the first line
/// is the station's primary line, which direction finding falls back to.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::{Line, Lines};
///
/// let lines = Lines::parse("Blue/Yellow").unwrap();
/// assert_eq!(lines.first(), Line::Blue);
/// assert!(lines.contains(Line::Yellow));
/// assert_eq!(lines.to_string(), "Blue/Yellow");
///
/// assert!(Lines::parse("").is_err());
/// assert!(Lines::parse("Orange").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Lines(Vec<Line>);

impl Lines {
    /// Build a line set from a primary line and any further lines.
    ///
    /// Repeats are dropped, keeping the first occurrence.
    pub fn of(first: Line, rest: &[Line]) -> Self {
        let mut lines = vec![first];
        for &line in rest {
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
        Lines(lines)
    }

    /// Parse a slash-separated label such as `"Red/Yellow/Violet"`.
    ///
    /// Tokens are trimmed. Empty tokens and unknown line names are rejected.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        let mut lines: Vec<Line> = Vec::new();

        for token in label.split('/') {
            let token = token.trim();
            if token.is_empty() {
                return Err(DomainError::EmptyLines(label.to_string()));
            }
            let line: Line = token.parse()?;
            if !lines.contains(&line) {
                lines.push(line);
            }
        }

        Ok(Lines(lines))
    }

    /// Returns the primary line.
    pub fn first(&self) -> Line {
        self.0[0]
    }

    /// Check whether the set contains a line.
    pub fn contains(&self, line: Line) -> bool {
        self.0.contains(&line)
    }

    /// Returns the first line in this set that also appears in `other`.
    pub fn first_shared_with(&self, other: &Lines) -> Option<Line> {
        self.iter().find(|&line| other.contains(line))
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Line] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false for any parsed label, which holds at least one line.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(line.name())?;
        }
        Ok(())
    }
}
