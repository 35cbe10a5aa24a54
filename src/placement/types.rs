//! Core value types for placement resolution

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::geometry::Axis;

use super::lexer::{lex, Token};

/// Which side of the reference the popper sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Top | Direction::Bottom => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Whether the popper sits before the reference on its axis
    ///
    /// The arrow then rests against the popper's far edge.
    pub fn is_before(self) -> bool {
        matches!(self, Direction::Top | Direction::Left)
    }

    pub fn initial(self) -> char {
        match self {
            Direction::Top => 't',
            Direction::Bottom => 'b',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Bottom => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub(crate) fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Top => Some(Direction::Top),
            Token::Bottom => Some(Direction::Bottom),
            Token::Left => Some(Direction::Left),
            Token::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        single_token(input)
            .and_then(Direction::from_token)
            .ok_or_else(|| ConfigError::invalid_position(input, "expected a direction"))
    }
}

/// Cross-axis alignment of the popper against the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Start,
    #[default]
    Middle,
    End,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Start, Alignment::Middle, Alignment::End];

    pub fn initial(self) -> char {
        match self {
            Alignment::Start => 's',
            Alignment::Middle => 'm',
            Alignment::End => 'e',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Middle => "middle",
            Alignment::End => "end",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Alignment::Start => 0,
            Alignment::Middle => 1,
            Alignment::End => 2,
        }
    }

    pub(crate) fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Start => Some(Alignment::Start),
            Token::Middle => Some(Alignment::Middle),
            Token::End => Some(Alignment::End),
            _ => None,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        single_token(input)
            .and_then(Alignment::from_token)
            .ok_or_else(|| ConfigError::invalid_position(input, "expected an alignment"))
    }
}

/// The only token in `input`, if it lexes to exactly one
fn single_token(input: &str) -> Option<Token> {
    match lex(input).ok()?.as_slice() {
        [(token, _)] => Some(*token),
        _ => None,
    }
}

/// A direction paired with an alignment, e.g. `bottom-start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub direction: Direction,
    pub alignment: Alignment,
}

impl Position {
    pub fn new(direction: Direction, alignment: Alignment) -> Self {
        Self {
            direction,
            alignment,
        }
    }

    /// Two-letter code: direction initial followed by alignment initial
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.direction.initial());
        code.push(self.alignment.initial());
        code
    }

    /// Every direction/alignment combination, direction-major
    pub fn all() -> impl Iterator<Item = Position> {
        Direction::ALL
            .into_iter()
            .flat_map(|d| Alignment::ALL.into_iter().map(move |a| Position::new(d, a)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Direction::Bottom, Alignment::Start)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.direction, self.alignment)
    }
}

impl FromStr for Position {
    type Err = ConfigError;

    /// Parse `direction[-alignment]`; alignment defaults to middle
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = lex(input).map_err(|span| {
            ConfigError::invalid_position(
                input,
                format!("unexpected character at offset {}", span.start),
            )
        })?;

        let mut iter = tokens.into_iter().map(|(t, _)| t);
        let direction = iter
            .next()
            .and_then(Direction::from_token)
            .ok_or_else(|| ConfigError::invalid_position(input, "expected a direction"))?;

        let alignment = match iter.next() {
            None => Alignment::Middle,
            Some(Token::Dash) => iter
                .next()
                .and_then(Alignment::from_token)
                .ok_or_else(|| {
                    ConfigError::invalid_position(input, "expected an alignment after '-'")
                })?,
            Some(tok) => Alignment::from_token(tok).ok_or_else(|| {
                ConfigError::invalid_position(input, "expected an alignment")
            })?,
        };

        if iter.next().is_some() {
            return Err(ConfigError::invalid_position(
                input,
                "trailing input after alignment",
            ));
        }

        Ok(Position::new(direction, alignment))
    }
}

/// A pair of style offsets along the two axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset {
        top: 0.0,
        left: 0.0,
    };

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// A successful placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The chosen direction and alignment
    pub position: Position,
    /// Popper offsets relative to its zero-offset origin
    pub popper: Offset,
    /// Arrow offsets relative to the popper's own box
    pub arrow: Offset,
}

impl Placement {
    pub fn code(&self) -> String {
        self.position.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let pos: Position = "top-end".parse().unwrap();
        assert_eq!(pos, Position::new(Direction::Top, Alignment::End));
    }

    #[test]
    fn test_parse_defaults_to_middle() {
        let pos: Position = "left".parse().unwrap();
        assert_eq!(pos, Position::new(Direction::Left, Alignment::Middle));
    }

    #[test]
    fn test_parse_short_code() {
        let pos: Position = "rs".parse().unwrap();
        assert_eq!(pos, Position::new(Direction::Right, Alignment::Start));
    }

    #[test]
    fn test_parse_rejects_alignment_first() {
        assert!("start-top".parse::<Position>().is_err());
    }

    #[test]
    fn test_parse_rejects_trailing() {
        assert!("bottom-start-end".parse::<Position>().is_err());
        assert!("bottom-".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "center".parse::<Position>().unwrap_err();
        assert!(err.to_string().contains("center"));
    }

    #[test]
    fn test_code_and_display() {
        let pos = Position::new(Direction::Bottom, Alignment::Start);
        assert_eq!(pos.code(), "bs");
        assert_eq!(pos.to_string(), "bottom-start");
    }

    #[test]
    fn test_every_code_parses_back() {
        let codes: Vec<String> = Position::all().map(|p| p.code()).collect();
        assert_eq!(codes.len(), 12);
        for pos in Position::all() {
            assert_eq!(pos.code().parse::<Position>().unwrap(), pos);
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_parse_single_values() {
        assert_eq!("bottom".parse::<Direction>().unwrap(), Direction::Bottom);
        assert_eq!("r".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("end".parse::<Alignment>().unwrap(), Alignment::End);
        assert!("start".parse::<Direction>().is_err());
        assert!("top-start".parse::<Direction>().is_err());
    }

    #[test]
    fn test_leading_directions() {
        assert!(Direction::Top.is_before());
        assert!(Direction::Left.is_before());
        assert!(!Direction::Bottom.is_before());
        assert!(!Direction::Right.is_before());
    }
}
