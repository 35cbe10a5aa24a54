//! Fallback orders for directions and alignments
//!
//! Each table holds one ordering per preferred value. An ordering must list
//! every value exactly once and start with the value it is keyed by.

use std::fmt;

use crate::error::ConfigError;

use super::lexer::lex;
use super::types::{Alignment, Direction};

/// Per-direction fallback orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionFlipOrder {
    orders: [[Direction; 4]; 4],
}

impl DirectionFlipOrder {
    /// The order tried when `preferred` is the requested direction
    pub fn order(&self, preferred: Direction) -> &[Direction; 4] {
        &self.orders[preferred.index()]
    }

    /// Replace the order for one key
    pub fn with_order(mut self, key: Direction, order: &str) -> Result<Self, ConfigError> {
        self.orders[key.index()] = parse_direction_order(key, order)?;
        Ok(self)
    }
}

impl Default for DirectionFlipOrder {
    fn default() -> Self {
        use Direction::*;
        let mut orders = [[Top; 4]; 4];
        orders[Top.index()] = [Top, Bottom, Right, Left];
        orders[Right.index()] = [Right, Left, Top, Bottom];
        orders[Bottom.index()] = [Bottom, Top, Right, Left];
        orders[Left.index()] = [Left, Right, Bottom, Top];
        Self { orders }
    }
}

impl fmt::Display for DirectionFlipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in Direction::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let order: String = self.order(*key).iter().map(|d| d.initial()).collect();
            write!(f, "{}: {}", key, order)?;
        }
        Ok(())
    }
}

/// Per-alignment fallback orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentFlipOrder {
    orders: [[Alignment; 3]; 3],
}

impl AlignmentFlipOrder {
    pub fn order(&self, preferred: Alignment) -> &[Alignment; 3] {
        &self.orders[preferred.index()]
    }

    pub fn with_order(mut self, key: Alignment, order: &str) -> Result<Self, ConfigError> {
        self.orders[key.index()] = parse_alignment_order(key, order)?;
        Ok(self)
    }
}

impl Default for AlignmentFlipOrder {
    fn default() -> Self {
        use Alignment::*;
        let mut orders = [[Start; 3]; 3];
        orders[Start.index()] = [Start, Middle, End];
        orders[Middle.index()] = [Middle, Start, End];
        orders[End.index()] = [End, Middle, Start];
        Self { orders }
    }
}

impl fmt::Display for AlignmentFlipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in Alignment::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let order: String = self.order(*key).iter().map(|a| a.initial()).collect();
            write!(f, "{}: {}", key, order)?;
        }
        Ok(())
    }
}

/// Parse an order such as `tbrl` for the given key
pub fn parse_direction_order(key: Direction, input: &str) -> Result<[Direction; 4], ConfigError> {
    let values = parse_letters(input, Direction::from_token)
        .map_err(|reason| ConfigError::invalid_flip_order("direction", key.as_str(), reason))?;
    validate_permutation(key, &values, &Direction::ALL)
        .map_err(|reason| ConfigError::invalid_flip_order("direction", key.as_str(), reason))?;
    let mut order = [key; 4];
    order.copy_from_slice(&values);
    Ok(order)
}

/// Parse an order such as `sme` for the given key
pub fn parse_alignment_order(key: Alignment, input: &str) -> Result<[Alignment; 3], ConfigError> {
    let values = parse_letters(input, Alignment::from_token)
        .map_err(|reason| ConfigError::invalid_flip_order("alignment", key.as_str(), reason))?;
    validate_permutation(key, &values, &Alignment::ALL)
        .map_err(|reason| ConfigError::invalid_flip_order("alignment", key.as_str(), reason))?;
    let mut order = [key; 3];
    order.copy_from_slice(&values);
    Ok(order)
}

fn parse_letters<T>(
    input: &str,
    convert: impl Fn(super::lexer::Token) -> Option<T>,
) -> Result<Vec<T>, String> {
    let tokens = lex(input)
        .map_err(|span| format!("unexpected character at offset {}", span.start))?;
    tokens
        .into_iter()
        .map(|(tok, span)| {
            convert(tok).ok_or_else(|| {
                format!(
                    "'{}' at offset {} is not valid here",
                    &input[span.clone()],
                    span.start
                )
            })
        })
        .collect()
}

fn validate_permutation<T>(key: T, values: &[T], all: &[T]) -> Result<(), String>
where
    T: Copy + PartialEq + fmt::Display,
{
    if values.len() != all.len() {
        return Err(format!(
            "expected {} entries, found {}",
            all.len(),
            values.len()
        ));
    }
    if values[0] != key {
        return Err(format!("must start with {}, found {}", key, values[0]));
    }
    for expected in all {
        if !values.contains(expected) {
            return Err(format!("missing {}", expected));
        }
    }
    Ok(())
}
