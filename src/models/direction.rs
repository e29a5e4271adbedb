//! Directions a tooltip can attach on
//!
//! JS callers hand over a direction as a string, a comma-separated string
//! or a list. That loose value is resolved once into a `PlaceSpec` so the
//! rest of the crate only ever sees the closed `Direction` enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlacementError, Result};

/// The side of the anchor a tooltip is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

/// Ordered candidates, tried left to right
pub type DirectionList = Vec<Direction>;

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// True for directions whose main axis is vertical (top, bottom)
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Direction::Top),
            "right" => Ok(Direction::Right),
            "bottom" => Ok(Direction::Bottom),
            "left" => Ok(Direction::Left),
            other => Err(PlacementError::InvalidDirection(other.to_string())),
        }
    }
}

/// A direction exactly as a JS caller supplied it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectionValue {
    Name(String),
    List(Vec<String>),
}

impl From<&str> for DirectionValue {
    fn from(s: &str) -> Self {
        DirectionValue::Name(s.to_string())
    }
}

impl From<Vec<&str>> for DirectionValue {
    fn from(list: Vec<&str>) -> Self {
        DirectionValue::List(list.into_iter().map(str::to_string).collect())
    }
}

/// Opposite of a loosely supplied direction
///
/// A list contributes only its first element. An empty list or an
/// unrecognized name fails with `InvalidDirection`.
pub fn opposite(value: &DirectionValue) -> Result<Direction> {
    let name = match value {
        DirectionValue::Name(name) => name.as_str(),
        DirectionValue::List(list) => list
            .first()
            .map(String::as_str)
            .ok_or_else(|| PlacementError::InvalidDirection("[]".to_string()))?,
    };
    Ok(name.parse::<Direction>()?.opposite())
}

/// A resolved placement preference: one direction or an ordered list
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceSpec {
    Single(Direction),
    List(DirectionList),
}

impl PlaceSpec {
    /// Resolve a loose JS value
    ///
    /// With `auto` enabled a string is split on commas and each part
    /// trimmed. Without it a string must name exactly one direction.
    pub fn from_value(value: &DirectionValue, auto: bool) -> Result<Self> {
        match value {
            DirectionValue::Name(name) if auto => name.parse(),
            DirectionValue::Name(name) => Ok(PlaceSpec::Single(name.parse()?)),
            DirectionValue::List(list) => Ok(PlaceSpec::List(
                list.iter()
                    .map(|s| s.parse())
                    .collect::<Result<DirectionList>>()?,
            )),
        }
    }

    /// Candidate list to try, in order
    ///
    /// With `auto` enabled a lone direction gets its opposite appended so
    /// there is always a fallback.
    pub fn candidates(&self, auto: bool) -> DirectionList {
        let mut list = match self {
            PlaceSpec::Single(direction) => vec![*direction],
            PlaceSpec::List(list) => list.clone(),
        };
        if auto && list.len() == 1 {
            list.push(list[0].opposite());
        }
        list
    }
}

impl From<Direction> for PlaceSpec {
    fn from(direction: Direction) -> Self {
        PlaceSpec::Single(direction)
    }
}

impl From<DirectionList> for PlaceSpec {
    fn from(list: DirectionList) -> Self {
        PlaceSpec::List(list)
    }
}

impl FromStr for PlaceSpec {
    type Err = PlacementError;

    /// Parse `"top"` or `"top, left"`
    fn from_str(s: &str) -> Result<Self> {
        let mut list = s
            .split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<DirectionList>>()?;
        if list.len() == 1 {
            Ok(PlaceSpec::Single(list.remove(0)))
        } else {
            Ok(PlaceSpec::List(list))
        }
    }
}
