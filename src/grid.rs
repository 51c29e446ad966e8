//! Logical light-state grid handed to the translator.

use crate::model::{Spec, Trait, GRID_SIZE};
use anyhow::{Context, Result};
use log::debug;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One pad's requested state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Produces no spec.
    #[default]
    Empty,
    /// Plain color, wrapped into the device range on translation.
    Color(i64),
    /// Pre-built trait, forwarded to the device as-is.
    Raw(Trait),
}

impl Cell {
    /// Classify a JSON value. Anything that is neither an integer nor a
    /// non-empty array of integers becomes `Empty`. Integral floats such as
    /// `5.0` count as integers.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(_) => integer(value).map_or(Cell::Empty, Cell::Color),
            Value::Array(items) if !items.is_empty() => items
                .iter()
                .map(integer)
                .collect::<Option<Vec<i64>>>()
                .map_or(Cell::Empty, |values| Cell::Raw(Trait::from_raw(values))),
            _ => Cell::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<i64> for Cell {
    fn from(color: i64) -> Self {
        Cell::Color(color)
    }
}

impl From<i32> for Cell {
    fn from(color: i32) -> Self {
        Cell::Color(color.into())
    }
}

impl From<Trait> for Cell {
    fn from(t: Trait) -> Self {
        Cell::Raw(t)
    }
}

/// A spec stored in a grid is treated as a raw sequence, note included.
impl From<Spec> for Cell {
    fn from(spec: Spec) -> Self {
        Cell::Raw(Trait::from_raw(spec.into_vec()))
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_none(),
            Cell::Color(color) => serializer.serialize_i64(*color),
            Cell::Raw(t) => t.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Cell::from_value(&value))
    }
}

/// 8×8 grid of cells, row 0 at the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputGrid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl InputGrid {
    /// Grid with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled(value: impl Into<Cell>) -> Self {
        let value = value.into();
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| value.clone())),
        }
    }

    /// Every pad off.
    pub fn default_fill() -> Self {
        Self::filled(0)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// Out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: impl Into<Cell>) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell.into();
        }
    }

    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Row-major scan: `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, cell)| (row, col, cell))
        })
    }

    /// Build a grid from a JSON array of rows.
    ///
    /// Short rows or a short grid leave the missing cells empty; anything past
    /// eight rows or columns is dropped. Only a non-array document is an error.
    pub fn from_value(value: &Value) -> Result<Self> {
        let rows = value
            .as_array()
            .with_context(|| format!("Grid must be a JSON array of rows, got {}", kind_name(value)))?;

        let mut grid = Self::new();
        for (row, cells) in rows.iter().take(GRID_SIZE).enumerate() {
            let Some(cells) = cells.as_array() else { continue; };
            for (col, cell) in cells.iter().take(GRID_SIZE).enumerate() {
                grid.cells[row][col] = Cell::from_value(cell);
            }
        }

        debug!(
            "[GRID] Loaded grid with {} populated cells",
            grid.iter().filter(|(_, _, c)| !c.is_empty()).count()
        );
        Ok(grid)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Invalid JSON format")?;
        Self::from_value(&value)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for InputGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InputGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Uniform grid, typically all-off (`0`) for clearing the device.
/// The value is stored verbatim and not validated.
pub fn build_fill_grid(value: impl Into<Cell>) -> InputGrid {
    InputGrid::filled(value)
}

/// Integer value of a JSON number, accepting floats with no fractional part.
/// Numbers outside the `i64` range are rejected.
fn integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    // 2^63 is exactly representable; anything at or above it overflows.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
