//! Pad address table
//!
//! The device numbers its 8×8 pads in blocks of ten, starting from the bottom
//! row: the bottom-left pad is 11 and the top-right pad is 88. Row 0 of the
//! table is the top row of the device.

use crate::model::{Note, GRID_SIZE};
use log::debug;
use once_cell::sync::Lazy;

static NOTE_GRID: Lazy<NoteGrid> = Lazy::new(NoteGrid::build);

/// Process-wide note table, built on first access.
pub fn note_grid() -> &'static NoteGrid {
    &NOTE_GRID
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteGrid {
    rows: [[Note; GRID_SIZE]; GRID_SIZE],
}

impl NoteGrid {
    pub fn build() -> Self {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];

        for (row, i) in (1..=GRID_SIZE as Note).rev().enumerate() {
            let base = i * 10;
            for (col, note) in rows[row].iter_mut().enumerate() {
                *note = base + 1 + col as Note;
            }
        }

        debug!("[GRID] Note grid built: top row starts at {}, bottom row at {}", rows[0][0], rows[GRID_SIZE - 1][0]);
        Self { rows }
    }

    pub fn note(&self, row: usize, col: usize) -> Option<Note> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> &[[Note; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Row-major scan: `(row, col, note)`, top-left first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Note)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, notes)| {
            notes.iter().enumerate().map(move |(col, &note)| (row, col, note))
        })
    }

    /// Grid position of a pad, e.g. for mapping an incoming pad press.
    pub fn position_of(&self, note: Note) -> Option<(usize, usize)> {
        let tens = note / 10;
        let units = note % 10;
        if !(1..=GRID_SIZE as Note).contains(&tens) || !(1..=GRID_SIZE as Note).contains(&units) {
            return None;
        }
        Some((GRID_SIZE - tens as usize, units as usize - 1))
    }
}
