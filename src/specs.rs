//! Spec assembly and grid translation
//!
//! A spec is the wire command consumed by the device manager. Its layout is
//! fixed: `[type, note, param...]`.

use crate::encoders;
use crate::grid::{Cell, InputGrid};
use crate::model::{Note, Spec, Trait, GRID_SIZE};
use crate::note_grid::{note_grid, NoteGrid};
use log::{debug, trace};

/// Insert `note` right after the trait's type code.
pub fn assemble_spec(note: Note, t: &Trait) -> Spec {
    let values = t.as_slice();
    let mut spec = Vec::with_capacity(values.len() + 1);

    match values.split_first() {
        Some((type_code, params)) => {
            spec.push(*type_code);
            spec.push(note);
            spec.extend_from_slice(params);
        }
        None => spec.push(note),
    }

    Spec::from_vec(spec)
}

pub fn color_spec(note: Note, color: i64) -> Spec {
    assemble_spec(note, &encoders::color(color))
}

pub fn flash_spec(note: Note, a: i64, b: i64) -> Spec {
    assemble_spec(note, &encoders::flash(a, b))
}

pub fn pulse_spec(note: Note, color: i64) -> Spec {
    assemble_spec(note, &encoders::pulse(color))
}

pub fn rgb_spec(note: Note, r: i64, g: i64, b: i64) -> Spec {
    assemble_spec(note, &encoders::rgb(r, g, b))
}

/// Translate a grid using the shared note table.
pub fn build_specs_from_grid(grid: &InputGrid) -> Vec<Spec> {
    build_specs_with(note_grid(), grid)
}

/// Translate a grid into specs in row-major order, top-left first.
///
/// Plain colors are wrapped into the device range. Raw traits are forwarded
/// untouched; callers that need them wrapped should pass
/// [`Trait::normalized`] values. Empty cells produce nothing, so the result
/// holds at most 64 specs.
pub fn build_specs_with(notes: &NoteGrid, grid: &InputGrid) -> Vec<Spec> {
    let mut specs = Vec::with_capacity(GRID_SIZE * GRID_SIZE);

    for (row, col, note) in notes.iter() {
        match grid.get(row, col) {
            Some(Cell::Color(color)) => specs.push(color_spec(note, *color)),
            Some(Cell::Raw(t)) => specs.push(assemble_spec(note, t)),
            Some(Cell::Empty) | None => trace!("[SPECS] No spec for ({}, {})", row, col),
        }
    }

    debug!("[SPECS] Translated grid into {} specs ({} cells skipped)", specs.len(), GRID_SIZE * GRID_SIZE - specs.len());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_fill_grid;
    use crate::model::TraitKind;

    #[test]
    fn test_assemble_inserts_note_after_type() {
        let t = Trait::from_raw(vec![3, 1, 2, 3]);
        let spec = assemble_spec(55, &t);
        assert_eq!(spec, [3, 55, 1, 2, 3]);
        assert_eq!(spec.len(), t.len() + 1);
        assert_eq!(spec.note(), 55);
        assert_eq!(spec.type_code(), t.type_code());
        assert_eq!(spec.params(), t.params());
    }

    #[test]
    fn test_assemble_preserves_shape_for_every_kind() {
        let traits = [
            encoders::color(1),
            encoders::flash(2, 3),
            encoders::pulse(4),
            encoders::rgb(5, 6, 7),
            Trait::from_raw(vec![9]),
            Trait::from_raw(vec![0, -5, 300, 7, 7]),
        ];
        for t in &traits {
            let spec = assemble_spec(42, t);
            assert_eq!(spec.len(), t.len() + 1, "Length mismatch for {:?}", t);
            assert_eq!(spec.as_slice()[1], 42);
            assert_eq!(spec.as_slice()[0], t.as_slice()[0]);
        }
    }

    #[test]
    fn test_assemble_empty_trait_is_bare_note() {
        let spec = assemble_spec(11, &Trait::from_raw(vec![]));
        assert_eq!(spec, [11]);
        assert_eq!(spec.note(), 11);
        assert_eq!(spec.type_code(), None);
    }

    #[test]
    fn test_convenience_wrappers() {
        assert_eq!(color_spec(81, 5), [0, 81, 5]);
        assert_eq!(color_spec(81, -1), [0, 81, 127]);
        assert_eq!(flash_spec(11, 5, 200), [1, 11, 5, 72]);
        assert_eq!(pulse_spec(18, 45), [2, 18, 45]);
        assert_eq!(rgb_spec(44, 127, 128, 0), [3, 44, 127, 0, 0]);
    }

    #[test]
    fn test_fill_grid_translates_to_full_scan() {
        let specs = build_specs_from_grid(&build_fill_grid(5));
        assert_eq!(specs.len(), 64);
        assert_eq!(specs[0], [0, 81, 5], "First spec should address the top-left pad");
        assert_eq!(specs[63], [0, 18, 5], "Last spec should address the bottom-right pad");

        let expected: Vec<Note> = note_grid().iter().map(|(_, _, note)| note).collect();
        let actual: Vec<Note> = specs.iter().map(Spec::note).collect();
        assert_eq!(actual, expected, "Specs should follow row-major note order");
        assert!(specs.iter().all(|s| s.type_code() == Some(TraitKind::Color.code()) && s.params() == [5]));
    }

    #[test]
    fn test_skipped_cell_shortens_output() {
        let mut grid = build_fill_grid(5);
        grid.set(2, 3, Cell::Empty);

        let specs = build_specs_from_grid(&grid);
        assert_eq!(specs.len(), 63);
        assert!(specs.iter().all(|s| s.note() != 64), "Note at (2, 3) should be omitted");
        // Neighbors keep their order around the gap.
        assert_eq!(specs[18], [0, 63, 5]);
        assert_eq!(specs[19], [0, 65, 5]);
    }

    #[test]
    fn test_raw_trait_is_not_normalized() {
        let mut grid = InputGrid::new();
        grid.set(0, 0, Trait::from_raw(vec![1, 200, -4]));
        grid.set(0, 1, 200);

        let specs = build_specs_from_grid(&grid);
        assert_eq!(specs, vec![
            assemble_spec(81, &Trait::from_raw(vec![1, 200, -4])),
            color_spec(82, 72),
        ]);
        assert_eq!(specs[0], [1, 81, 200, -4], "Raw traits should pass through verbatim");
    }

    #[test]
    fn test_normalized_raw_trait() {
        let mut grid = InputGrid::new();
        grid.set(7, 7, Trait::from_raw(vec![1, 200, -4]).normalized());
        assert_eq!(build_specs_from_grid(&grid), vec![flash_spec(18, 200, -4)]);
    }

    #[test]
    fn test_spec_fill_is_used_verbatim() {
        let grid = build_fill_grid(pulse_spec(11, 45));
        let specs = build_specs_from_grid(&grid);
        assert_eq!(specs[0], [2, 81, 11, 45], "Spec-shaped cells are treated as raw sequences");
    }

    #[test]
    fn test_translation_is_repeatable() {
        let grid = InputGrid::from_json("[[1, [2, 30]], [], [null, [3, 1, 2, 3]]]").unwrap();
        let first = build_specs_from_grid(&grid);
        let second = build_specs_from_grid(&grid);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_wide_and_float_numbers_translate() {
        let grid = InputGrid::from_json("[[4294967297, 5.0, [1, 4294967297, 2]]]").unwrap();
        let specs = build_specs_from_grid(&grid);
        assert_eq!(specs.len(), 3, "Every numeric cell should produce a spec");
        assert_eq!(specs[0], [0, 81, 1], "Colors past 32 bits should wrap");
        assert_eq!(specs[1], [0, 82, 5], "Integral floats are plain colors");
        assert_eq!(specs[2], [1, 83, 4_294_967_297, 2]);
    }

    #[test]
    fn test_empty_grid_yields_no_specs() {
        assert!(build_specs_from_grid(&InputGrid::new()).is_empty());
    }

    #[test]
    fn test_explicit_note_table() {
        let notes = NoteGrid::build();
        let grid = build_fill_grid(1);
        assert_eq!(build_specs_with(&notes, &grid), build_specs_from_grid(&grid));
    }
}
