//! Translation of an 8×8 light-state grid into addressed device commands
//! ("specs") for grid controllers that number their pads in blocks of ten.
//!
//! ```
//! use launchpad_specs::{build_fill_grid, build_specs_from_grid};
//!
//! let specs = build_specs_from_grid(&build_fill_grid(5));
//! assert_eq!(specs.len(), 64);
//! assert_eq!(specs[0].as_slice(), &[0, 81, 5]);
//! ```

pub mod encoders;
pub mod grid;
pub mod model;
pub mod note_grid;
pub mod specs;

pub use grid::{build_fill_grid, Cell, InputGrid};
pub use model::{Note, Spec, Trait, TraitKind, GRID_SIZE, PARAM_RANGE};
pub use note_grid::{note_grid, NoteGrid};
pub use specs::{
    assemble_spec, build_specs_from_grid, build_specs_with, color_spec, flash_spec, pulse_spec,
    rgb_spec,
};
