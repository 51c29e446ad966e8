//! Trait encoders
//!
//! Each encoder turns an effect description into a [`Trait`] whose parameters
//! are wrapped into the device range `0..=127`. Encoders accept any integer and
//! never fail.
//!
//! Wrapping uses the non-negative residue, so `-1` becomes `127` rather than a
//! negative value the device cannot interpret.

use crate::model::{Trait, TraitKind, PARAM_RANGE};

/// Wrap a parameter into `0..PARAM_RANGE`.
pub fn wrap_param(value: i64) -> i64 {
    value.rem_euclid(PARAM_RANGE)
}

/// Fixed-color light.
pub fn color(color: i64) -> Trait {
    Trait::new(TraitKind::Color, &[wrap_param(color)])
}

/// Light alternating between colors `a` and `b`.
pub fn flash(a: i64, b: i64) -> Trait {
    Trait::new(TraitKind::Flash, &[wrap_param(a), wrap_param(b)])
}

/// Pulsing light.
pub fn pulse(color: i64) -> Trait {
    Trait::new(TraitKind::Pulse, &[wrap_param(color)])
}

pub fn rgb(r: i64, g: i64, b: i64) -> Trait {
    Trait::new(TraitKind::Rgb, &[wrap_param(r), wrap_param(g), wrap_param(b)])
}
