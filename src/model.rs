use serde::Serialize;

/// Device address of a single pad.
pub type Note = i64;

/// Pads per row and rows per grid.
pub const GRID_SIZE: usize = 8;

/// Parameters are wrapped into `0..PARAM_RANGE` by the encoders.
pub const PARAM_RANGE: i64 = 128;

/// Light effect type, stored as the first element of every trait and spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraitKind {
    Color = 0,
    Flash = 1,
    Pulse = 2,
    Rgb = 3,
}

impl TraitKind {
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Number of parameters following the type code.
    pub fn param_count(self) -> usize {
        match self {
            TraitKind::Color | TraitKind::Pulse => 1,
            TraitKind::Flash => 2,
            TraitKind::Rgb => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TraitKind::Color),
            1 => Some(TraitKind::Flash),
            2 => Some(TraitKind::Pulse),
            3 => Some(TraitKind::Rgb),
            _ => None,
        }
    }
}

/// Effect description without an address: `[type, param...]`.
///
/// Traits built by the encoders always carry wrapped parameters. Traits built
/// with [`Trait::from_raw`] are kept exactly as given.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Trait(Vec<i64>);

impl Trait {
    pub fn new(kind: TraitKind, params: &[i64]) -> Self {
        let mut values = Vec::with_capacity(params.len() + 1);
        values.push(kind.code());
        values.extend_from_slice(params);
        Self(values)
    }

    pub fn from_raw(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn type_code(&self) -> Option<i64> {
        self.0.first().copied()
    }

    /// `None` for empty traits and unknown type codes.
    pub fn kind(&self) -> Option<TraitKind> {
        self.type_code().and_then(TraitKind::from_code)
    }

    pub fn params(&self) -> &[i64] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Wraps every parameter into the device range. The type code is left alone.
    pub fn normalized(&self) -> Self {
        let mut values = self.0.clone();
        for value in values.iter_mut().skip(1) {
            *value = crate::encoders::wrap_param(*value);
        }
        Self(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Addressed device command: `[type, note, param...]`.
///
/// Specs are only built by the assembler, which always writes the note, so a
/// spec is never empty.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Spec(Vec<i64>);

impl Spec {
    pub(crate) fn from_vec(values: Vec<i64>) -> Self {
        debug_assert!(!values.is_empty(), "spec without a note");
        Self(values)
    }

    pub fn type_code(&self) -> Option<i64> {
        // A spec assembled from an empty trait is just `[note]`.
        if self.0.len() < 2 {
            return None;
        }
        self.0.first().copied()
    }

    pub fn note(&self) -> Note {
        match self.0.as_slice() {
            [_, note, ..] | [note] => *note,
            [] => unreachable!("specs always carry a note"),
        }
    }

    pub fn params(&self) -> &[i64] {
        self.0.get(2..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl PartialEq<[i64]> for Spec {
    fn eq(&self, other: &[i64]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[i64; N]> for Spec {
    fn eq(&self, other: &[i64; N]) -> bool {
        self.0 == other[..]
    }
}

impl<const N: usize> PartialEq<[i64; N]> for Trait {
    fn eq(&self, other: &[i64; N]) -> bool {
        self.0 == other[..]
    }
}
