//! Process-wide table of canonical vectors.

use crate::{
    num::fhy,
    vector::{Vector2, Vector3, Vector4},
};
use lazy_static::lazy_static;
use thiserror::Error;

/// Identifier for a canonical 2D vector. The discriminant is the vector's
/// index in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceVector2 {
    Zero = 0,
    UnitX,
    UnitY,
    NegUnitX,
    NegUnitY,
    One,
}

/// Identifier for a canonical 3D vector. The discriminant is the vector's
/// index in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceVector3 {
    Zero = 0,
    UnitX,
    UnitY,
    UnitZ,
    NegUnitX,
    NegUnitY,
    NegUnitZ,
    One,
}

/// Identifier for a canonical 4D vector. The discriminant is the vector's
/// index in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceVector4 {
    Zero = 0,
    UnitX,
    UnitY,
    UnitZ,
    NegUnitX,
    NegUnitY,
    NegUnitZ,
    One,
}

/// Error returned when converting an out-of-range index to a reference
/// vector identifier.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("no reference vector with index {index} (there are {count})")]
pub struct InvalidReferenceIndex {
    pub index: usize,
    pub count: usize,
}

#[derive(Debug)]
struct ReferenceTable {
    vectors2: [Vector2<fhy>; ReferenceVector2::COUNT],
    vectors3: [Vector3<fhy>; ReferenceVector3::COUNT],
    vectors4: [Vector4<fhy>; ReferenceVector4::COUNT],
}

lazy_static! {
    static ref REFERENCE_TABLE: ReferenceTable = ReferenceTable::new();
}

macro_rules! impl_reference_id {
    ($id:ident, [$($variant:ident),+]) => {
        impl $id {
            /// Every identifier, in index order.
            pub const ALL: [Self; Self::COUNT] = [$(Self::$variant),+];

            /// The number of identifiers.
            pub const COUNT: usize = [$(Self::$variant),+].len();

            /// Converts an index to the identifier with that index.
            ///
            /// # Panics
            /// If the index is not less than [`Self::COUNT`].
            pub fn from_index(index: usize) -> Self {
                Self::try_from(index).unwrap_or_else(|err| panic!("{err}"))
            }

            /// The index of the identifier in the table.
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl TryFrom<usize> for $id {
            type Error = InvalidReferenceIndex;

            fn try_from(index: usize) -> Result<Self, Self::Error> {
                Self::ALL.get(index).copied().ok_or(InvalidReferenceIndex {
                    index,
                    count: Self::COUNT,
                })
            }
        }
    };
}

impl_reference_id!(ReferenceVector2, [Zero, UnitX, UnitY, NegUnitX, NegUnitY, One]);
impl_reference_id!(
    ReferenceVector3,
    [Zero, UnitX, UnitY, UnitZ, NegUnitX, NegUnitY, NegUnitZ, One]
);
impl_reference_id!(
    ReferenceVector4,
    [Zero, UnitX, UnitY, UnitZ, NegUnitX, NegUnitY, NegUnitZ, One]
);

impl ReferenceTable {
    fn new() -> Self {
        log::debug!("Initializing reference vector table");
        Self {
            vectors2: [
                Vector2::zeros(),
                Vector2::unit_x(),
                Vector2::unit_y(),
                -Vector2::unit_x(),
                -Vector2::unit_y(),
                Vector2::same(1.0),
            ],
            vectors3: [
                Vector3::zeros(),
                Vector3::unit_x(),
                Vector3::unit_y(),
                Vector3::unit_z(),
                -Vector3::unit_x(),
                -Vector3::unit_y(),
                -Vector3::unit_z(),
                Vector3::same(1.0),
            ],
            vectors4: [
                Vector4::zeros(),
                Vector4::unit_x(),
                Vector4::unit_y(),
                Vector4::unit_z(),
                -Vector4::unit_x(),
                -Vector4::unit_y(),
                -Vector4::unit_z(),
                Vector4::same(1.0),
            ],
        }
    }
}

/// The canonical 2D vector with the given identifier.
#[inline]
pub fn reference_vector2(id: ReferenceVector2) -> &'static Vector2<fhy> {
    &REFERENCE_TABLE.vectors2[id.index()]
}

/// The canonical 3D vector with the given identifier.
#[inline]
pub fn reference_vector3(id: ReferenceVector3) -> &'static Vector3<fhy> {
    &REFERENCE_TABLE.vectors3[id.index()]
}

/// The canonical 4D vector with the given identifier.
#[inline]
pub fn reference_vector4(id: ReferenceVector4) -> &'static Vector4<fhy> {
    &REFERENCE_TABLE.vectors4[id.index()]
}
