/// Number of stickers on a 2x2x2 cube: 6 faces of 4 stickers each.
pub const STICKER_COUNT: usize = 24;

/// One of the six flat sides of the cube, in the canonical order used by
/// the flattened sticker layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front = 0,
    Top = 1,
    Back = 2,
    Bottom = 3,
    Right = 4,
    Left = 5,
}

impl Face {
    pub const COUNT: usize = 6;

    /// All faces in canonical order.
    pub const ALL: [Face; Face::COUNT] = [
        Face::Front,
        Face::Top,
        Face::Back,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    /// Canonical index of this face.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Full sticker state of a 2x2x2 cube: six faces, each a 2x2 grid of
/// color labels in `0..6`.
///
/// The state is a plain value. Rotations never mutate a `CubeState` in
/// place; they build a fresh one, so a half-applied turn is never
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    pub(crate) faces: [[[u8; 2]; 2]; Face::COUNT],
}

impl CubeState {
    /// The solved cube: face `i` uniformly colored `i`.
    #[must_use]
    pub fn solved() -> Self {
        let mut faces = [[[0u8; 2]; 2]; Face::COUNT];
        for (face, label) in faces.iter_mut().zip(0u8..) {
            *face = [[label; 2]; 2];
        }
        Self { faces }
    }

    /// Reads one sticker. `row` and `col` must be in `0..2`; anything
    /// else is a caller contract violation and panics.
    #[must_use]
    pub fn get(&self, face: Face, row: usize, col: usize) -> u8 {
        self.faces[face.index()][row][col]
    }

    /// Writes one sticker. Same index contract as [`get`](Self::get).
    pub fn set(&mut self, face: Face, row: usize, col: usize, label: u8) {
        self.faces[face.index()][row][col] = label;
    }

    /// True iff every face holds four identical labels.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| {
            let c = face[0][0];
            face[0][1] == c && face[1][0] == c && face[1][1] == c
        })
    }

    /// Flattens into the canonical face-major, then row-major, then
    /// column-major sticker order (`index = face * 4 + row * 2 + col`).
    #[must_use]
    pub fn to_flat(&self) -> [u8; STICKER_COUNT] {
        let mut flat = [0u8; STICKER_COUNT];
        let mut i = 0;
        for face in &self.faces {
            for row in face {
                for &label in row {
                    flat[i] = label;
                    i += 1;
                }
            }
        }
        flat
    }

    /// Inverse of [`to_flat`](Self::to_flat).
    #[must_use]
    pub fn from_flat(flat: [u8; STICKER_COUNT]) -> Self {
        let mut faces = [[[0u8; 2]; 2]; Face::COUNT];
        for (i, &label) in flat.iter().enumerate() {
            faces[i / 4][(i % 4) / 2][i % 2] = label;
        }
        Self { faces }
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeState, Face};

    #[test]
    fn solved_cube_is_solved() {
        assert!(CubeState::solved().is_solved());
    }

    #[test]
    fn any_single_sticker_change_unsolves() {
        for face in Face::ALL {
            for row in 0..2 {
                for col in 0..2 {
                    let mut state = CubeState::solved();
                    let old = state.get(face, row, col);
                    state.set(face, row, col, (old + 1) % 6);
                    assert!(!state.is_solved(), "{face:?} ({row},{col})");
                }
            }
        }
    }

    #[test]
    fn flat_layout_is_face_major() {
        let state = CubeState::solved();
        let flat = state.to_flat();
        for (i, &label) in flat.iter().enumerate() {
            assert_eq!(usize::from(label), i / 4);
        }
        assert_eq!(CubeState::from_flat(flat), state);
    }

    #[test]
    fn get_set_round_trip() {
        let mut state = CubeState::solved();
        state.set(Face::Back, 1, 0, 5);
        assert_eq!(state.get(Face::Back, 1, 0), 5);
        assert_eq!(state.get(Face::Back, 0, 0), 2);
    }
}
