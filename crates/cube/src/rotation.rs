use crate::types::{CubeState, Face};
use crate::CubeError;

const FRONT: usize = Face::Front as usize;
const TOP: usize = Face::Top as usize;
const BACK: usize = Face::Back as usize;
const BOTTOM: usize = Face::Bottom as usize;
const RIGHT: usize = Face::Right as usize;
const LEFT: usize = Face::Left as usize;

/// One quarter-turn of a cube layer.
///
/// The six rotations form a closed action set; drivers address them by
/// the discriminant (`0..6`). Each rotation is a pure permutation of the
/// 24 sticker positions, so applying one can never change how many
/// stickers of each color exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Top layer clockwise, viewed from above.
    HorizontalCw = 0,
    /// Top layer counter-clockwise, viewed from above.
    HorizontalCcw = 1,
    /// Left layer clockwise, viewed from the left.
    VerticalCw = 2,
    /// Left layer counter-clockwise, viewed from the left.
    VerticalCcw = 3,
    /// Front layer clockwise, viewed from the front.
    PlanarCw = 4,
    /// Front layer counter-clockwise, viewed from the front.
    PlanarCcw = 5,
}

impl Rotation {
    pub const COUNT: usize = 6;

    /// All rotations in discriminant order.
    pub const ALL: [Rotation; Rotation::COUNT] = [
        Rotation::HorizontalCw,
        Rotation::HorizontalCcw,
        Rotation::VerticalCw,
        Rotation::VerticalCcw,
        Rotation::PlanarCw,
        Rotation::PlanarCcw,
    ];

    /// Decodes a driver action code.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::InvalidAction`] for codes outside `0..6`;
    /// there is no fallback action.
    pub fn from_index(index: usize) -> Result<Self, CubeError> {
        match index {
            0 => Ok(Self::HorizontalCw),
            1 => Ok(Self::HorizontalCcw),
            2 => Ok(Self::VerticalCw),
            3 => Ok(Self::VerticalCcw),
            4 => Ok(Self::PlanarCw),
            5 => Ok(Self::PlanarCcw),
            _ => Err(CubeError::InvalidAction(index)),
        }
    }

    /// Action code of this rotation.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::HorizontalCw => Self::HorizontalCcw,
            Self::HorizontalCcw => Self::HorizontalCw,
            Self::VerticalCw => Self::VerticalCcw,
            Self::VerticalCcw => Self::VerticalCw,
            Self::PlanarCw => Self::PlanarCcw,
            Self::PlanarCcw => Self::PlanarCw,
        }
    }

    /// Applies this rotation to `state`, returning the rotated cube.
    #[must_use]
    pub fn apply(self, state: &CubeState) -> CubeState {
        match self {
            Self::HorizontalCw => horizontal_cw(state),
            Self::HorizontalCcw => horizontal_ccw(state),
            Self::VerticalCw => vertical_cw(state),
            Self::VerticalCcw => vertical_ccw(state),
            Self::PlanarCw => planar_cw(state),
            Self::PlanarCcw => planar_ccw(state),
        }
    }
}

// Each transform below copies the whole state and then overwrites the
// moved stickers, reading only from `prev`. A destination therefore never
// aliases a source mid-update.

fn horizontal_cw(prev: &CubeState) -> CubeState {
    let mut next = *prev;

    // Top face spins in place.
    next.faces[TOP][0][0] = prev.faces[TOP][1][0];
    next.faces[TOP][0][1] = prev.faces[TOP][0][0];
    next.faces[TOP][1][0] = prev.faces[TOP][1][1];
    next.faces[TOP][1][1] = prev.faces[TOP][0][1];

    // Top rows of the side faces cycle Front <- Right <- Back <- Left.
    next.faces[FRONT][0] = prev.faces[RIGHT][0];
    next.faces[RIGHT][0] = prev.faces[BACK][0];
    next.faces[BACK][0] = prev.faces[LEFT][0];
    next.faces[LEFT][0] = prev.faces[FRONT][0];

    next
}

fn horizontal_ccw(prev: &CubeState) -> CubeState {
    let mut next = *prev;

    next.faces[TOP][0][0] = prev.faces[TOP][0][1];
    next.faces[TOP][0][1] = prev.faces[TOP][1][1];
    next.faces[TOP][1][0] = prev.faces[TOP][0][0];
    next.faces[TOP][1][1] = prev.faces[TOP][1][0];

    next.faces[FRONT][0] = prev.faces[LEFT][0];
    next.faces[LEFT][0] = prev.faces[BACK][0];
    next.faces[BACK][0] = prev.faces[RIGHT][0];
    next.faces[RIGHT][0] = prev.faces[FRONT][0];

    next
}

fn vertical_cw(prev: &CubeState) -> CubeState {
    let mut next = *prev;

    // Left face spins in place.
    next.faces[LEFT][0][0] = prev.faces[LEFT][1][0];
    next.faces[LEFT][0][1] = prev.faces[LEFT][0][0];
    next.faces[LEFT][1][0] = prev.faces[LEFT][1][1];
    next.faces[LEFT][1][1] = prev.faces[LEFT][0][1];

    // Left columns cycle Front <- Top <- Back <- Bottom.
    for row in 0..2 {
        next.faces[FRONT][row][0] = prev.faces[TOP][row][0];
        next.faces[TOP][row][0] = prev.faces[BACK][row][0];
        next.faces[BACK][row][0] = prev.faces[BOTTOM][row][0];
        next.faces[BOTTOM][row][0] = prev.faces[FRONT][row][0];
    }

    next
}

fn vertical_ccw(prev: &CubeState) -> CubeState {
    let mut next = *prev;

    next.faces[LEFT][0][0] = prev.faces[LEFT][0][1];
    next.faces[LEFT][0][1] = prev.faces[LEFT][1][1];
    next.faces[LEFT][1][0] = prev.faces[LEFT][0][0];
    next.faces[LEFT][1][1] = prev.faces[LEFT][1][0];

    for row in 0..2 {
        next.faces[FRONT][row][0] = prev.faces[BOTTOM][row][0];
        next.faces[BOTTOM][row][0] = prev.faces[BACK][row][0];
        next.faces[BACK][row][0] = prev.faces[TOP][row][0];
        next.faces[TOP][row][0] = prev.faces[FRONT][row][0];
    }

    next
}

fn planar_cw(prev: &CubeState) -> CubeState {
    let mut next = *prev;

    // Front face spins in place.
    next.faces[FRONT][0][0] = prev.faces[FRONT][1][0];
    next.faces[FRONT][0][1] = prev.faces[FRONT][0][0];
    next.faces[FRONT][1][0] = prev.faces[FRONT][1][1];
    next.faces[FRONT][1][1] = prev.faces[FRONT][0][1];

    // Edge clusters cycle Top -> Right -> Bottom -> Left -> Top, each
    // pair reordering as it turns the corner.
    next.faces[TOP][1][0] = prev.faces[LEFT][1][1];
    next.faces[TOP][1][1] = prev.faces[LEFT][0][1];

    next.faces[RIGHT][0][0] = prev.faces[TOP][1][0];
    next.faces[RIGHT][1][0] = prev.faces[TOP][1][1];

    next.faces[BOTTOM][0][0] = prev.faces[RIGHT][1][0];
    next.faces[BOTTOM][0][1] = prev.faces[RIGHT][0][0];

    next.faces[LEFT][0][1] = prev.faces[BOTTOM][0][0];
    next.faces[LEFT][1][1] = prev.faces[BOTTOM][0][1];

    next
}

fn planar_ccw(prev: &CubeState) -> CubeState {
    let mut next = *prev;

    next.faces[FRONT][0][0] = prev.faces[FRONT][0][1];
    next.faces[FRONT][0][1] = prev.faces[FRONT][1][1];
    next.faces[FRONT][1][0] = prev.faces[FRONT][0][0];
    next.faces[FRONT][1][1] = prev.faces[FRONT][1][0];

    next.faces[TOP][1][0] = prev.faces[RIGHT][0][0];
    next.faces[TOP][1][1] = prev.faces[RIGHT][1][0];

    next.faces[RIGHT][0][0] = prev.faces[BOTTOM][0][1];
    next.faces[RIGHT][1][0] = prev.faces[BOTTOM][0][0];

    next.faces[BOTTOM][0][0] = prev.faces[LEFT][0][1];
    next.faces[BOTTOM][0][1] = prev.faces[LEFT][1][1];

    next.faces[LEFT][0][1] = prev.faces[TOP][1][1];
    next.faces[LEFT][1][1] = prev.faces[TOP][1][0];

    next
}
