use crate::types::{CubeState, STICKER_COUNT};

/// Flattened sticker positions the scrambler maps to themselves. With the
/// solved reference sequence this forces their colors to 2, 3 and 4.
pub const PINNED_POSITIONS: [usize; 3] = [10, 15, 19];

/// Produces randomized starting states for an episode.
///
/// A scramble draws a random bijection from the 24 solved-cube sticker
/// slots onto the 24 positions, with the [`PINNED_POSITIONS`] mapped to
/// themselves. Each color's four slots land on exactly four positions, so
/// every output holds exactly four stickers of each color. The output is
/// *not* guaranteed to be reachable from a solved cube by legal turns.
pub struct Scrambler {
    rng: fastrand::Rng,
}

impl Scrambler {
    /// A scrambler seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A seeded scrambler; identical seeds replay identical scrambles.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Draws the next scrambled state.
    #[allow(clippy::cast_possible_truncation)] // slot indices stay below 24
    pub fn scramble(&mut self) -> CubeState {
        let mut movable: Vec<usize> = (0..STICKER_COUNT)
            .filter(|p| !PINNED_POSITIONS.contains(p))
            .collect();
        self.rng.shuffle(&mut movable);

        // Slot index feeding each position: shuffled for movable
        // positions, identity for pinned ones.
        let mut slots = [0usize; STICKER_COUNT];
        let mut drawn = 0;
        for (position, slot) in slots.iter_mut().enumerate() {
            if PINNED_POSITIONS.contains(&position) {
                *slot = position;
            } else {
                *slot = movable[drawn];
                drawn += 1;
            }
        }

        // Solved-cube slot `i` holds color `i / 4`.
        let mut flat = [0u8; STICKER_COUNT];
        for (position, &slot) in slots.iter().enumerate() {
            flat[position] = (slot / 4) as u8;
        }
        CubeState::from_flat(flat)
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}
