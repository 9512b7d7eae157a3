//! Flat toroidal cell board.

use rand::Rng;

use super::error::EngineError;

/// Wraps an arbitrary integer coordinate onto `[0, size)`.
#[inline(always)]
pub(crate) fn wrap(v: i32, size: i32) -> i32 {
    ((v % size) + size) % size
}

/// Fixed-size square board of single-byte cells (0 dead, 1 alive), stored
/// as one flat buffer of length `size * size`.
///
/// Layout is `index(row, col) = col * size + row`: the x coordinate is the
/// minor index and the y coordinate the major one. `get`, `set` and the
/// generation scan all rely on this mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<u8>,
    size: i32,
}

impl Board {
    /// All-dead board. Fails for non-positive sizes.
    pub fn empty(size: i32) -> Result<Self, EngineError> {
        if size <= 0 {
            return Err(EngineError::InvalidSize { size });
        }
        Ok(Self {
            cells: vec![0; (size as usize) * (size as usize)],
            size,
        })
    }

    /// Random board: each cell has a 1-in-`density` chance of taking a
    /// uniform {0,1} draw and is dead otherwise. Densities 0 and 1 make
    /// every cell take the uniform draw.
    pub fn random<R: Rng>(size: i32, density: u32, rng: &mut R) -> Result<Self, EngineError> {
        let mut board = Self::empty(size)?;
        board.randomize(density, rng);
        Ok(board)
    }

    /// In-place random fill with the same density semantics as [`Board::random`].
    pub(crate) fn randomize<R: Rng>(&mut self, density: u32, rng: &mut R) {
        for cell in &mut self.cells {
            let pass = density <= 1 || rng.gen_range(0..density) == 0;
            *cell = if pass { rng.gen_range(0..2) } else { 0 };
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    /// Wraparound read. Total over all `i32` inputs, including negative
    /// coordinates and coordinates beyond the grid edge.
    #[inline(always)]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        let x = wrap(x, self.size);
        let y = wrap(y, self.size);
        self.cells[self.index(x, y)]
    }

    /// Direct write. No wraparound is applied; out-of-range coordinates
    /// are rejected.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> Result<(), EngineError> {
        if x < 0 || x >= self.size || y < 0 || y >= self.size {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        let i = self.index(x, y);
        self.cells[i] = u8::from(value != 0);
        Ok(())
    }

    /// Write with wraparound, for shape stamping near edges.
    pub(crate) fn set_wrapped(&mut self, x: i32, y: i32, value: u8) {
        let x = wrap(x, self.size);
        let y = wrap(y, self.size);
        let i = self.index(x, y);
        self.cells[i] = u8::from(value != 0);
    }

    /// Zero every cell in place.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// OR-merge: any cell alive in either board is alive afterwards.
    /// Merging never kills existing life.
    pub fn merge(&mut self, other: &Board) {
        debug_assert_eq!(self.cells.len(), other.cells.len());
        for (cell, &extra) in self.cells.iter_mut().zip(&other.cells) {
            *cell |= extra;
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    /// Raw cell buffer, for snapshotting by collaborators. The engine
    /// defines no serialized format.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Visits every live cell as `(x, y)`.
    pub fn for_each_live<F>(&self, mut f: F)
    where
        F: FnMut(i32, i32),
    {
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell != 0 {
                let x = i as i32 % self.size;
                let y = i as i32 / self.size;
                f(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Board, wrap};

    #[test]
    fn wrap_covers_negative_and_overrange() {
        assert_eq!(wrap(0, 5), 0);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(-6, 5), 4);
        assert_eq!(wrap(13, 5), 3);
    }

    #[test]
    fn index_mapping_is_col_major_row_minor() {
        let mut board = Board::empty(4).unwrap();
        board.set(1, 2, 1).unwrap();
        // index(row=x, col=y) = col * size + row
        assert_eq!(board.cells()[2 * 4 + 1], 1);
        assert_eq!(board.get(1, 2), 1);
        assert_eq!(board.get(2, 1), 0);
    }

    #[test]
    fn merge_is_monotone() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut a = Board::random(16, 3, &mut rng).unwrap();
        let before: Vec<u8> = a.cells().to_vec();
        let b = Board::random(16, 3, &mut rng).unwrap();
        a.merge(&b);
        for (i, &was) in before.iter().enumerate() {
            if was == 1 {
                assert_eq!(a.cells()[i], 1, "merge killed live cell {i}");
            }
        }
    }

    #[test]
    fn density_zero_and_one_always_draw() {
        let mut rng = StdRng::seed_from_u64(11);
        let zero = Board::random(64, 0, &mut rng).unwrap();
        let one = Board::random(64, 1, &mut rng).unwrap();
        // Unconditional 50/50 draws: populations land near half the grid.
        for board in [&zero, &one] {
            let pop = board.population();
            assert!((1536..=2560).contains(&pop), "population {pop} far from 50/50");
        }
    }
}
