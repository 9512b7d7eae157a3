//! Toroidal Life engine core.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::board::Board;
use super::error::EngineError;
use super::rules::{Rule, RuleTable};
use super::shapes::Shape;

/// Base of the spontaneous-birth threshold: a per-cell draw in
/// `[0, 1000)` must exceed `NOISE_BASE + noise_range` to force a birth.
const NOISE_BASE: f64 = 985.0;

/// Engine configuration. `rule`, `noise_enabled` and `noise_range` take
/// effect on the next `update()`; `seed_density` on the next `seed()`.
#[derive(Clone, Debug)]
pub struct ToroidalLifeConfig {
    /// Transition rule applied by `update()`.
    pub rule: Rule,
    /// Inverse seeding probability: each cell has a 1-in-`seed_density`
    /// chance of a uniform {0,1} draw. 0 and 1 mean every draw passes.
    pub seed_density: u32,
    /// Spontaneous-birth noise toggle.
    pub noise_enabled: bool,
    /// Shifts the noise threshold. Larger values raise the threshold and
    /// make spontaneous births rarer, not more frequent.
    pub noise_range: f64,
    /// Fixed RNG seed for reproducible runs. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for ToroidalLifeConfig {
    fn default() -> Self {
        Self {
            rule: Rule::Life,
            seed_density: 0,
            noise_enabled: false,
            noise_range: 0.0,
            rng_seed: None,
        }
    }
}

impl ToroidalLifeConfig {
    /// Select the transition rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Set the inverse seeding probability.
    pub fn seed_density(mut self, density: u32) -> Self {
        self.seed_density = density;
        self
    }

    /// Enable or disable spontaneous-birth noise.
    pub fn noise(mut self, enabled: bool) -> Self {
        self.noise_enabled = enabled;
        self
    }

    /// Shift the noise threshold.
    pub fn noise_range(mut self, range: f64) -> Self {
        self.noise_range = range;
        self
    }

    /// Fix the RNG seed.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Double-buffered toroidal cellular automaton.
///
/// Owns the readable board and a same-size scratch buffer. `update()`
/// writes the next generation into the scratch and then swaps the two
/// roles; no cell data is copied and no per-generation allocation occurs.
#[derive(Debug)]
pub struct ToroidalLife {
    board: Board,
    scratch: Board,
    table: RuleTable,
    config: ToroidalLifeConfig,
    rng: StdRng,
    generation: u64,
}

impl ToroidalLife {
    /// Engine with the default configuration: the initial fill draws a
    /// uniform {0,1} for every cell (density 0).
    pub fn new(size: i32) -> Result<Self, EngineError> {
        Self::with_config(size, ToroidalLifeConfig::default())
    }

    /// Engine with an explicit configuration; the initial fill uses
    /// `config.seed_density`.
    pub fn with_config(size: i32, config: ToroidalLifeConfig) -> Result<Self, EngineError> {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::random(size, config.seed_density, &mut rng)?;
        let scratch = Board::empty(size)?;
        let table = RuleTable::new(config.rule);
        Ok(Self {
            board,
            scratch,
            table,
            config,
            rng,
            generation: 0,
        })
    }

    /// Wraparound read; total over all `i32` coordinates.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.board.get(x, y)
    }

    /// Direct write without wraparound. Out-of-range coordinates are
    /// rejected rather than wrapped; stamping near edges goes through
    /// [`ToroidalLife::draw_shape`], which wraps.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> Result<(), EngineError> {
        self.board.set(x, y, value)
    }

    /// Advances one generation: a full scan of the current board into the
    /// scratch buffer, then a role swap. Never fails for valid state.
    pub fn update(&mut self) {
        if self.config.noise_enabled {
            self.scan_with_noise();
        } else {
            self.scan();
        }
        std::mem::swap(&mut self.board, &mut self.scratch);
        self.generation += 1;
    }

    /// Runs `update()` the given number of times.
    pub fn step(&mut self, generations: u64) {
        for _ in 0..generations {
            self.update();
        }
    }

    /// OR-merges a fresh random board at the configured density into the
    /// live grid. Seeding only adds life, it never kills cells.
    pub fn seed(&mut self) {
        // The scratch holds no live data between generations; reuse it as
        // the merge source instead of allocating a board per call.
        self.scratch.randomize(self.config.seed_density, &mut self.rng);
        self.board.merge(&self.scratch);
    }

    /// Zeroes the grid in place. The scratch buffer is untouched; the
    /// next `update()` overwrites it anyway.
    pub fn kill(&mut self) {
        self.board.clear();
    }

    /// Stamps the shape's offset pattern alive around `(x, y)`. Stamped
    /// coordinates wrap toroidally, so edge stamps behave like any other
    /// toroidal access.
    pub fn draw_shape(&mut self, x: i32, y: i32, shape: Shape) {
        for &(dx, dy) in shape.offsets() {
            self.board.set_wrapped(x + dx, y + dy, 1);
        }
    }

    /// Change the transition rule; effective on the next `update()`.
    pub fn set_rule(&mut self, rule: Rule) {
        self.config.rule = rule;
        self.table = RuleTable::new(rule);
    }

    /// Change the noise controls; effective on the next `update()`.
    pub fn set_noise(&mut self, enabled: bool, range: f64) {
        self.config.noise_enabled = enabled;
        self.config.noise_range = range;
    }

    /// Change the seeding density; effective on the next `seed()`.
    pub fn set_seed_density(&mut self, density: u32) {
        self.config.seed_density = density;
    }

    pub fn rule(&self) -> Rule {
        self.config.rule
    }

    pub fn size(&self) -> i32 {
        self.board.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.board.population()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Raw cell buffer of the current generation, for snapshotting.
    pub fn cells(&self) -> &[u8] {
        self.board.cells()
    }

    /// Visits every live cell of the current generation as `(x, y)`.
    pub fn for_each_live<F>(&self, f: F)
    where
        F: FnMut(i32, i32),
    {
        self.board.for_each_live(f);
    }

    /// Noise-free scan. Neighbor reads touch only the current board and
    /// writes only the scratch, so the scan parallelizes over major-axis
    /// stripes with no cross-cell synchronization.
    fn scan(&mut self) {
        let board = &self.board;
        let table = &self.table;
        let size = board.size();
        self.scratch
            .cells_mut()
            .par_chunks_mut(size as usize)
            .enumerate()
            .for_each(|(y, stripe)| {
                let y = y as i32;
                for (x, next) in stripe.iter_mut().enumerate() {
                    let x = x as i32;
                    *next = table.lookup(board.get(x, y), live_neighbors(board, x, y));
                }
            });
    }

    /// Noisy scan. Serial because every cell threads the engine RNG: a
    /// draw in `[0, 1000)` above the shifted threshold forces a birth and
    /// skips rule evaluation entirely for that cell.
    fn scan_with_noise(&mut self) {
        let threshold = NOISE_BASE + self.config.noise_range;
        let board = &self.board;
        let table = &self.table;
        let rng = &mut self.rng;
        let size = board.size();
        for (i, next) in self.scratch.cells_mut().iter_mut().enumerate() {
            let x = i as i32 % size;
            let y = i as i32 / size;
            *next = if rng.gen_range(0.0..1000.0) > threshold {
                1
            } else {
                table.lookup(board.get(x, y), live_neighbors(board, x, y))
            };
        }
    }
}

/// Live count over the 8 toroidally-wrapped Moore neighbors.
#[inline]
fn live_neighbors(board: &Board, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            count += board.get(x + dx, y + dy);
        }
    }
    count
}
