use crate::{Config, Error, Frame, Result};
use tracing::debug;

/// Ordered `(row, col)` coordinates applied to the grid in one go.
pub type CellGroup = Vec<(usize, usize)>;

/// Conway's Game of Life on a `HEIGHT x WIDTH` torus.
///
/// Cells live in two flat row-major buffers: the current generation and a
/// scratch buffer that receives the next one. An update fills the scratch
/// buffer from the current one, swaps the two and clears the new scratch.
#[derive(Clone, Debug)]
pub struct GameOfLife<const HEIGHT: usize, const WIDTH: usize> {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    generation: u64,
}

impl<const HEIGHT: usize, const WIDTH: usize> Default for GameOfLife<HEIGHT, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const HEIGHT: usize, const WIDTH: usize> GameOfLife<HEIGHT, WIDTH> {
    const SIZE: usize = HEIGHT * WIDTH;
    const NOT_EMPTY: () = assert!(HEIGHT > 0 && WIDTH > 0, "grid must not be empty");

    /// Creates a grid with every cell dead.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NOT_EMPTY;
        Self {
            cells_curr: vec![false; Self::SIZE],
            cells_next: vec![false; Self::SIZE],
            generation: 0,
        }
    }

    /// Creates a grid with random cells, see [`GameOfLife::randomize`].
    pub fn random(seed: Option<u64>, fill_rate: f64) -> Self {
        let mut life = Self::new();
        life.randomize(seed, fill_rate);
        life
    }

    /// Fills the current generation with cells that are alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Number of updates since construction or the last [`GameOfLife::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&alive| alive).count()
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    /// Coordinates of the live cells, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells_curr
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| (i / WIDTH, i % WIDTH))
    }

    fn index(row: usize, col: usize) -> usize {
        row * WIDTH + col
    }

    fn check_bounds(row: usize, col: usize) -> Result<()> {
        if row < HEIGHT && col < WIDTH {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                height: HEIGHT,
                width: WIDTH,
            })
        }
    }

    fn get(&self, row: usize, col: usize) -> bool {
        self.cells_curr[Self::index(row, col)]
    }

    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        assert!(
            row < HEIGHT && col < WIDTH,
            "cell ({row}, {col}) is outside the {HEIGHT}x{WIDTH} grid"
        );
        self.get(row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        Self::check_bounds(row, col)?;
        self.cells_curr[Self::index(row, col)] = alive;
        Ok(())
    }

    /// Sets every cell of `group` to `alive`.
    ///
    /// The whole group is checked first: if any coordinate is outside the
    /// grid nothing is changed and the first offending one is reported.
    pub fn set_cell_group(&mut self, group: &[(usize, usize)], alive: bool) -> Result<()> {
        for &(row, col) in group {
            Self::check_bounds(row, col)?;
        }
        for &(row, col) in group {
            self.cells_curr[Self::index(row, col)] = alive;
        }
        Ok(())
    }

    /// Kills every cell in both buffers and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
        self.cells_next.fill(false);
        self.generation = 0;
    }

    /// Counts live cells among the 8 neighbors of `(row, col)`, wrapping around both axes.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn count_neighbors(&self, row: usize, col: usize) -> usize {
        assert!(
            row < HEIGHT && col < WIDTH,
            "cell ({row}, {col}) is outside the {HEIGHT}x{WIDTH} grid"
        );
        let r1 = if row == 0 { HEIGHT - 1 } else { row - 1 };
        let r2 = if row == HEIGHT - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { WIDTH - 1 } else { col - 1 };
        let c2 = if col == WIDTH - 1 { 0 } else { col + 1 };
        self.get(r1, c1) as usize
            + self.get(r1, col) as usize
            + self.get(r1, c2) as usize
            + self.get(row, c1) as usize
            + self.get(row, c2) as usize
            + self.get(r2, c1) as usize
            + self.get(r2, col) as usize
            + self.get(r2, c2) as usize
    }

    /// Computes the next generation from the current one as a whole.
    pub fn update(&mut self) {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let neighbors = self.count_neighbors(row, col);
                let idx = Self::index(row, col);
                self.cells_next[idx] = if self.cells_curr[idx] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.cells_next.fill(false);
        self.generation += 1;
    }

    /// Draws the current generation inside an `x---x` / `|...|` border.
    pub fn render(&self) -> Frame {
        let border = std::iter::once(Config::CORNER)
            .chain(std::iter::repeat(Config::HORIZONTAL_EDGE).take(WIDTH))
            .chain([Config::CORNER, '\n'])
            .collect::<String>();

        let mut text = String::with_capacity((WIDTH + 3) * (HEIGHT + 2));
        text.push_str(&border);
        for row in self.cells_curr.chunks_exact(WIDTH) {
            text.push(Config::VERTICAL_EDGE);
            text.extend(row.iter().map(|&alive| {
                if alive {
                    Config::ALIVE
                } else {
                    Config::EMPTY
                }
            }));
            text.push(Config::VERTICAL_EDGE);
            text.push('\n');
        }
        text.push_str(&border);
        Frame::new(text)
    }

    /// Renders the current generation, then moves on to the next one.
    ///
    /// Returns the frame of the generation that was current on entry.
    pub fn advance(&mut self) -> Frame {
        let frame = self.render();
        self.update();
        debug!(
            generation = self.generation,
            population = self.population(),
            "advanced"
        );
        frame
    }
}
