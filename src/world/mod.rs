//! # World Module
//!
//! The immutable grid map the renderer and the player controller share.
//!
//! A map is a square, row-major array of cells. Construction validates the
//! raw cell codes and enforces the fully-walled border invariant that keeps
//! every DDA walk bounded; after that the map is read-only for the life of
//! the process.

use crate::{config, MazecastError, MazecastResult};
use log::debug;

/// Wall materials appearing in the maze, decoded from raw cell codes.
///
/// Each material has exactly one base color in the palette; a code without
/// a material here is rejected when the map is constructed, so rendering
/// never sees an unmapped id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Code 1, the border walls
    Brick,
    /// Code 2, the inner room
    Moss,
    /// Code 3, the freestanding cross wall
    Slate,
}

impl Material {
    /// Decodes a raw cell code into a material.
    ///
    /// Returns `None` for codes with no material mapping; code 0 is not a
    /// material but an empty cell and is handled by [`Cell`] decoding.
    pub fn from_code(code: u8) -> Option<Material> {
        match code {
            1 => Some(Material::Brick),
            2 => Some(Material::Moss),
            3 => Some(Material::Slate),
            _ => None,
        }
    }
}

/// One cell of the grid: traversable or a wall of some material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall(Material),
}

impl Cell {
    /// Returns true if this cell blocks movement and rays.
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall(_))
    }
}

/// The fixed maze layout: a bricked border, a slate cross, and a mossy
/// room with one opening.
const THE_MAZE: [u8; config::MAP_SIZE * config::MAP_SIZE] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 2, 0, 1, //
    1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 2, 0, 1, //
    1, 0, 0, 0, 0, 0, 3, 2, 2, 2, 2, 2, 2, 2, 0, 1, //
    1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
];

/// A square grid of cells, immutable after construction.
///
/// Cell coordinates are `(x, y)` with `index = y * side + x`. Accessors are
/// bounds-checked: out-of-range lookups return `None`/not-open rather than
/// reading past the array.
///
/// # Examples
///
/// ```
/// use mazecast::GridMap;
///
/// let map = GridMap::the_maze().unwrap();
/// assert!(map.is_open(4, 4));
/// assert!(!map.is_open(0, 0)); // border wall
/// ```
#[derive(Debug, Clone)]
pub struct GridMap {
    side: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Builds a map from raw cell codes in row-major order.
    ///
    /// Fails if the slice length does not match `side * side`, if any code
    /// has no material mapping, or if the outer border is not fully walled.
    /// The border invariant is what guarantees every ray cast terminates
    /// inside the grid.
    pub fn from_codes(side: usize, codes: &[u8]) -> MazecastResult<Self> {
        let expected = side * side;
        if codes.len() != expected {
            return Err(MazecastError::MapSize {
                side,
                expected,
                got: codes.len(),
            });
        }

        let mut cells = Vec::with_capacity(expected);
        for (i, &code) in codes.iter().enumerate() {
            let (x, y) = (i % side, i / side);
            let cell = match code {
                0 => Cell::Empty,
                _ => match Material::from_code(code) {
                    Some(material) => Cell::Wall(material),
                    None => return Err(MazecastError::UnknownMaterial { code, x, y }),
                },
            };
            cells.push(cell);
        }

        let map = Self { side, cells };
        map.check_border()?;

        debug!("grid map validated: {}x{} cells, border enclosed", side, side);
        Ok(map)
    }

    /// Builds the fixed 16x16 maze the renderer starts with.
    pub fn the_maze() -> MazecastResult<Self> {
        Self::from_codes(config::MAP_SIZE, &THE_MAZE)
    }

    /// Every cell on the outer ring must be a wall.
    fn check_border(&self) -> MazecastResult<()> {
        let last = self.side - 1;
        for i in 0..self.side {
            for &(x, y) in &[(i, 0), (i, last), (0, i), (last, i)] {
                if !self.cells[y * self.side + x].is_wall() {
                    return Err(MazecastError::OpenBorder { x, y });
                }
            }
        }
        Ok(())
    }

    /// Side length of the square grid, in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the cell at `(x, y)`, or `None` if out of range.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.side || y as usize >= self.side {
            return None;
        }
        Some(self.cells[y as usize * self.side + x as usize])
    }

    /// Returns true if `(x, y)` is in range and traversable.
    ///
    /// Out-of-range coordinates read as blocked, so movement can never
    /// leave the grid even if the border invariant were bypassed.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.cell(x, y), Some(Cell::Empty))
    }
}
