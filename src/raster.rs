//! Block rasterization of a maze and coordinate transformation for canvas rendering.
//!
//! A `W` by `H` maze becomes a `(2W + 1)` by `(2H + 1)` grid of blocks: cell `(x, y)` sits on
//! block `(2x + 1, 2y + 1)`, the blocks between two cells hold the wall or passage separating them,
//! and the remaining blocks are pillars.

use color_eyre::eyre::{OptionExt as _, Result};

use crate::{
    grid::{Cell, CellId},
    maze::Maze,
};

/// Largest number of cells along one side whose blocks still convert to canvas coordinates.
pub(crate) const MAX_SIDE: usize = 32_767;

/// Number of blocks needed to draw `cells` cells along one side.
const fn blocks_along(cells: usize) -> Option<usize> {
    match cells.checked_mul(2) {
        Some(doubled) => doubled.checked_add(1),
        None => None,
    }
}

/// Number of block columns and rows needed to draw `maze`.
///
/// # Errors
///
/// This function may return errors if either count overflows.
pub(crate) fn block_size(maze: &Maze) -> Result<(usize, usize)> {
    let cols = blocks_along(maze.width()).ok_or_eyre("failed to count the block columns")?;
    let rows = blocks_along(maze.height()).ok_or_eyre("failed to count the block rows")?;

    Ok((cols, rows))
}

/// Block holding the cell at column `x` and row `y`.
pub(crate) const fn cell_block((x, y): (usize, usize)) -> (usize, usize) {
    (2 * x + 1, 2 * y + 1)
}

/// Every block of `maze` that is drawn as a wall, in row-major order.
///
/// # Errors
///
/// This function may return errors if a cell adjacent to a wall block is missing from the maze.
pub(crate) fn wall_blocks(maze: &Maze) -> Result<Vec<(usize, usize)>> {
    let (cols, rows) = block_size(maze)?;
    let mut walls = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let is_wall = match (col % 2, row % 2) {
                // Interior of a cell
                (1, 1) => false,
                // Between horizontal neighbors
                (0, 1) if col > 0 && col < cols - 1 => {
                    wall_of(maze, col / 2 - 1, row / 2, |cell| cell.right_wall())?
                }
                // Between vertical neighbors
                (1, 0) if row > 0 && row < rows - 1 => {
                    wall_of(maze, col / 2, row / 2 - 1, |cell| cell.bottom_wall())?
                }
                // Pillars and the outer border
                _ => true,
            };
            if is_wall {
                walls.push((col, row));
            }
        }
    }

    Ok(walls)
}

/// Reads one wall flag of the cell at `(x, y)`.
fn wall_of(maze: &Maze, x: usize, y: usize, flag: fn(&Cell) -> bool) -> Result<bool> {
    let id = maze
        .cell_at(x, y)
        .ok_or_eyre("failed to find cell adjacent to wall block")?;

    Ok(flag(maze.cell(id)?))
}

/// Blocks covering the given cells, one per cell.
///
/// # Errors
///
/// This function may return errors if a cell does not belong to `maze`.
pub(crate) fn cell_blocks(maze: &Maze, cells: &[CellId]) -> Result<Vec<(usize, usize)>> {
    cells
        .iter()
        .map(|id| Ok(cell_block(maze.cell(*id)?.coordinate())))
        .collect()
}

/// Blocks covering a route: its cells plus the passages joining consecutive neighbors.
///
/// # Errors
///
/// This function may return errors if a cell does not belong to `maze`.
pub(crate) fn route_blocks(maze: &Maze, route: &[CellId]) -> Result<Vec<(usize, usize)>> {
    let mut blocks = cell_blocks(maze, route)?;

    for pair in route.windows(2) {
        let [from, to] = pair else {
            continue;
        };
        let (from_x, from_y) = maze.cell(*from)?.coordinate();
        let (to_x, to_y) = maze.cell(*to)?.coordinate();
        if from_x.abs_diff(to_x) + from_y.abs_diff(to_y) == 1 {
            blocks.push((from_x + to_x + 1, from_y + to_y + 1));
        }
    }

    Ok(blocks)
}

/// Transforms block coordinates to screen coordinates for canvas rendering.
///
/// This function converts block coordinates (col, row) to screen coordinates (x, y) using the
/// standard transformation formulas: coordinate[i] = (n - 1) / 2 - i for rows (ascending order) and
/// coordinate[i] = i - (n - 1) / 2 for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_to_screen_coords(
    blocks: &[(usize, usize)],
    (cols, rows): (usize, usize),
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    blocks
        .iter()
        .map(|&(col, row)| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
