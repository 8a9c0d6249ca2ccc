use ndarray::Array2;

/// Single coordinate axis used for grid size, rows, and columns.
pub type Coord = u8;

/// Count type used for cell and segment totals.
pub type CellCount = u16;

/// Grid cell as `(row, col)`.
pub type Cell = (Coord, Coord);

/// One element of a code alphabet, stored as its index into the alphabet.
pub type Symbol = u8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Cell {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Manhattan adjacency: the cells share an edge.
pub const fn is_adjacent(a: Cell, b: Cell) -> bool {
    a.0.abs_diff(b.0) as u16 + a.1.abs_diff(b.1) as u16 == 1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Cell) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Cell) -> NeighborIter {
        let dim = self.dim();
        let bounds = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Orthogonal steps in the order up, down, left, right. Search order and
/// therefore generated paths depend on this order.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `cell`, returning a value only when it remains in bounds.
fn apply_delta(cell: Cell, delta: (isize, isize), bounds: Cell) -> Option<Cell> {
    let (row, col) = cell;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// In-bounds orthogonal neighbors of a cell.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Cell,
    bounds: Cell,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Cell, bounds: Cell) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_two_neighbors_in_search_order() {
        let neighbors: Vec<Cell> = NeighborIter::new((0, 0), (5, 5)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1)]);
    }

    #[test]
    fn center_has_four_neighbors_in_search_order() {
        let neighbors: Vec<Cell> = NeighborIter::new((2, 2), (5, 5)).collect();
        assert_eq!(neighbors, [(1, 2), (3, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn adjacency_is_manhattan_distance_one() {
        assert!(is_adjacent((1, 1), (1, 2)));
        assert!(is_adjacent((1, 1), (0, 1)));
        assert!(!is_adjacent((1, 1), (2, 2)));
        assert!(!is_adjacent((1, 1), (1, 1)));
        assert!(!is_adjacent((0, 0), (0, 2)));
    }
}
