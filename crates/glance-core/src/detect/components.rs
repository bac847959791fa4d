use ndarray::Array2;

/// A 4-connected group of busy tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileComponent {
    /// Number of tiles in the component.
    pub area: usize,
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl TileComponent {
    pub fn tile_width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn tile_height(&self) -> usize {
        self.max_row - self.min_row + 1
    }
}

/// Find 4-connected components of `true` cells with an explicit work list.
///
/// Components are returned in discovery order: row-major by their first
/// (top-most, then left-most) cell.
pub fn flood_fill_components(grid: &Array2<bool>) -> Vec<TileComponent> {
    let (rows, cols) = grid.dim();
    let mut visited = Array2::from_elem((rows, cols), false);
    let mut components = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            if !grid[[row, col]] || visited[[row, col]] {
                continue;
            }

            let mut component = TileComponent {
                area: 0,
                min_row: row,
                max_row: row,
                min_col: col,
                max_col: col,
            };
            visited[[row, col]] = true;
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                component.area += 1;
                component.min_row = component.min_row.min(r);
                component.max_row = component.max_row.max(r);
                component.min_col = component.min_col.min(c);
                component.max_col = component.max_col.max(c);

                let neighbours = [
                    (r, c + 1),
                    (r, c.wrapping_sub(1)),
                    (r + 1, c),
                    (r.wrapping_sub(1), c),
                ];
                for (nr, nc) in neighbours {
                    if nr < rows && nc < cols && grid[[nr, nc]] && !visited[[nr, nc]] {
                        visited[[nr, nc]] = true;
                        stack.push((nr, nc));
                    }
                }
            }

            components.push(component);
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_cells_are_separate() {
        let mut grid = Array2::from_elem((2, 2), false);
        grid[[0, 0]] = true;
        grid[[1, 1]] = true;
        assert_eq!(flood_fill_components(&grid).len(), 2);
    }

    #[test]
    fn u_shape_is_one_component() {
        // X . X
        // X X X
        let mut grid = Array2::from_elem((2, 3), true);
        grid[[0, 1]] = false;
        let comps = flood_fill_components(&grid);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].area, 5);
        assert_eq!(comps[0].tile_width(), 3);
        assert_eq!(comps[0].tile_height(), 2);
    }

    #[test]
    fn large_region_does_not_recurse() {
        let grid = Array2::from_elem((400, 400), true);
        let comps = flood_fill_components(&grid);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].area, 160_000);
    }
}
