//! Integer pixel coordinates used as mosaic seeds

/// A `(row, col)` pixel coordinate
///
/// Equality and hashing are structural so randomly drawn seeds can be
/// deduplicated through a `HashSet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl Point {
    /// Create a point at the given row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance to another point
    pub const fn squared_distance(&self, other: &Self) -> usize {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr * dr + dc * dc
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }

    /// Index of the closest point in `seeds`
    ///
    /// Ties resolve to the lowest index. Returns `None` for an empty slice.
    pub fn nearest(&self, seeds: &[Self]) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, seed) in seeds.iter().enumerate() {
            let distance = self.squared_distance(seed);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
