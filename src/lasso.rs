use crate::data::model::Row;
use crate::data::selection::SelectionIndices;

/// A free-hand polygon drawn on the scatter plot, in plot coordinates.
#[derive(Debug, Clone, Default)]
pub struct Lasso {
    vertices: Vec<[f64; 2]>,
}

impl Lasso {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex, skipping exact repeats of the previous one.
    pub fn push(&mut self, point: [f64; 2]) {
        if self.vertices.last() != Some(&point) {
            self.vertices.push(point);
        }
    }

    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// A polygon needs at least three vertices to enclose anything.
    pub fn is_closed_shape(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Even-odd containment test. The polygon is implicitly closed.
    pub fn contains(&self, [x, y]: [f64; 2]) -> bool {
        if !self.is_closed_shape() {
            return false;
        }
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for (i, &[xi, yi]) in self.vertices.iter().enumerate() {
            let [xj, yj] = self.vertices[j];
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Positions in `filtered` whose projection falls inside the lasso.
    pub fn select(&self, filtered: &[&Row]) -> SelectionIndices {
        filtered
            .iter()
            .enumerate()
            .filter(|(_, row)| self.contains([row.dim1, row.dim2]))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Lasso {
        let mut lasso = Lasso::new();
        for p in [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]] {
            lasso.push(p);
        }
        lasso
    }

    fn at(x: f64, y: f64) -> Row {
        Row {
            month: "Jan".into(),
            sentiment: 0.0,
            subjectivity: 0.0,
            dim1: x,
            dim2: y,
            raw_text: format!("{x},{y}"),
        }
    }

    #[test]
    fn square_contains_center_only() {
        let lasso = square();
        assert!(lasso.contains([1.0, 1.0]));
        assert!(!lasso.contains([3.0, 1.0]));
        assert!(!lasso.contains([1.0, -0.5]));
    }

    #[test]
    fn concave_notch_is_outside() {
        let mut lasso = Lasso::new();
        for p in [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 1.0], [0.0, 4.0]] {
            lasso.push(p);
        }
        assert!(lasso.contains([1.0, 0.5]));
        assert!(!lasso.contains([2.0, 3.0]));
    }

    #[test]
    fn degenerate_lasso_selects_nothing() {
        let mut lasso = Lasso::new();
        lasso.push([0.0, 0.0]);
        lasso.push([1.0, 1.0]);
        lasso.push([1.0, 1.0]);
        assert_eq!(lasso.vertices().len(), 2);
        let rows = [at(0.5, 0.5)];
        let filtered: Vec<&Row> = rows.iter().collect();
        assert!(lasso.select(&filtered).is_empty());
    }

    #[test]
    fn select_returns_filtered_positions() {
        let rows = [at(5.0, 5.0), at(1.0, 1.0), at(9.0, 0.0), at(0.5, 1.5)];
        let filtered: Vec<&Row> = rows.iter().collect();
        assert_eq!(square().select(&filtered), SelectionIndices::from([1, 3]));
    }
}
