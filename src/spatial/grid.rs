//! Broad-phase bucket grid.
//!
//! Bodies are bucketed by `floor(position / cell_size)` so narrow-phase
//! pairing only runs within a cell instead of across the whole population.
//! The grid is derived state: it is cleared at the start of every step and
//! holds body indices observed during that step only.
//!
//! Known limitation: pairs straddling a cell boundary are never tested.
//! With cell_size >= ball diameter this misses only near-boundary contacts;
//! fixing it (neighbor-cell checks) would change simulation behavior, so it
//! stays as documented.

/// Fixed-size cell grid over the viewport, holding body indices.
pub struct SpatialGrid {
    cells: Vec<Vec<usize>>,
    cols: usize,
    rows: usize,
    cell_size: f32,
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            cols: 0,
            rows: 0,
            cell_size: 1.0,
        }
    }

    /// Size the grid to the current viewport and empty every cell.
    ///
    /// Cell allocations are kept across steps; only their contents are
    /// cleared.
    pub fn rebuild(&mut self, width: f32, height: f32, cell_size: f32) {
        let cols = ((width / cell_size).ceil() as usize).max(1);
        let rows = ((height / cell_size).ceil() as usize).max(1);
        if cols * rows != self.cells.len() {
            self.cells.resize_with(cols * rows, Vec::new);
        }
        self.cols = cols;
        self.rows = rows;
        self.cell_size = cell_size;
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Cell index for a position, or `None` when it falls outside the grid.
    ///
    /// Validity is explicit here: cell (0, 0) is a bucket like any other.
    pub fn cell_for(&self, x: f32, y: f32) -> Option<usize> {
        let cx = (x / self.cell_size).floor();
        let cy = (y / self.cell_size).floor();
        if cx < 0.0 || cy < 0.0 {
            return None;
        }
        let (cx, cy) = (cx as usize, cy as usize);
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        Some(cy * self.cols + cx)
    }

    /// Bodies already bucketed into a cell this step.
    pub fn cell(&self, index: usize) -> &[usize] {
        &self.cells[index]
    }

    pub fn push(&mut self, index: usize, body: usize) {
        self.cells[index].push(body);
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self::new()
    }
}
