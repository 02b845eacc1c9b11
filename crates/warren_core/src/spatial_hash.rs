//! Spatial indexing for proximity queries on agent positions.
//!
//! Grid-based uniform spatial hash using offset-indexed agent lists
//! (compressed-sparse-row pattern): `cell_offsets[i]..cell_offsets[i+1]`
//! spans all agents in cell `i`. Rebuilt once per tick before the
//! interaction passes.
//!
//! Two query tiers are exposed, matching the two fidelity levels the
//! interaction rules consume:
//! - [`SpatialHash::query_candidates`] — cheap bucket scan; may yield
//!   agents slightly beyond the radius.
//! - [`SpatialHash::query_exact`] — candidates filtered by exact
//!   distance, yielding `(index, distance)` pairs.
//!
//! Neither tier guarantees an ordering beyond being deterministic for
//! identical build input; callers rely only on first-match-wins.

#[derive(Debug, Clone, Default)]
pub struct SpatialHash {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cell_offsets: Vec<usize>,
    agent_indices: Vec<usize>,
}

impl SpatialHash {
    /// Creates a hash covering a `width` x `height` world with square
    /// buckets of `cell_size`.
    #[must_use]
    pub fn new(cell_size: f64, width: f64, height: f64) -> Self {
        let cols = (width / cell_size).ceil().max(1.0) as usize;
        let rows = (height / cell_size).ceil().max(1.0) as usize;
        Self {
            cell_size,
            cols,
            rows,
            cell_offsets: vec![0; cols * rows + 1],
            agent_indices: Vec::new(),
        }
    }

    #[inline]
    fn cell_idx(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cx = (x / self.cell_size) as i64;
        let cy = (y / self.cell_size) as i64;
        if cx < 0 || cx >= self.cols as i64 || cy < 0 || cy >= self.rows as i64 {
            None
        } else {
            Some(cy as usize * self.cols + cx as usize)
        }
    }

    /// Rebuilds the index from the tick's agent positions. Indices into
    /// `positions` are the indices later returned by queries.
    pub fn build(&mut self, positions: &[(f64, f64)]) {
        let cell_count = self.cols * self.rows;

        let mut counts = vec![0usize; cell_count];
        for &(x, y) in positions {
            if let Some(idx) = self.cell_idx(x, y) {
                counts[idx] += 1;
            }
        }

        self.cell_offsets.resize(cell_count + 1, 0);
        let mut total = 0;
        for (i, &count) in counts.iter().enumerate() {
            self.cell_offsets[i] = total;
            total += count;
        }
        self.cell_offsets[cell_count] = total;

        self.agent_indices.resize(total, 0);
        let mut cursors = self.cell_offsets[..cell_count].to_vec();
        for (agent_idx, &(x, y)) in positions.iter().enumerate() {
            if let Some(cell_idx) = self.cell_idx(x, y) {
                self.agent_indices[cursors[cell_idx]] = agent_idx;
                cursors[cell_idx] += 1;
            }
        }
    }

    /// Performance tier: visits every agent whose bucket intersects the
    /// query radius. No exact distance filtering.
    pub fn query_candidates<F: FnMut(usize)>(&self, x: f64, y: f64, radius: f64, mut visit: F) {
        let min_cx = (((x - radius) / self.cell_size).floor().max(0.0)) as usize;
        let min_cy = (((y - radius) / self.cell_size).floor().max(0.0)) as usize;
        let max_cx = (((x + radius) / self.cell_size).floor()) as usize;
        let max_cy = (((y + radius) / self.cell_size).floor()) as usize;
        let max_cx = max_cx.min(self.cols - 1);
        let max_cy = max_cy.min(self.rows - 1);

        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let cell = cy * self.cols + cx;
                for &agent_idx in
                    &self.agent_indices[self.cell_offsets[cell]..self.cell_offsets[cell + 1]]
                {
                    visit(agent_idx);
                }
            }
        }
    }

    /// Accuracy tier: candidates filtered by exact Euclidean distance.
    /// Appends `(agent_index, distance)` pairs to `out`.
    pub fn query_exact(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        positions: &[(f64, f64)],
        out: &mut Vec<(usize, f64)>,
    ) {
        self.query_candidates(x, y, radius, |idx| {
            let (ox, oy) = positions[idx];
            let dist = ((ox - x) * (ox - x) + (oy - y) * (oy - y)).sqrt();
            if dist <= radius {
                out.push((idx, dist));
            }
        });
    }
}
