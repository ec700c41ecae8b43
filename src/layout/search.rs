use std::collections::BTreeMap;

use crate::{
    layout::compose::{compose_rows, single_row_layout},
    tile::model::{InputTile, Layout},
};

/// Row-count candidates for one optimization call.
///
/// Scores are cached per clamped row count so the local search never composes
/// the same neighbour twice.
pub(crate) struct RowCountSearch<'a> {
    tiles: &'a [InputTile],
    w: f64,
    h: f64,
    min_aspect_ratio: f64,
    pub(crate) scores: BTreeMap<usize, f64>,
}

fn score(layout: Option<&Layout>) -> f64 {
    layout.map_or(f64::NEG_INFINITY, |l| l.viewport_use)
}

/// Keep `candidate` only when it strictly beats `best`.
fn keep_better(best: &mut Option<Layout>, candidate: Option<Layout>) {
    if score(candidate.as_ref()) > score(best.as_ref()) {
        *best = candidate;
    }
}

impl<'a> RowCountSearch<'a> {
    pub(crate) fn new(tiles: &'a [InputTile], w: f64, h: f64, min_aspect_ratio: f64) -> Self {
        Self {
            tiles,
            w,
            h,
            min_aspect_ratio,
            scores: BTreeMap::new(),
        }
    }

    fn layout(&mut self, rows: usize) -> Option<Layout> {
        let layout = compose_rows(self.tiles, self.w, self.h, rows, self.min_aspect_ratio);
        let viewport_use = score(layout.as_ref());
        match &layout {
            Some(_) => tracing::debug!(rows, viewport_use, "evaluated row count"),
            None => tracing::trace!(rows, "row count leaves no usable space"),
        }
        self.scores.insert(rows, viewport_use);
        layout
    }

    /// Score `rows` (clamped to the tile count), offering a freshly composed
    /// layout to `best`. Cached counts were already offered.
    fn consider(&mut self, rows: usize, best: &mut Option<Layout>) -> f64 {
        let rows = rows.min(self.tiles.len());
        if let Some(&cached) = self.scores.get(&rows) {
            return cached;
        }
        let layout = self.layout(rows);
        let viewport_use = score(layout.as_ref());
        keep_better(best, layout);
        viewport_use
    }

    /// Best layout over row counts `1..=n`.
    ///
    /// Counts up to `exhaustive_limit` are all tried. Beyond that, viewport use
    /// is assumed unimodal in the row count and a local search walks toward the
    /// better neighbour of a midpoint until it finds a local maximum; this is a
    /// heuristic and may miss the global optimum. Every count composed along the
    /// way competes for the result.
    pub(crate) fn run(&mut self, exhaustive_limit: usize) -> Option<Layout> {
        let n = self.tiles.len();
        if n == 1 {
            return single_row_layout(self.tiles, self.w, self.h, self.min_aspect_ratio);
        }

        let mut best = None;
        for rows in 1..=exhaustive_limit.min(n) {
            self.consider(rows, &mut best);
        }
        if n <= exhaustive_limit {
            return best;
        }

        let mut left = exhaustive_limit + 1;
        let mut right = n;
        let mut best_search = None;
        self.consider(left, &mut best_search);
        while left <= right {
            let mid = (left + right) / 2;
            let mid_use = self.consider(mid, &mut best_search);
            if self.consider(mid - 1, &mut best_search) > mid_use {
                right = mid - 1;
            } else if self.consider(mid + 1, &mut best_search) > mid_use {
                left = mid + 1;
            } else {
                break;
            }
        }

        keep_better(&mut best, best_search);
        best
    }
}

/// Row count maximizing viewport use, searched as described on [`RowCountSearch::run`].
pub(crate) fn find_optimal_layout(
    tiles: &[InputTile],
    w: f64,
    h: f64,
    min_aspect_ratio: f64,
    exhaustive_limit: usize,
) -> Option<Layout> {
    let layout = RowCountSearch::new(tiles, w, h, min_aspect_ratio).run(exhaustive_limit);
    if let Some(l) = &layout {
        tracing::debug!(
            tiles = tiles.len(),
            rows = l.rows,
            viewport_use = l.viewport_use,
            "selected layout"
        );
    }
    layout
}

#[cfg(test)]
#[path = "../../tests/unit/layout/search.rs"]
mod tests;
