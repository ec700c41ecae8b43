use std::{collections::HashMap, ops::Range};

use crate::{foundation::math::running_sums, tile::model::InputTile};

/// Best way to lay out the tiles from some index onward into a fixed number of rows.
#[derive(Clone, Copy, Debug)]
struct Split {
    cost: f64,
    first_row_len: usize,
}

/// Memoized search over `(start index, remaining rows)`.
///
/// The memo lives for one partitioning call only.
struct Partitioner {
    /// `row_sums[start][k]` is the summed aspect ratio of tiles `start..=start + k`.
    row_sums: Vec<Vec<f64>>,
    row_aspect_ratio: f64,
    memo: HashMap<(usize, usize), Split>,
}

impl Partitioner {
    fn len(&self) -> usize {
        self.row_sums.len()
    }

    fn row_cost(&self, start: usize, end: usize) -> f64 {
        let deviation = self.row_aspect_ratio - self.row_sums[start][end - start - 1];
        deviation * deviation
    }

    fn best(&mut self, start: usize, remaining_rows: usize) -> Split {
        let n = self.len();
        if remaining_rows == 1 {
            return Split {
                cost: self.row_cost(start, n),
                first_row_len: n - start,
            };
        }
        if let Some(split) = self.memo.get(&(start, remaining_rows)) {
            return *split;
        }

        let mut best = Split {
            cost: f64::INFINITY,
            first_row_len: 1,
        };
        let max_len = n - start - remaining_rows + 1;
        for len in 1..=max_len {
            let rest = self.best(start + len, remaining_rows - 1);
            let cost = self.row_cost(start, start + len) + rest.cost;
            // Strict comparison: the shortest first row wins ties.
            if cost < best.cost {
                best = Split {
                    cost,
                    first_row_len: len,
                };
            }
        }
        self.memo.insert((start, remaining_rows), best);
        best
    }
}

/// Split `tiles` into `rows` contiguous, non-empty rows whose summed natural
/// aspect ratios stay closest (least squares) to `row_aspect_ratio`.
///
/// Requires `1 <= rows <= tiles.len()`.
pub(crate) fn partition_rows(
    tiles: &[InputTile],
    rows: usize,
    row_aspect_ratio: f64,
) -> Vec<Range<usize>> {
    let n = tiles.len();
    if n == rows {
        return (0..n).map(|i| i..i + 1).collect();
    }

    let ratios: Vec<f64> = tiles.iter().map(|t| t.aspect_ratio).collect();
    let mut partitioner = Partitioner {
        row_sums: (0..n).map(|start| running_sums(&ratios[start..])).collect(),
        row_aspect_ratio,
        memo: HashMap::new(),
    };

    let mut out = Vec::with_capacity(rows);
    let mut start = 0;
    for remaining in (1..=rows).rev() {
        let len = partitioner.best(start, remaining).first_row_len;
        out.push(start..start + len);
        start += len;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/partition.rs"]
mod tests;
