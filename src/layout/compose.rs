use crate::{
    config::GAP,
    layout::{
        partition::partition_rows,
        row::{RowLayout, pack_row},
    },
    tile::model::{InputTile, Layout},
};

/// A one-row layout filling the whole `w` x `h` viewport.
pub(crate) fn single_row_layout(
    tiles: &[InputTile],
    w: f64,
    h: f64,
    min_aspect_ratio: f64,
) -> Option<Layout> {
    let row = pack_row(tiles, w, h, min_aspect_ratio)?;
    Some(Layout {
        rows: 1,
        row_height: row.fit.height,
        total_height: row.fit.height,
        viewport_use: row.viewport_use,
        video_weighted_use: row.video_weighted_use,
        tiles: row.tiles,
    })
}

/// Lay `tiles` out in exactly `rows` rows (clamped to the tile count).
///
/// Rows are partitioned assuming equal heights, then all re-packed at the
/// height of the shortest row so the grid stays uniform. `None` when gaps
/// leave no room for some row.
pub(crate) fn compose_rows(
    tiles: &[InputTile],
    w: f64,
    h: f64,
    rows: usize,
    min_aspect_ratio: f64,
) -> Option<Layout> {
    if rows == 1 {
        return single_row_layout(tiles, w, h, min_aspect_ratio);
    }
    let rows = rows.min(tiles.len());
    if rows == 0 {
        return None;
    }

    let gaps = GAP * (rows - 1) as f64;
    let usable_height = h - gaps;
    if usable_height <= 0.0 {
        return None;
    }
    let row_height = usable_height / rows as f64;
    let row_aspect_ratio = w / row_height;

    let ranges = partition_rows(tiles, rows, row_aspect_ratio);
    let tentative = ranges
        .iter()
        .map(|r| pack_row(&tiles[r.clone()], w, row_height, min_aspect_ratio))
        .collect::<Option<Vec<RowLayout>>>()?;
    let min_row_height = tentative
        .iter()
        .map(|row| row.fit.height)
        .fold(f64::INFINITY, f64::min);

    let total_height = min_row_height * rows as f64 + gaps;
    let y_offset = (h - total_height) / 2.0;

    let mut out = Vec::with_capacity(tiles.len());
    let mut viewport_use = 0.0;
    let mut video_weighted_use = 0.0;
    for (row_idx, range) in ranges.iter().enumerate() {
        let row = pack_row(&tiles[range.clone()], w, min_row_height, min_aspect_ratio)?;
        let y = y_offset + row_idx as f64 * (min_row_height + GAP);
        viewport_use += row.viewport_use;
        video_weighted_use += row.video_weighted_use;
        out.extend(row.tiles.into_iter().map(|mut t| {
            t.y = y;
            t
        }));
    }

    let scale = min_row_height / h;
    Some(Layout {
        tiles: out,
        rows,
        row_height: min_row_height,
        total_height,
        viewport_use: viewport_use * scale,
        video_weighted_use: video_weighted_use * scale,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/compose.rs"]
mod tests;
