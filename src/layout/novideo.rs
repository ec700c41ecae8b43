use crate::{
    config::{GAP, NOVIDEO_SPLIT},
    layout::search::find_optimal_layout,
    tile::model::{InputTile, Layout, OutputTile},
};

/// Placeholder standing in for up to `NOVIDEO_SPLIT` no-video tiles.
fn placeholder(group: &[InputTile]) -> Option<InputTile> {
    let first = group.first()?;
    Some(InputTile {
        id: first.id.clone(),
        aspect_ratio: first.aspect_ratio,
        can_be_cropped: true,
        is_focused: false,
        has_video: false,
    })
}

/// Split a placeholder slot into equal horizontal bands, one per group member.
///
/// Bands are always sized for a full group, so a short group leaves the
/// bottom of the slot empty.
fn expand_slot(slot: &OutputTile, group: &[InputTile]) -> impl Iterator<Item = OutputTile> {
    let band = ((slot.height - GAP * (NOVIDEO_SPLIT - 1) as f64) / NOVIDEO_SPLIT as f64).max(0.0);
    group.iter().enumerate().map(move |(j, member)| OutputTile {
        id: member.id.clone(),
        y: slot.y + (band + GAP) * j as f64,
        height: band,
        ..slot.clone()
    })
}

/// Lay out a mix of live and no-video tiles.
///
/// No-video tiles are packed into placeholders of up to `NOVIDEO_SPLIT`
/// members that take part in the row-count search as ordinary tiles, then
/// each placeholder slot is split back into one band per member. Sets that
/// are all live or all no-video go straight to the search.
pub(crate) fn layout_with_no_video_groups(
    tiles: &[InputTile],
    w: f64,
    h: f64,
    min_aspect_ratio: f64,
    exhaustive_limit: usize,
) -> Option<Layout> {
    let (mut video, mut no_video): (Vec<InputTile>, Vec<InputTile>) =
        tiles.iter().cloned().partition(|t| t.has_video);
    if video.is_empty() || no_video.is_empty() {
        return find_optimal_layout(tiles, w, h, min_aspect_ratio, exhaustive_limit);
    }

    // A lone leftover would get a whole placeholder to itself; lay it out as a regular tile.
    if no_video.len() % NOVIDEO_SPLIT == 1 {
        video.push(no_video.remove(0));
    }
    let groups: Vec<&[InputTile]> = no_video.chunks(NOVIDEO_SPLIT).collect();
    video.extend(groups.iter().copied().filter_map(placeholder));
    tracing::debug!(
        live = video.len() - groups.len(),
        no_video = no_video.len(),
        placeholders = groups.len(),
        "grouped no-video tiles"
    );

    let mut layout = find_optimal_layout(&video, w, h, min_aspect_ratio, exhaustive_limit)?;
    if groups.is_empty() {
        return Some(layout);
    }

    let slots = layout.tiles.split_off(layout.tiles.len() - groups.len());
    for (slot, group) in slots.iter().zip(&groups) {
        layout.tiles.extend(expand_slot(slot, group));
    }
    Some(layout)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/novideo.rs"]
mod tests;
