//! Layout stages, leaf first: crop floor, single-row packing, row partitioning,
//! multi-row composition, row-count search and the no-video grouping pass.

pub(crate) mod compose;
pub(crate) mod crop;
pub(crate) mod novideo;
pub(crate) mod partition;
pub(crate) mod row;
pub(crate) mod search;
