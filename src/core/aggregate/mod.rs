//! core/aggregate/mod.rs
//!
//! Aggregators: filtered songs -> plain read-only tables for the views.
//! Every function here is pure and total; empty input gives empty output.

pub mod collab;
pub mod counts;
pub mod hierarchy;
pub mod timeline;

pub use collab::{
    ArtistProfile, CollaborationKey, CollaborationLink, CollaborationRecord, LinkStrength,
    artist_profiles, group_collaborations, link_collaborations, records_active_in,
};
pub use counts::{CountEntry, count_by, distinct_values, top_k, total, year_series};
pub use hierarchy::{HierarchyNode, RadarSeries, TreemapGroup, radar, sunburst, treemap};
pub use timeline::{
    DecadeBucket, DecadeStream, YearBucket, bucket_by_decade, bucket_by_year, decade_of,
    decade_streams,
};
