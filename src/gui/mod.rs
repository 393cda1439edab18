//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Thedal') and messages ('Message')
//! - update logic ('update()'), which turns clicks into `FilterCommand`s
//! - view layout ('view()'), desktop or compact, reading one `Snapshot`
//! - subscriptions (polling playback events)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::{Boot, Thedal};
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
