//! Terminal presentation for the `skyhook` binary.
//!
//! Design tokens live in `theme`; everything that draws goes through
//! `UiContext` so color, unicode and animation degrade together.

pub mod activity;
pub mod blocks;
pub mod context;
pub mod live_region;
pub mod menu;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod widgets;
