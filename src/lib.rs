//! waypoint: scroll-synced section navigation for terminal API reference
//! documents.
//!
//! The crate keeps three render surfaces (a grouped sidebar menu, an
//! "on this page" rail and a location fragment) consistent with whichever
//! section of a long scrolling document is currently in view, while
//! supporting programmatic jumps (with tracking suppression during the
//! smooth scroll) and a substring search overlay.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod content;
pub mod document;
pub mod nav;
pub mod registry;
pub mod scroll;
pub mod search;
pub mod tracker;
pub mod ui;
