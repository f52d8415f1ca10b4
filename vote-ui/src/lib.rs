//! Dioxus components and D3.js bridge for vote trend pages.
//!
//! This crate provides:
//! - `model`: `VoteTrendSample` and the closed `SortOption` set
//! - `chart`: the fixed-configuration trend chart description
//! - `js_bridge`: Rust wrappers for the D3.js chart via `js_sys::eval()`
//! - `theme`: opaque theme tokens
//! - `components`: `TrendDisplay`, `SortSelector` and small page helpers

pub mod chart;
pub mod components;
pub mod js_bridge;
pub mod model;
pub mod theme;

pub use model::{SortOption, VoteTrendSample};
