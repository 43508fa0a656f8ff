//! # Canvas
//!
//! The drawable surface the renderer targets: an RGB pixel buffer plus the
//! small set of alpha-blended primitives the effect layers need (filled
//! rects, points, axis-aligned lines, stroked circles).
//!
//! Every primitive takes an immutable [`Brush`] describing color, alpha and
//! stroke width for that one call. There is no shared mutable paint state to
//! restore, so a layer can never leak stroke mode into the next one.

pub mod draw;
pub mod types;

pub use types::{Brush, Canvas, BLACK, CYAN, GREEN, WHITE};
