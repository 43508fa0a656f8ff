//! # Frame Rendering
//!
//! [`RenderState`] carries the animation state that survives between frames;
//! [`FrameRenderer`] is the per-tick entry point that clears the canvas,
//! advances the state, and applies the layer stack.

pub mod engine;
pub mod state;

pub use engine::{FrameOutcome, FrameRenderer};
pub use state::RenderState;
