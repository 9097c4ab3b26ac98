//! Pointer-reactive custom cursor and magnetic particle field.
//!
//! `core` is the platform-agnostic engine (smoothing, color resolution,
//! particle simulation, renderer-agnostic drawing). The browser front-end
//! below it only exists on `wasm32` and drives the core from DOM events and
//! requestAnimationFrame, drawing on two overlay canvases.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod loading;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use app::{mount, start, FxHandle, FxOptions};
