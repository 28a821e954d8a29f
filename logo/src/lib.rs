//! Physics logo engine for the search homepage.
//!
//! Everything except the DOM glue in [`measure`] and [`engine::Engine`] is
//! plain Rust and is tested natively; the crate also builds for wasm. The
//! engine takes the letters from measurement to a centered static row, then
//! on activation into a rapier world that is stepped once per animation
//! frame, dragged with the pointer, and torn down on resize or unmount. The
//! UI layer forwards DOM events, performs the returned [`engine::Action`]s,
//! and draws whatever poses the engine publishes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] state machine |
//! | [`glyph`] | Logo letters, font spec, and the measurement trait |
//! | [`measure`] | DOM probe implementation of [`glyph::TextMeasurer`] |
//! | [`layout`] | Static centered layout and pose fallbacks |
//! | [`physics`] | Pixel-space world over `rapier2d` |
//! | [`session`] | One activation's world, letter bodies, and frame-loop token |
//! | [`input`] | Pointer buttons and the drag constraint |
//! | [`broadcast`] | Pose subscription boundary to the renderer |
//! | [`config`] | Tunable layout and physics parameters |
//! | [`consts`] | Default numeric constants |
//! | [`error`] | [`error::LogoError`] |

pub mod broadcast;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod glyph;
pub mod input;
pub mod layout;
pub mod measure;
pub mod physics;
pub mod session;
