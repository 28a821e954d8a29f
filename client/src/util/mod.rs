//! Browser helpers used by the hydrated client.

#[cfg(feature = "hydrate")]
pub mod animation_frame;
