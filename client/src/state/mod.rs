//! Shared client-side state modules.

pub mod logo_view;
