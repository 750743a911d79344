//! Authentication domain types

mod types;
mod wire;

pub use types::AuthConfig;
pub use wire::{WireAuth, display_label, wire_label};
