//! Type-safe wrappers and enums shared by the CLI and library.

pub mod ids;
pub mod role;

pub use ids::TeamId;
pub use role::Role;
