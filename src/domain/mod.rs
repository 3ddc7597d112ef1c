//! Domain logic - pure version rules independent of git and the network

pub mod prerelease;
pub mod release_type;
pub mod tag;
pub mod version;

pub use release_type::ReleaseType;
pub use tag::{select_latest, Tag};
pub use version::{bump, next_version};
