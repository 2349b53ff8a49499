//! Typed loader for the site settings manifest.
//!
//! The manifest is a flat YAML mapping read once per build by the site
//! generator. [`Settings`] is the loaded, read-only form of it.

mod error;
mod link;
mod pagination;
mod settings;
mod site;

pub mod path;
pub mod slug;

pub use self::error::*;
pub use self::link::*;
pub use self::pagination::*;
pub use self::settings::*;

pub use self::path::RelPath;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
