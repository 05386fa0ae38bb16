//! Platform-neutral helpers shared by components.

pub mod format;
pub mod timing;
