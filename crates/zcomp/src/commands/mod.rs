//! CLI command implementations

pub mod completion;
pub mod generate;
pub mod inspect;
pub mod version;
