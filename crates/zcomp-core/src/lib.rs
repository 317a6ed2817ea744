//! Command tree model, flag classification and zsh completion script
//! emission for zcomp

pub mod classify;
pub mod error;
pub mod host;
pub mod manifest;
pub mod model;
pub mod sanitize;
pub mod zsh;

pub use error::Error;
