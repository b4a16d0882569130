//! HTTP Handlers

mod calculate;
mod ping;

pub use calculate::*;
pub use ping::*;
