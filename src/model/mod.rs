mod common;
mod filter;
mod link;
mod profile;

pub use common::*;
pub use filter::*;
pub use link::*;
pub use profile::*;
