//! Bearer tokens and the provider contract the dispatcher consults before every request.

pub mod provider;
pub mod token;

pub use provider::*;
pub use token::*;
