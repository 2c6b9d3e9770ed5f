pub mod error;
pub mod field;
pub mod launch;
pub mod request;
pub mod state;

pub use error::{Error, Result};
pub use field::*;
pub use launch::*;
pub use request::*;
pub use state::*;
