pub mod error;
pub mod filter;
pub mod form;
pub mod output;
pub mod source;

pub use error::{FilterError, Result};
pub use filter::{FilterConfig, FilterGenerator};
