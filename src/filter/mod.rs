pub mod ast;
pub mod clause;
pub mod date;
pub mod generate;

pub use ast::{DatePart, DatePartMap, Field, FieldType, Operator, Predicate};
pub use date::{decompose, DatePattern};
pub use generate::{FilterConfig, FilterGenerator};
