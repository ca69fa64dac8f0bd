//! Data handles: one datum, several physical representations.
//!
//! - [`DataHandle`] - value / file / stream with lazy conversion
//! - [`TypedDataHandle`] - literal values coerced to a declared type
//! - [`Value`], [`LiteralType`] - what the value representation holds

mod data_handle;
mod stream;
mod typed;
mod value;

pub use data_handle::{ContentMode, DataHandle, SourceKind};
pub use stream::HandleStream;
pub use typed::{TypedDataHandle, Validator};
pub use value::{LiteralType, Value};
