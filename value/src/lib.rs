//! Value binding layer over the `math` kernel. Every kernel type is wrapped
//! as an immutable, dynamically-typed [`Value`]; operators inspect the type
//! of the right-hand operand and dispatch to the matching kernel operation,
//! always constructing a fresh value.

mod error;
mod types;

pub use error::{ValueError, ValueResult};
pub use types::{matrix4x4, quaternion, vector3, Value};
