//! Scanner for URL templates and instances.
//!
//! [`scan`] walks the input once, left to right, and produces a flat
//! [`NodeList`](upat_ir::NodeList) plus the syntax diagnostics found on the
//! way. The same scanner serves templates (`/users/:id=number`) and the
//! concrete instances matched against them (`/users/42`).

mod scanner;

pub use scanner::{scan, ScanOutput};
