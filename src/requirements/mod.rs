//! Requirements file handling
//!
//! Parses requirement specifiers and merges plugin pins into an existing
//! listing while passing unrelated lines through untouched.

pub mod merge;
pub mod specifier;

pub use merge::*;
pub use specifier::*;
