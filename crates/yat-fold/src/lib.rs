//! Yat constant folder.
//!
//! Rewrites provably constant subtrees into `Number` literals, in place.
//! The rules are syntactic: a `Reference` is never assumed to hold a known
//! value, so folding never consults a scope and never fails.

pub mod folder;

pub use folder::{fold, ConstantFolder};
