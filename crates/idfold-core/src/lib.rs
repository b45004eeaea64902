#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the idfold project.

Do NOT depend on this crate directly.
Use `idfold-io` instead.
"#]

pub mod error;
pub mod fold;
pub mod preset;
pub mod random;
