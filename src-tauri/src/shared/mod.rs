//! Usage: Cross-cutting utilities shared across the shell (low-level helpers).

pub(crate) mod mutex_ext;
