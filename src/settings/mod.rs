//! Configuration loading and resolution.
//!
//! [`load`] layers default files, `--config` files, `BOOKSY__` environment
//! variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`].

mod error;
mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
