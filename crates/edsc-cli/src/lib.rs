//! Library side of the `edsc` command-line tool.

#![allow(missing_docs)]

pub mod forward;
pub mod logging;
pub mod render;
