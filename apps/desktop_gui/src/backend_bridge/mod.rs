//! Backend bridge: image fetch commands and the worker thread that serves them.

pub mod commands;
pub mod runtime;
