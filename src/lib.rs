extern crate colored;
extern crate errno;
extern crate libc;
extern crate thiserror;

#[macro_use]
pub mod log;
pub mod libc_utils;
pub mod config;
pub mod error;
pub mod flags;
pub mod launcher;
