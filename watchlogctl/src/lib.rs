//! Library half of the `watchlog` command: argument definitions, catalog
//! loading and terminal rendering. The binary only wires logging and config
//! around [`commands`].

#![allow(missing_docs)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod condition;
pub mod render;
