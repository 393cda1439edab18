//! Thedal: a filter-and-aggregate dashboard over a catalog of film songs.
//!
//! `core` is GUI-free and fully testable on its own. `config` reads the
//! dashboard settings file. The iced front end lives in the binary.

pub mod config;
pub mod core;
