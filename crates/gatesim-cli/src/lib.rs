//! Text parsers, an ASCII timing-diagram renderer, and the supporting
//! error type for the `gatesim` command-line front-end.
//!
//! This crate has no algorithmic content of its own: it reads a netlist
//! and a stimulus file, drives [`gatesim::Circuit`], and draws the
//! result. See `main.rs` for the interactive/non-interactive prompt flow.

mod error;
mod netlist;
mod render;
mod stimulus;

pub use error::CliError;
pub use netlist::parse_netlist;
pub use render::render_timing_diagram;
pub use stimulus::parse_stimulus;
