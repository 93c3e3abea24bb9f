//! A discrete-time, three-valued gate-level digital logic simulation engine.
//!
//! The crate owns the whole combinational simulation core: the ternary
//! logic algebra ([`value`]), the graph primitives ([`net`], [`gate`],
//! [`pad`]), the timed stimulus/recording layer ([`pad_state`],
//! [`vector`]), and the owning [`circuit::Circuit`] that drives the
//! simulation loop. Text formats, rendering, and interactive front-ends
//! live outside this crate — see `gatesim-cli`.

mod circuit;
mod engine;
mod error;
mod gate;
mod ids;
mod net;
mod pad;
mod pad_state;
mod value;
mod vector;

pub use circuit::Circuit;
pub use error::GateError;
pub use gate::{Gate, GateKind};
pub use ids::{GateId, NetId, NodeRef, PadId};
pub use net::Net;
pub use pad::{Pad, PadKind};
pub use pad_state::PadState;
pub use value::Value;
pub use vector::Vector;

pub(crate) use fxhash::FxHashMap as HashMap;
