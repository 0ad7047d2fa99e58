//! Minesweeper game engine: a square [`Board`] with mines placed on the first reveal, wrapped by a
//! [`GameSession`] that drives the `AwaitingFirstMove -> InProgress -> Won | Lost` state machine.
//!
//! The engine does no I/O. Every operation returns an outcome value describing what changed and the
//! caller decides how to render it.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod layout;
mod session;
mod types;
