#![doc = include_str!("../README.md")]

mod construct;
mod error;
mod order;
mod render;
mod siamese;
mod square;
mod strachey;
#[cfg(feature = "wasm")]
mod wasm;

pub use construct::construct;
pub use error::{MagicSquareError, Result};
pub use order::Order;
pub use render::{RenderOptions, render, render_to_string};
pub use square::{MAX_ORDER, MagicSquare, magic_constant};
