//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! state storage so the controller and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{detect_winner, winning_line};
