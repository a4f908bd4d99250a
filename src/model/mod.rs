//! Pure data structures for the delivery board.

pub mod order;
pub mod summary;
pub mod undeliverable;

pub use order::*;
pub use summary::*;
pub use undeliverable::*;
