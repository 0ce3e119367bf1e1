pub mod coord;
pub mod driver;
pub mod error;
pub mod grid;
pub mod protocol;
pub mod search;
pub mod strategy;
pub mod world;

pub use coord::*;
pub use driver::*;
pub use error::*;
pub use grid::*;
pub use protocol::*;
pub use search::*;
pub use strategy::*;
pub use world::*;
