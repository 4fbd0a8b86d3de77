pub mod database;
pub mod day;
pub mod node;

pub use database::{Database, Tag};
pub use day::{Day, PackedDate};
pub use node::Node;
