pub mod flatten;
pub mod stats;
pub mod tree;
