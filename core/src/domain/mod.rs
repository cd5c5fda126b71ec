pub mod catalog;
pub mod common;
pub mod recommendation;
pub mod statistics;
