pub mod catalog;
pub mod health;
pub mod recommendation;
pub mod server;
pub mod stats;
