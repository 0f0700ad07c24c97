pub mod players;
pub mod server;
