pub mod connection;
pub mod players;
pub mod query;
pub mod repository;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use players::SqlitePlayerRepository;
pub use repository::PlayerRepository;
