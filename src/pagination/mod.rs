pub mod request;

pub use request::{PageRequest, PlayerOrder};
