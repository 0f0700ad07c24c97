pub mod player;
pub mod progression;
pub mod validation;

pub use player::{NewPlayer, Player, PlayerPatch, Profession, Race};
pub use progression::Progress;
