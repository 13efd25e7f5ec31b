pub mod player;

pub use player::{AudioError, AudioPlayer};
