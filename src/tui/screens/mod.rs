//! Individual screen implementations.

mod playing;
mod setup;

pub use playing::PlayingScreen;
pub use setup::SetupScreen;
