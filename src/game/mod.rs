// Funnel drop minigame
//
// Tap the funnel to drop the ball; when the ball passes through the target,
// the target turns green.

pub mod layout;
pub mod world;

pub use world::GameWorld;
