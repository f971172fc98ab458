// Canonical input capture for relative mouse-look games

pub mod engine;

pub use engine::input;
