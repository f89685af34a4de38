pub mod organizer;
pub mod sweepstake;

pub use organizer::*;
pub use sweepstake::*;
