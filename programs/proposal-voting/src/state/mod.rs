pub mod election;
pub use election::*;

pub mod events;
pub use events::*;

pub mod phase;
pub use phase::*;
