pub mod create_election;
pub use create_election::*;

pub mod registration;
pub use registration::*;

pub mod workflow;
pub use workflow::*;

pub mod proposal;
pub use proposal::*;

pub mod vote;
pub use vote::*;

pub mod inspect;
pub use inspect::*;

pub mod administrator;
pub use administrator::*;
