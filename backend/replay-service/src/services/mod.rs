pub mod replay_counter;

pub use replay_counter::{ReplayCounter, SectionKey};
