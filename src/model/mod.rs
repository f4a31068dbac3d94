mod event;
mod leaderboard;
mod matches;
mod round;
mod rows;
mod season;
mod standing;

pub use event::*;
pub use leaderboard::*;
pub use matches::*;
pub use round::*;
pub use rows::*;
pub use season::*;
pub use standing::*;
