//! Round engine, multiplayer coordination and the presentation seam

mod engine;
mod roles;
mod round;
pub mod rules;
mod sink;

pub use engine::{GameEngine, SubmitOutcome};
pub use roles::RoleCoordinator;
pub use round::{GameMode, GuessRow, Mode, Phase, Player, Role, RoundState};
pub use sink::{EventLog, PresentationSink, SinkEvent};
