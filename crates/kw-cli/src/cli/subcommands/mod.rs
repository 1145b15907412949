mod review;
mod session;
mod study;
mod tools;
mod typo;
mod voices;

pub use review::{ReviewCommands, ReviewFilterArgs};
pub use session::SessionCommands;
pub use study::{ExportArgs, StudyCommands};
pub use tools::ToolsCommands;
pub use typo::TypoCommands;
pub use voices::VoicesCommands;
