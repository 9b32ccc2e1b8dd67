//! Console presentation: board rendering and the line-oriented input/output
//! channel used by move sources and the engine prompts.

mod console;

pub use console::{Console, UserIo};
