//! Client Module
//!
//! The interactive side: command resolution, dispatch, and the session loop.
//!
//! ## Flow
//! Session → CommandTable (resolve) → Dispatcher → protocol codec → Transport

mod command;
mod console;
mod dispatcher;
mod session;

pub use command::{tokenize, ClientCommand, CommandTable, Parsed, Verb, HELP_TEXT};
pub use console::Console;
pub use dispatcher::{Dispatcher, Outcome};
pub use session::{CloseReason, Session};
