// Commands module - Command Pattern implementation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod command;
mod router;

// Individual command implementations
mod config_example;
mod search;

pub use command::Command;
pub use router::CommandRouter;

pub use config_example::ConfigExampleCommand;
pub use search::SearchCommand;
