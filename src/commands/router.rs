// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, ConfigExampleCommand, SearchCommand};
use crate::error::SearchError;
use crate::{Args, Result};

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Routing priority:
/// 1. Example configuration generation (--source-config-example)
/// 2. Identity search for DOMAIN (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    ///
    /// # Errors
    /// Returns an error if no mode can be derived from the arguments
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        if let Some(path) = &args.source.config_example {
            return Ok(Box::new(ConfigExampleCommand::new(path.clone())));
        }

        if args.domain.is_none() {
            return Err(SearchError::Config {
                message: "A DOMAIN argument is required".to_string(),
            }
            .into());
        }

        Ok(Box::new(SearchCommand::new(args)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_route_search() {
        let args = Args::try_parse_from(["crtsearch", "example.com"]).unwrap();
        let command = CommandRouter::route(args).unwrap();
        assert_eq!(command.name(), "SearchCommand");
    }

    #[test]
    fn test_route_config_example() {
        let args =
            Args::try_parse_from(["crtsearch", "--source-config-example", "out.toml"]).unwrap();
        let command = CommandRouter::route(args).unwrap();
        assert_eq!(command.name(), "ConfigExampleCommand");
    }

    #[test]
    fn test_route_without_domain_fails() {
        let err = match CommandRouter::route(Args::default()) {
            Ok(command) => panic!("routed to {} without a domain", command.name()),
            Err(err) => err,
        };
        let search_err = err.downcast_ref::<SearchError>().unwrap();
        assert_eq!(search_err.kind(), crate::error::ErrorKind::ConfigError);
    }
}
