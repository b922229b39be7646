// crtsearch - certificate common-name identities from crt.sh
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use clap::Parser;
use crtsearch::Args;
use crtsearch::commands::CommandRouter;
use crtsearch::logging::{FatalReporter, FileFatalLog};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging - respect RUST_LOG environment variable
    let default_level = if args.output.verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(default_level);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    if args.output.no_color {
        colored::control::set_override(false);
    }

    let reporter = FatalReporter::new(Box::new(FileFatalLog::new(&args.output.error_log)))
        .with_color(!args.output.no_color && std::io::stderr().is_terminal());

    let result = match CommandRouter::route(args) {
        Ok(command) => {
            debug!("Executing {}", command.name());
            command.execute().await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.report(&e.to_string(), &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
