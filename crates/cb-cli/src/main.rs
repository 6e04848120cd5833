//! cb - case board CLI
//!
//! Drives the Kanban workflow engine against a running case API.
//!
//! # Examples
//!
//! ```bash
//! # Show the board
//! cb board
//!
//! # Drag a case to the invoice stage
//! cb move ORD-1042 invoice
//!
//! # Complete a delivered case
//! cb complete ORD-1042
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod log_level;
mod logger;
mod notify;
mod render;


use crate::cli::Cli;
use crate::commands::Commands;
use crate::config::CliConfig;
use crate::log_level::LogLevel;
use crate::notify::ConsoleNotifier;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use cb_board::{BoardController, DragTarget, Placement, SyncCoordinator};
use cb_client::BoardClient;
use cb_core::StageColumn;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .map(|s| LogLevel::from_str(s).unwrap_or_default())
        .or(config.log_level)
        .unwrap_or_default();
    if let Err(e) = logger::initialize(
        log_level,
        config.log_file.clone(),
        std::io::stderr().is_terminal(),
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server_url().to_string());
    let client = BoardClient::new(&server_url);
    let notifier = Arc::new(ConsoleNotifier::default());
    let mut controller = BoardController::new(
        SyncCoordinator::new(client),
        Arc::clone(&notifier),
        config.actor(),
    );

    controller.refresh().await;

    match cli.command {
        Commands::Board { search } => {
            render::print_board(controller.board(), search.as_deref().unwrap_or(""));
        }

        Commands::Move {
            id,
            stage,
            before,
            after,
        } => {
            let stage = match StageColumn::from_str(&stage) {
                Ok(stage) => stage,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if controller.board().find_container(&id).is_none() {
                eprintln!("Error: case {id} is not on the board");
                return ExitCode::FAILURE;
            }

            let anchor = before.clone().or(after.clone());
            if let Some(over_id) = &anchor
                && controller.board().find_container(over_id) != Some(stage)
            {
                eprintln!("Error: card {over_id} is not in the {stage} stage");
                return ExitCode::FAILURE;
            }

            controller.start(&id);
            match anchor {
                Some(over_id) => {
                    let placement = if before.is_some() {
                        Placement::Before
                    } else {
                        Placement::After
                    };
                    controller.hover(&DragTarget::Card(over_id.clone()), placement);
                    controller.drop(DragTarget::Card(over_id)).await;
                }
                None => controller.drop(DragTarget::Column(stage)).await,
            }
            render::print_board(controller.board(), "");
        }

        Commands::Complete { id } => match controller.board().find_container(&id) {
            Some(column) if column == StageColumn::last() => {
                controller.start(&id);
                controller.drop(DragTarget::Sink).await;
            }
            Some(column) => {
                eprintln!(
                    "Error: case {id} is in the {column} stage; only delivered cases can be completed"
                );
                return ExitCode::FAILURE;
            }
            None => {
                eprintln!("Error: case {id} is not on the board");
                return ExitCode::FAILURE;
            }
        },

        Commands::Trash { id } => match controller.board().find_container(&id) {
            Some(column) if column != StageColumn::last() => {
                controller.start(&id);
                controller.drop(DragTarget::Sink).await;
            }
            Some(_) => {
                eprintln!(
                    "Error: case {id} is in the delivery stage; the sink would complete it, use `cb complete`"
                );
                return ExitCode::FAILURE;
            }
            None => {
                eprintln!("Error: case {id} is not on the board");
                return ExitCode::FAILURE;
            }
        },
    }

    if notifier.saw_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
