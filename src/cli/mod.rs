//! Command-line interface for tl
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::record::Priority;
use crate::session::Session;
use crate::storage::Storage;
use crate::view::StatusFilter;

mod add;
mod list;
mod modify;
mod reorder;
mod tags;

/// tl - Task List
///
/// A personal task list: create, complete, delete, tag, filter, search,
/// and manually reorder tasks, persisted locally.
#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "TL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emit events as JSONL to a file, or "-" for stdout
    #[arg(long, global = true)]
    pub events: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        desc: String,

        /// Comma-separated tags (e.g. "shop,errand")
        #[arg(short, long)]
        tags: Option<String>,

        /// Priority: low, medium, high
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// List tasks, optionally filtered
    List {
        /// Show all, active, or completed tasks
        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Only tasks carrying at least one of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Case-insensitive substring of title or description
        #[arg(long)]
        search: Option<String>,
    },

    /// Toggle a task between active and completed
    Toggle {
        /// Task id (unique prefix accepted)
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task id (unique prefix accepted)
        id: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Commit a new order for the listed tasks
    ///
    /// Ids give the new relative order of the tasks you saw; tasks not
    /// listed keep their positions relative to each other.
    Reorder {
        /// Task ids in the desired order (unique prefixes accepted)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show every tag in use
    Tags,
}

impl Cli {
    /// Dispatch to the selected subcommand
    pub fn run(self) -> Result<()> {
        let events_to_stdout = self
            .events
            .as_deref()
            .map(|value| value.trim() == "-")
            .unwrap_or(false);
        let options = crate::output::OutputOptions {
            json: self.json && !events_to_stdout,
            quiet: self.quiet,
        };
        let (mut session, config) = open_session(self.data_dir.as_deref())?;
        let events = self.events.as_deref();

        match self.command {
            Commands::Add {
                title,
                desc,
                tags,
                priority,
            } => add::run(
                &mut session,
                &config,
                add::Options {
                    title,
                    desc,
                    tags,
                    priority,
                },
                events,
                options,
            ),
            Commands::List {
                status,
                tags,
                search,
            } => list::run(&mut session, status, tags, search, options),
            Commands::Toggle { id } => modify::toggle(&mut session, &id, events, options),
            Commands::Rm { id } => modify::rm(&mut session, &id, events, options),
            Commands::Clear => modify::clear(&mut session, events, options),
            Commands::Reorder { ids } => reorder::run(&mut session, &ids, events, options),
            Commands::Tags => tags::run(&session, options),
        }
    }
}

/// Resolve the data directory, load config, and open a session.
///
/// An explicit `--data-dir` (or TL_DATA_DIR) wins over `[store] dir` in
/// `tl.toml`, which wins over the platform default.
fn open_session(flag_dir: Option<&std::path::Path>) -> Result<(Session, Config)> {
    let base = match flag_dir {
        Some(dir) => dir.to_path_buf(),
        None => Storage::default_dir()?,
    };
    let config = Config::load_from_dir(&base);

    let dir = match (flag_dir, &config.store.dir) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => dir.clone(),
        (None, None) => base,
    };

    Ok((Session::open(Storage::new(dir)), config))
}
