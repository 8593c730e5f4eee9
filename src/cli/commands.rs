use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "predicto")]
#[command(
    author,
    version,
    about = "A terminal wizard for deterministic software project estimation"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the draft slot (overrides config)
    #[arg(long, global = true)]
    pub draft_path: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive estimation wizard
    #[command(visible_alias = "w")]
    Wizard,

    /// Generate an estimate directly from flags
    #[command(visible_alias = "e")]
    Estimate {
        /// Project type
        #[arg(short = 't', long = "type", value_enum)]
        project_type: Option<ProjectTypeArg>,

        /// Complexity level
        #[arg(short, long, value_enum)]
        complexity: Option<ComplexityArg>,

        /// Number of team members
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        team_size: Option<u32>,

        /// Expected duration in weeks
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        duration: Option<u32>,

        /// Catalog feature to include (repeatable)
        #[arg(short, long)]
        feature: Vec<String>,

        /// Include the cloud setup add-on
        #[arg(long)]
        cloud: bool,

        /// Include the security hardening add-on
        #[arg(long)]
        security: bool,

        /// Include the analytics dashboard add-on
        #[arg(long)]
        analytics: bool,

        /// Project location (descriptive only)
        #[arg(long)]
        location: Option<String>,

        /// Tech stack (descriptive only)
        #[arg(long)]
        tech_stack: Option<String>,

        /// Estimate from the saved draft instead of flags
        #[arg(long)]
        from_draft: bool,

        /// Write the export artifact to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or clear the saved draft
    #[command(subcommand)]
    Draft(DraftCommands),

    /// List the feature catalog
    Features,
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show the saved draft
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete the saved draft
    Clear,

    /// Print the draft slot path
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectTypeArg {
    Web,
    Mobile,
    Ai,
    Ecommerce,
}

impl From<ProjectTypeArg> for crate::model::ProjectType {
    fn from(arg: ProjectTypeArg) -> Self {
        match arg {
            ProjectTypeArg::Web => crate::model::ProjectType::Web,
            ProjectTypeArg::Mobile => crate::model::ProjectType::Mobile,
            ProjectTypeArg::Ai => crate::model::ProjectType::Ai,
            ProjectTypeArg::Ecommerce => crate::model::ProjectType::Ecommerce,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ComplexityArg {
    Low,
    Medium,
    High,
}

impl From<ComplexityArg> for crate::model::Complexity {
    fn from(arg: ComplexityArg) -> Self {
        match arg {
            ComplexityArg::Low => crate::model::Complexity::Low,
            ComplexityArg::Medium => crate::model::Complexity::Medium,
            ComplexityArg::High => crate::model::Complexity::High,
        }
    }
}
