//! # Predicto - a terminal project-estimation wizard
//!
//! Predicto walks you through describing a software project (type,
//! complexity, team, duration, features, add-ons) and produces a
//! deterministic cost, timeline, risk, and team-composition estimate.
//! The in-progress draft is persisted on every change, so quitting and
//! relaunching resumes where you left off.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive wizard
//! predicto wizard
//!
//! # One-shot estimate
//! predicto estimate -t ai -c high --team-size 10 --duration 10 --cloud
//!
//! # Inspect the saved draft
//! predicto draft show
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`engine`]: The pure estimation models (cost, risk, team, timeline)
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (`ProjectInput`, `EstimateResult`, enums)
//! - [`report`]: Result rendering, derived display values, and export
//! - [`storage`]: Draft persistence
//! - [`tui`]: Terminal user interface
//! - [`wizard`]: The wizard state machine

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
pub mod config;

/// The estimation engine.
///
/// Four pure models over a `ProjectInput`, assembled into one
/// `EstimateResult`.
pub mod engine;

/// Error types and result aliases.
///
/// Defines the `PredictoError` enum and `Result<T>` type alias.
pub mod error;

/// Data models.
pub mod model;

/// Result presentation: terminal report, market band, cost drivers, export.
pub mod report;

/// Draft persistence.
pub mod storage;

/// Terminal user interface.
///
/// Interactive wizard built with ratatui.
pub mod tui;

/// The wizard state machine: step gating and autosave.
pub mod wizard;

pub mod logging;
