use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use predicto::cli::{Cli, Commands, DraftCommands};
use predicto::config::PredictoConfig;
use predicto::model::{Addons, FEATURE_CATALOG, ProjectInput};
use predicto::storage::DraftStore;
use predicto::{engine, report};

fn main() -> Result<()> {
    let cli = Cli::parse();
    predicto::logging::init(cli.verbose, cli.log_file.clone());

    let config = PredictoConfig::load().context("Failed to load predicto configuration")?;
    let draft_path = config
        .draft_path(cli.draft_path.clone())
        .context("Failed to resolve draft path")?;
    let store = DraftStore::new(draft_path);

    match cli.command {
        Commands::Wizard => {
            predicto::tui::run_tui(store, config)?;
            Ok(())
        }
        Commands::Estimate {
            project_type,
            complexity,
            team_size,
            duration,
            feature,
            cloud,
            security,
            analytics,
            location,
            tech_stack,
            from_draft,
            output,
            json,
        } => {
            let input = if from_draft {
                if !store.exists() {
                    bail!("No saved draft. Run 'predicto wizard' first.");
                }
                store.load()
            } else {
                let mut input = ProjectInput {
                    project_type: Some(
                        project_type
                            .map(Into::into)
                            .context("--type is required (or use --from-draft)")?,
                    ),
                    complexity: Some(
                        complexity
                            .map(Into::into)
                            .context("--complexity is required (or use --from-draft)")?,
                    ),
                    team_size: Some(
                        team_size.context("--team-size is required (or use --from-draft)")?,
                    ),
                    duration_weeks: Some(
                        duration.context("--duration is required (or use --from-draft)")?,
                    ),
                    location,
                    tech_stack,
                    addons: Addons {
                        cloud,
                        security,
                        analytics,
                    },
                    ..Default::default()
                };
                for f in &feature {
                    if !FEATURE_CATALOG.contains(&f.as_str()) {
                        bail!(
                            "Unknown feature '{}'. Run 'predicto features' for the catalog.",
                            f
                        );
                    }
                    input.toggle_feature(f);
                }
                input
            };

            let estimate = engine::generate(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                report::render(&input, &estimate, &config.estimator.currency);
            }

            if let Some(path) = output {
                report::export(&input, &estimate, &path)?;
                println!("{} {}", "Exported".green(), path.display());
            }
            Ok(())
        }
        Commands::Draft(draft_command) => match draft_command {
            DraftCommands::Show { json } => {
                if !store.exists() {
                    println!("No draft saved.");
                    return Ok(());
                }
                let input = store.load();
                if json {
                    println!("{}", serde_json::to_string_pretty(&input)?);
                } else {
                    print_draft(&input);
                }
                Ok(())
            }
            DraftCommands::Clear => {
                store.clear()?;
                println!("{} draft", "Cleared".yellow());
                Ok(())
            }
            DraftCommands::Path => {
                println!("{}", store.path().display());
                Ok(())
            }
        },
        Commands::Features => {
            println!(
                "Feature catalog (+{} per feature):",
                report::format_amount(engine::cost::FEATURE_UNIT_COST)
            );
            for feature in FEATURE_CATALOG {
                println!("  - {}", feature);
            }
            Ok(())
        }
    }
}

fn print_draft(input: &ProjectInput) {
    let dash = || "-".to_string();
    println!("{}", "Saved draft".bold());
    println!(
        "Type:        {}",
        input
            .project_type
            .map(|p| p.to_string())
            .unwrap_or_else(dash)
            .blue()
    );
    println!(
        "Complexity:  {}",
        input
            .complexity
            .map(|c| c.to_string())
            .unwrap_or_else(dash)
    );
    println!(
        "Team size:   {}",
        input.team_size.map(|n| n.to_string()).unwrap_or_else(dash)
    );
    println!(
        "Duration:    {}",
        input
            .duration_weeks
            .map(|w| format!("{} weeks", w))
            .unwrap_or_else(dash)
    );
    if let Some(ref location) = input.location {
        println!("Location:    {}", location);
    }
    if !input.features.is_empty() {
        println!("Features:    {}", input.features.join(", ").magenta());
    }
    let addons: Vec<_> = predicto::model::Addon::ALL
        .iter()
        .filter(|a| input.addons.get(**a))
        .map(|a| a.to_string())
        .collect();
    if !addons.is_empty() {
        println!("Add-ons:     {}", addons.join(", "));
    }
    if let Some(ref stack) = input.tech_stack {
        println!("Tech stack:  {}", stack);
    }
    if !input.documents.is_empty() {
        println!(
            "Documents:   {}",
            input
                .documents
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}
