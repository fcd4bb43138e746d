//! # CLI Layer
//!
//! This module is **one possible client** of the catalog. It is the only place
//! in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. **Parse** shell arguments into typed commands via clap
//! 2. **Trace**: install the stderr subscriber (`RUST_LOG`, `--verbose`)
//! 3. **Configure**: load `ShipyardConfig`, let `--data-file` override it
//! 4. **Dispatch** to the `ShipService` over a `FileStore`
//! 5. **Render** as a table or JSON
//!
//! Errors bubble up as `anyhow::Error`; `main` picks the exit code.

use super::render;
use super::setup::{Cli, Commands, PageArgs};
use anyhow::Context;
use clap::Parser;
use shipyardapp::api::ShipService;
use shipyardapp::config::ShipyardConfig;
use shipyardapp::criteria::ShipCriteria;
use shipyardapp::model::{ShipDraft, ShipId};
use shipyardapp::page::PageRequest;
use shipyardapp::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ShipyardConfig::load(cli.config.as_deref())?;
    let data_file = match &cli.data_file {
        Some(path) => path.clone(),
        None => config.data_file()?,
    };
    debug!(data_file = %data_file.display(), "opening catalog");

    let mut service = ShipService::new(FileStore::new(data_file));
    let out = dispatch(&mut service, &config, cli.command, cli.json)?;
    print!("{}", out);
    Ok(())
}

/// Installs a compact subscriber on stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,shipyard=debug,shipyardapp=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn page_request(args: PageArgs, config: &ShipyardConfig) -> PageRequest {
    PageRequest::new(
        args.page.unwrap_or(0),
        args.page_size.unwrap_or_else(|| config.page_size()),
        args.order.unwrap_or_else(|| config.order()),
    )
}

fn dispatch(
    service: &mut ShipService<FileStore>,
    config: &ShipyardConfig,
    command: Commands,
    json: bool,
) -> anyhow::Result<String> {
    let out = match command {
        Commands::Create(args) => {
            let ship = service.create(ShipDraft::from(args))?;
            if json {
                render::to_json(&ship)?
            } else {
                render::render_ship(&ship)
            }
        }
        Commands::Get { id } => {
            let ship = service.get(ShipId::parse(id)?)?;
            if json {
                render::to_json(&ship)?
            } else {
                render::render_ship(&ship)
            }
        }
        Commands::Update { id, fields } => {
            let ship = service.update(ShipId::parse(id)?, ShipDraft::from(fields))?;
            if json {
                render::to_json(&ship)?
            } else {
                render::render_ship(&ship)
            }
        }
        Commands::Delete { id } => {
            let id = ShipId::parse(id)?;
            service.delete(id)?;
            if json {
                render::to_json(&serde_json::json!({ "deleted": id }))?
            } else {
                format!("Deleted ship {}\n", id)
            }
        }
        Commands::Exists { id } => {
            let exists = service.exists(ShipId::parse(id)?)?;
            if json {
                render::to_json(&exists)?
            } else {
                format!("{}\n", exists)
            }
        }
        Commands::List { criteria, page } => {
            let criteria = ShipCriteria::from(criteria);
            let request = page_request(page, config);
            let page = service
                .list(&criteria, &request)
                .context("failed to list ships")?;
            if json {
                render::to_json(&page)?
            } else {
                render::render_page(&page)
            }
        }
        Commands::Count { criteria } => {
            let count = service.count(&ShipCriteria::from(criteria))?;
            if json {
                render::to_json(&count)?
            } else {
                format!("{}\n", count)
            }
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipyardapp::page::ShipOrder;

    #[test]
    fn page_request_falls_back_to_config() {
        let config = ShipyardConfig {
            page_size: 5,
            order: Some(ShipOrder::Speed),
            ..Default::default()
        };
        let request = page_request(PageArgs::default(), &config);
        assert_eq!(request, PageRequest::new(0, 5, ShipOrder::Speed));

        let explicit = PageArgs {
            page: Some(2),
            page_size: Some(10),
            order: Some(ShipOrder::Rating),
        };
        assert_eq!(
            page_request(explicit, &config),
            PageRequest::new(2, 10, ShipOrder::Rating)
        );
    }
}
