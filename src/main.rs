use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use advice_kit::advice::AdviceRegistry;
use advice_kit::model::config::AppConfig;
use advice_kit::order::{self, OrderService};

/// Order items through the advised order service and report each outcome.
#[derive(Debug, Parser)]
#[command(name = "advice-kit", version, about)]
struct Cli {
    /// Config file layered over the defaults (default: per-user config).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Item ids to order. `ex` makes the repository fail.
    items: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let _guard = advice_kit::logging::init(&config)?;

    tracing::debug!("advice-kit starting");

    let registry = Arc::new(order::build_registry(&config));
    run(cli, registry, &mut io::stdout().lock())
}

/// Order every requested item, `itemA` and `ex` when none are given, and
/// write one `item=<id> result=<ok|error>` line per item.
fn run(cli: Cli, registry: Arc<AdviceRegistry>, out: &mut impl Write) -> Result<()> {
    let service = OrderService::new(registry);

    let items = if cli.items.is_empty() {
        vec!["itemA".to_string(), "ex".to_string()]
    } else {
        cli.items
    };

    for item in &items {
        let result = match service.order_item(item) {
            Ok(_) => "ok",
            Err(_) => "error",
        };
        writeln!(out, "item={item} result={result}")?;
    }

    Ok(())
}
