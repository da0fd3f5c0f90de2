//! Command-line front end for grid bitmap decoding and extent resolution.
//!
//! All results are printed to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grid_extent::{
    bitmap, load_catalog_file, Centering, DomainResolver, ExtentAggregator, RawGridDefinition,
    ResolverConfig,
};
use serde_json::json;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "grid-extent")]
#[command(about = "Decode grid bitmaps and compute geographic extents of gridded datasets")]
struct Args {
    /// Resolver configuration file (YAML); environment overrides are used when absent
    #[arg(short, long, env = "GRID_EXTENT_CONFIG")]
    config: Option<String>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a bitmap string into grid-definition codes
    Decode {
        bitmap: String,
    },

    /// Resolve the domain of a single grid definition
    Resolve {
        /// Projection family, e.g. latLon or lambertConformal
        #[arg(long)]
        family: String,

        /// Colon-delimited parameter string
        #[arg(long)]
        params: String,

        /// dateLine or primeMeridian
        #[arg(long, default_value = "primeMeridian")]
        center_on: Centering,
    },

    /// Compute the merged extent of the grids referenced by one or more bitmaps
    Extent {
        /// Grid catalog file (YAML, or JSON with a .json extension)
        #[arg(long)]
        catalog: String,

        /// Print a formatted spatial coverage summary instead of the raw domain
        #[arg(long)]
        coverage: bool,

        #[arg(required = true)]
        bitmaps: Vec<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let config = match &args.config {
        Some(path) => ResolverConfig::from_yaml_file(path)?,
        None => {
            let config = ResolverConfig::from_env();
            config.validate()?;
            config
        }
    };
    debug!(?config, "Resolver configuration");
    let resolver = DomainResolver::new(config);

    let output = match args.command {
        Command::Decode { bitmap } => {
            let codes = bitmap::decode(&bitmap)?;
            json!(codes)
        }
        Command::Resolve {
            family,
            params,
            center_on,
        } => {
            let def = RawGridDefinition::new(family, params);
            let domain = resolver
                .resolve_raw(&def, center_on)
                .with_context(|| format!("invalid {} grid definition", def.family))?;
            json!(domain)
        }
        Command::Extent {
            catalog,
            coverage,
            bitmaps,
        } => {
            let catalog = load_catalog_file(&catalog)
                .with_context(|| format!("failed to load grid catalog {}", catalog))?;
            let aggregator = ExtentAggregator::new(resolver);
            if coverage {
                json!(aggregator.spatial_coverage(&bitmaps, &catalog)?)
            } else {
                json!(aggregator.aggregate_many(&bitmaps, &catalog)?)
            }
        }
    };

    info!("Done");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
