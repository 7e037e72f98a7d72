//! Logistics CLI: answers network queries over a JSON dataset
//!
//! The dataset holds hub records and route records (see `logistics_network::Dataset`).
//! Hubs are named on the command line by city, case-insensitively.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use logistics_network::{
    distance_matrix, ingest, Dataset, HubId, LogisticsNetwork, NetworkConfig, PathResult,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "logistics-cli", version, about = "Logistics network analysis")]
struct Cli {
    /// Dataset file (JSON)
    #[arg(long, global = true, env = "LOGISTICS_DATASET")]
    dataset: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "LOGISTICS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Hub, route and component counts
    Summary,
    /// List every hub
    Hubs,
    /// Cheapest path between two hubs
    ShortestPath {
        /// Origin city
        from: String,
        /// Destination city
        to: String,
    },
    /// The most distant pair of hubs
    Span,
    /// Hubs ranked by number of routes
    Centrality {
        /// How many hubs to show (defaults to the configured top_k)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Connected components
    Components,
    /// Pairwise distance matrix
    Matrix,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NetworkConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NetworkConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    let dataset_path = cli
        .dataset
        .as_ref()
        .ok_or_else(|| anyhow!("no dataset given (use --dataset or LOGISTICS_DATASET)"))?;
    let dataset = Dataset::load(dataset_path)
        .with_context(|| format!("loading dataset {}", dataset_path.display()))?;

    let mut network = LogisticsNetwork::with_config(NetworkConfig {
        record_history: false,
        ..config
    });
    let report = ingest(&mut network, &dataset)?;
    info!(
        "Loaded {} hubs, {} routes from {}",
        report.hubs_inserted(),
        report.routes_inserted,
        dataset_path.display()
    );

    match cli.command {
        Commands::Summary => run_summary(&network, &cli.format),
        Commands::Hubs => run_hubs(&network, &cli.format),
        Commands::ShortestPath { from, to } => {
            let from = resolve_city(&network, &from)?;
            let to = resolve_city(&network, &to)?;
            let path = network.shortest_path(from, to)?;
            print_path(&network, &path, &cli.format)
        }
        Commands::Span => {
            let path = network.most_distant_hubs()?;
            print_path(&network, &path, &cli.format)
        }
        Commands::Centrality { top } => {
            let ranking = match top {
                Some(k) => network.top_central_hubs(k),
                None => network.default_top_central_hubs(),
            };
            let rows = ranking
                .into_iter()
                .map(|(id, degree)| vec![city_of(&network, id), degree.to_string()])
                .collect();
            print_rows(&["city", "routes"], rows, &cli.format)
        }
        Commands::Components => {
            let rows = network
                .components()
                .into_iter()
                .enumerate()
                .map(|(idx, members)| {
                    let cities: Vec<String> =
                        members.into_iter().map(|id| city_of(&network, id)).collect();
                    vec![(idx + 1).to_string(), cities.len().to_string(), cities.join(" ")]
                })
                .collect();
            print_rows(&["component", "size", "hubs"], rows, &cli.format)
        }
        Commands::Matrix => run_matrix(&network, &cli.format),
    }
}

fn resolve_city(network: &LogisticsNetwork, city: &str) -> Result<HubId> {
    network
        .hubs()
        .find(|hub| hub.city().eq_ignore_ascii_case(city))
        .map(|hub| hub.id())
        .ok_or_else(|| anyhow!("no hub named '{}'", city))
}

fn city_of(network: &LogisticsNetwork, id: HubId) -> String {
    network
        .find_hub(id)
        .map(|hub| hub.city().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn run_summary(network: &LogisticsNetwork, format: &OutputFormat) -> Result<()> {
    let rows = vec![
        vec!["hubs".to_string(), network.num_hubs().to_string()],
        vec!["routes".to_string(), network.num_routes().to_string()],
        vec!["components".to_string(), network.component_count().to_string()],
    ];
    print_rows(&["metric", "value"], rows, format)
}

fn run_hubs(network: &LogisticsNetwork, format: &OutputFormat) -> Result<()> {
    let rows = network
        .hubs()
        .map(|hub| {
            vec![
                hub.id().as_u64().to_string(),
                hub.city().to_string(),
                hub.population().to_string(),
                hub.coordinate().to_string(),
            ]
        })
        .collect();
    print_rows(&["id", "city", "population", "coordinate"], rows, format)
}

fn run_matrix(network: &LogisticsNetwork, format: &OutputFormat) -> Result<()> {
    let cities: Vec<String> = network.hubs().map(|hub| hub.city().to_string()).collect();
    let mut header = vec![""];
    header.extend(cities.iter().map(String::as_str));

    let rows = distance_matrix(network)
        .into_iter()
        .zip(&cities)
        .map(|(row, city)| {
            let mut cells = vec![city.clone()];
            cells.extend(row.into_iter().map(|d| d.to_string()));
            cells
        })
        .collect();
    print_rows(&header, rows, format)
}

fn print_path(network: &LogisticsNetwork, path: &PathResult, format: &OutputFormat) -> Result<()> {
    let cities: Vec<String> = path.hubs.iter().map(|&id| city_of(network, id)).collect();

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "hubs": cities,
                "cost": path.cost,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        _ => {
            let mut rows = Vec::with_capacity(cities.len());
            let mut total = 0u64;
            for (idx, city) in cities.iter().enumerate() {
                if idx > 0 {
                    let leg = network
                        .route_between(path.hubs[idx - 1], path.hubs[idx])
                        .map_or(0, |route| u64::from(route.distance()));
                    total += leg;
                }
                rows.push(vec![(idx + 1).to_string(), city.clone(), total.to_string()]);
            }
            print_rows(&["step", "city", "cumulative km"], rows, format)?;
            if matches!(format, OutputFormat::Table) {
                println!("Total: {} km", path.cost);
            }
            Ok(())
        }
    }
}

fn print_rows(header: &[&str], rows: Vec<Vec<String>>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<serde_json::Value> = rows
                .iter()
                .map(|row| {
                    let object: serde_json::Map<String, serde_json::Value> = header
                        .iter()
                        .zip(row)
                        .map(|(key, cell)| (key.to_string(), serde_json::Value::String(cell.clone())))
                        .collect();
                    serde_json::Value::Object(object)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Csv => {
            println!("{}", header.join(","));
            for row in &rows {
                let cells: Vec<String> = row.iter().map(|cell| format_csv_value(cell)).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(header);
            for row in rows {
                table.add_row(row);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
