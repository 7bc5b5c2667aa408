//! prodsearch CLI — run product searches against the search API from the terminal.
//!
//! Builds the same request parameters as the app, so it doubles as a way to
//! inspect exactly what a filter combination sends.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use prodsearch_core::errors::ErrorMap;
use prodsearch_core::filters::{FilterState, StockStatus};
use prodsearch_core::product::Product;
use prodsearch_core::query::build_params;
use prodsearch_core::session::SearchOutcome;
use prodsearch_core::ClientConfig;
use prodsearch_http::SearchClient;

/// prodsearch CLI — product search from the terminal.
#[derive(Parser)]
#[command(name = "prodsearch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./prodsearch.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search API base URL, overrides the config file
    #[arg(long, global = true)]
    api: Option<String>,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    Search {
        /// Free-text query
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the request URL and exit without searching
        #[arg(long)]
        print_url: bool,
    },
    /// Show the selectable filter values
    Lists,
}

#[derive(Args)]
struct FilterArgs {
    /// Minimum current price (0 is treated as unset)
    #[arg(long)]
    min_price: Option<i64>,

    /// Maximum current price
    #[arg(long)]
    max_price: Option<i64>,

    /// Currency code, e.g. USD
    #[arg(long)]
    currency: Option<String>,

    /// Category name (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Shop name
    #[arg(long)]
    shop: Option<String>,

    /// Region
    #[arg(long)]
    region: Option<String>,

    /// Stock status: any, in-stock, out-of-stock
    #[arg(long, default_value = "any")]
    status: StockStatus,

    /// Only products updated since this date (YYYY-MM-DD)
    #[arg(long)]
    update_date: Option<String>,

    /// Minimum discount percentage
    #[arg(long)]
    off_percent: Option<i64>,
}

impl FilterArgs {
    fn into_state(self) -> FilterState {
        let mut state = FilterState {
            min_price: self.min_price,
            max_price: self.max_price,
            currency: self.currency,
            categories: Vec::new(),
            shop: self.shop,
            region: self.region,
            status: self.status,
            update_date: self.update_date,
            off_percent: self.off_percent,
        };
        for c in &self.categories {
            state.select_category(c);
        }
        state
    }
}

fn print_products(products: &[Product], json: bool) {
    if json {
        match serde_json::to_string_pretty(products) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Could not encode results: {e}"),
        }
        return;
    }
    if products.is_empty() {
        eprintln!("No products found");
        return;
    }
    for p in products {
        let mut price = p.price_label();
        if let Some(old) = p.old_price_label() {
            price.push_str(&format!(" (was {old})"));
        }
        println!("{:<48} {:>18}  {}", p.name, price, p.sizes.join(" "));
    }
    eprintln!("\n{} products", products.len());
}

fn print_errors(errors: &ErrorMap, json: bool) {
    if json {
        let object: serde_json::Map<String, serde_json::Value> = errors
            .iter()
            .map(|e| (e.field.clone(), serde_json::json!(e.messages)))
            .collect();
        eprintln!("{}", serde_json::Value::Object(object));
        return;
    }
    for e in errors {
        eprintln!("{}: {}", e.label(), e.first_message().unwrap_or(""));
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prodsearch=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref());
    if let Some(api) = cli.api {
        config.api_base = api;
    }
    let client = SearchClient::new(&config);

    match cli.command {
        Commands::Search { query, filters, print_url } => {
            let params = build_params(&query, &filters.into_state());
            if print_url {
                println!("{}", client.request_url(&params));
                return ExitCode::SUCCESS;
            }
            match client.search_outcome(&params).await {
                SearchOutcome::Found(products) => {
                    print_products(&products, cli.json);
                    ExitCode::SUCCESS
                }
                SearchOutcome::Rejected(errors) => {
                    print_errors(&errors, cli.json);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Lists => match client.filter_options().await {
            Ok(options) => {
                if cli.json {
                    println!("{}", serde_json::json!(options));
                } else {
                    for (label, values) in [
                        ("currencies", &options.currencies),
                        ("categories", &options.categories),
                        ("shops", &options.shops),
                        ("regions", &options.regions),
                    ] {
                        println!("{label}: {}", values.join(", "));
                    }
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Could not load filter lists: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
