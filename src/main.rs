use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitrina::{ApiClient, ApiConfig, AppStore, Currency, FileSlot};

/// One-shot catalog browser session: fetch, filter, print a page.
#[derive(Debug, Parser)]
#[command(name = "vitrina", version, about)]
struct Cli {
    /// Override the products endpoint.
    #[arg(long)]
    products_url: Option<String>,

    /// Override the categories endpoint.
    #[arg(long)]
    categories_url: Option<String>,

    /// Override the exchange-rate endpoint.
    #[arg(long)]
    exchange_url: Option<String>,

    /// Restrict the listing to a category (repeatable).
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Lower price bound (defaults to the fetched minimum).
    #[arg(long)]
    min_price: Option<f64>,

    /// Upper price bound (defaults to the fetched maximum).
    #[arg(long)]
    max_price: Option<f64>,

    /// Page to print, zero-indexed.
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Items per page (defaults to the saved preference).
    #[arg(long)]
    per_page: Option<usize>,

    /// Show bolívar prices as primary.
    #[arg(long)]
    bs: bool,

    /// Show only the primary currency.
    #[arg(long)]
    single_currency: bool,

    /// Persist display and pagination preferences for the next session.
    #[arg(long)]
    save: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::default();
    if let Some(url) = cli.products_url {
        config.products_url = url;
    }
    if let Some(url) = cli.categories_url {
        config.categories_url = url;
    }
    if let Some(url) = cli.exchange_url {
        config.exchange_url = url;
    }

    let slot = FileSlot::new(FileSlot::default_path());
    let mut store = AppStore::new(ApiClient::new(config), Box::new(slot));

    store.fetch_initial_data().await?;

    if !cli.categories.is_empty() {
        store.set_selected_categories(cli.categories);
    }
    let min = cli.min_price.unwrap_or(store.filter().min_price);
    let max = cli.max_price.unwrap_or(store.filter().max_price);
    store.set_price_range(min, max);
    if let Some(per_page) = cli.per_page {
        store.set_items_per_page(per_page);
    }
    if cli.bs {
        store.set_primary_currency(Currency::Bs);
    }
    if cli.single_currency {
        store.set_show_both_prices(false);
    }

    let exchange = store.exchange();
    if exchange.rate > 0.0 {
        println!(
            "BCV rate: {:.2} Bs/USD ({} {})",
            exchange.rate, exchange.date, exchange.time
        );
    } else {
        println!("BCV rate: unavailable");
    }

    let stats = store.stats();
    println!(
        "{} products in {} categories, average ${:.2}",
        stats.total_products, stats.unique_categories, stats.average_price
    );
    println!();

    for product in store.current_page(cli.page) {
        let title = product
            .extra
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("(untitled)");
        println!(
            "#{:<4} {:<50} {} [{}]",
            product.id,
            title,
            format_price(&store, product.price),
            product.category
        );
    }

    if cli.save {
        store.save_preferences()?;
    }

    Ok(())
}

fn format_price(store: &AppStore, price: f64) -> String {
    let display = store.display();
    let usd = format!("${:.2}", price);
    let bs = format!("Bs {:.2}", store.exchange().convert(price));
    match (display.show_both_prices, display.primary_currency) {
        (true, Currency::Usd) => format!("{usd} ({bs})"),
        (true, Currency::Bs) => format!("{bs} ({usd})"),
        (false, Currency::Usd) => usd,
        (false, Currency::Bs) => bs,
    }
}
