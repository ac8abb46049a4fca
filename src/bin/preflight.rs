use order_dashboard::infra::config;
use order_dashboard::{OrderStore, SqliteOrderStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (all optional):\n\
           DATABASE_URL or DB_PATH, DB_MAX_CONNECTIONS, PORT, BIND_ADDR, APP_ENV\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if malformed)
    let database_url = config::database_url();
    let port = config::port()?;
    let max_connections = config::db_max_connections()?;

    println!("> Preflight:");
    println!("  APP_ENV={}", config::app_env());
    println!("  DATABASE_URL={}", database_url);
    println!("  BIND={}:{}", config::bind_addr(), port);
    println!("  DB_MAX_CONNECTIONS={}", max_connections);

    let store = SqliteOrderStore::connect(&database_url, max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {:#}", database_url, e))?;
    store.ping().await?;
    println!("  Database reachable, orders table present.");

    let count = store.count().await?;
    println!("  Stored orders: {}", count);
    if count == 0 {
        eprintln!("  Warning: no orders yet; run `cargo run --bin seed` for sample data.");
    }

    println!("> Preflight OK.");
    Ok(())
}
