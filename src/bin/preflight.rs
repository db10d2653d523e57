use language_variant_admin::infra::logging;
use language_variant_admin::{Config, DatabaseService, VariantGateway};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--migrate]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL (or DB_USER, DB_PASSWORD, DB_HOST, DB_NAME)\n\
         Optional:\n\
           BIND_ADDR, DB_MAX_CONNECTIONS, VARIANT_ORDER, QUERY_TIMEOUT_MS, RUN_MIGRATIONS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let migrate = args.iter().any(|a| a == "--migrate");

    // Force-read config (nice error messages if missing)
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.max_connections);
    println!("  VARIANT_ORDER={}", config.variant_order);
    match config.query_timeout {
        Some(t) => println!("  QUERY_TIMEOUT_MS={}", t.as_millis()),
        None => println!("  QUERY_TIMEOUT_MS=<unset, no timeout>"),
    }

    let database = DatabaseService::connect(&config).await?;
    println!("  Database reachable.");

    if database.schema_ready().await? {
        println!("  Schema present.");
    } else if migrate {
        println!("  Schema missing -> applying migrations...");
        database.migrate().await?;
        println!("  Migrations applied.");
    } else {
        return Err(anyhow::anyhow!(
            "variants table does not exist. Re-run with --migrate or start api_server with RUN_MIGRATIONS=true"
        ));
    }

    let store = database.variant_store(config.variant_order);
    store.ping().await?;
    let count = store.count().await?;
    println!("  Variants stored: {}", count);

    let sample = store.list_unfiltered(1, 0).await?;
    match sample.first() {
        Some(v) => println!("  First variant ({} order): id={} tag={}", store.order(), v.id, v.variant_tag),
        None => println!("  No variants yet."),
    }

    println!("> Preflight OK.");
    Ok(())
}
