use bolaquent::config::Config;
use bolaquent::db::DatabaseProxy;
use bolaquent::logging::{init_tracing, LoggingOptions};
use bolaquent::seed::seed_catalog;
use bolaquent::services::vocabulary_expansion::{expand_all_tiers, ExpansionPlan};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = init_tracing(&LoggingOptions::from_env(&config.log_level));

    if let Err(err) = run(&config).await {
        tracing::error!(error = %err, "vocabulary expansion failed");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let proxy = DatabaseProxy::connect(&config.database_url).await?;
    proxy.migrate().await?;
    seed_catalog(&proxy).await?;
    tracing::info!(database = proxy.connection_string(), "expanding vocabulary");

    let reports = expand_all_tiers(&proxy, ExpansionPlan::default()).await?;

    let mut total_added = 0;
    for report in &reports {
        tracing::info!(
            tier_id = report.tier_id,
            tier = %report.tier_name,
            before = report.before,
            added = report.added,
            after = report.after,
            "tier summary"
        );
        total_added += report.added;
    }
    tracing::info!(tiers = reports.len(), total_added, "vocabulary expansion finished");

    Ok(())
}
