use tracing::{error, info};

use article_seeder::{logging, Dependencies, SeederConfig, SeederError};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = SeederConfig::from_env();
    logging::init(
        config
            .as_ref()
            .map(|c| c.log_format)
            .unwrap_or_default(),
    );

    if let Err(e) = run(config).await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run(config: Result<SeederConfig, SeederError>) -> Result<(), SeederError> {
    let config = config?;
    let dependencies = Dependencies::new(&config)?;

    let summary = dependencies.orchestrator.run().await?;

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Seeding finished"
    );
    Ok(())
}
