use anyhow::Context;
use posts_contract::configuration::get_configuration;
use posts_contract::expectations::contract;
use posts_contract::telemetry::{get_subscriber, init_subscriber};
use posts_contract::verifier::ContractVerifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("posts-contract".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let verifier = ContractVerifier::from_settings(&configuration)
        .context("Failed to build the HTTP client.")?;

    let report = verifier.run(&contract()).await?;
    report.log_summary();

    if !report.is_success() {
        anyhow::bail!(
            "{} expectation(s) failed against {}",
            report.failures().count(),
            configuration.api.base_url
        );
    }
    Ok(())
}
