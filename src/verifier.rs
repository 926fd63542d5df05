use crate::api_client::ApiClient;
use crate::configuration::Settings;
use crate::expectations::{BodyCheck, Expectation, Violation};
use crate::telemetry::error_chain_fmt;
use reqwest::header::CONTENT_TYPE;

/// Failure to talk to the API at all.
///
/// This is an infrastructure problem and is never reported as a
/// contract violation.
#[derive(thiserror::Error)]
pub enum VerifyError {
    #[error("Transport failure while checking `{expectation}`")]
    Transport {
        expectation: String,
        #[source]
        source: reqwest::Error,
    },
}

impl std::fmt::Debug for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Result of checking one expectation.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub name: String,
    pub violations: Vec<Violation>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    /// Names of the expectations with at least one violation, in run order.
    pub fn failed_expectations(&self) -> Vec<&str> {
        self.failures().map(|outcome| outcome.name.as_str()).collect()
    }

    // Violations themselves are logged as they are found by `check`
    pub fn log_summary(&self) {
        let failed = self.failed_expectations();
        if failed.is_empty() {
            tracing::info!(checked = self.outcomes.len(), "Contract holds");
            return;
        }
        tracing::warn!(
            checked = self.outcomes.len(),
            failed = failed.len(),
            failed_expectations = ?failed,
            "Contract does not hold"
        );
    }
}

pub struct ContractVerifier {
    client: ApiClient,
    stop_on_failure: bool,
}

impl ContractVerifier {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            stop_on_failure: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = settings.api.client()?;
        let stop_on_failure = settings.verifier.stop_on_failure;
        Ok(Self::new(client).with_stop_on_failure(stop_on_failure))
    }

    pub fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Send the expectation's request and collect every violation.
    #[tracing::instrument(
        name = "Checking expectation",
        skip_all,
        fields(expectation = %expectation.name)
    )]
    pub async fn check(&self, expectation: &Expectation) -> Result<Outcome, VerifyError> {
        let transport = |source: reqwest::Error| VerifyError::Transport {
            expectation: expectation.name.clone(),
            source,
        };
        let response = self.client.send(&expectation.request).await.map_err(|e| {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Request failed");
            transport(e)
        })?;

        let mut violations = Vec::new();

        let status = response.status();
        if status != expectation.status {
            violations.push(Violation::Status {
                expected: expectation.status,
                actual: status,
            });
        }

        if let Some(expected) = expectation.content_type {
            let actual = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            if actual.as_deref() != Some(expected) {
                violations.push(Violation::ContentType { expected, actual });
            }
        }

        // Body checks only make sense once the status is the expected one
        if expectation.body != BodyCheck::Ignore && status == expectation.status {
            let text = response.text().await.map_err(transport)?;
            let outcome = serde_json::from_str::<serde_json::Value>(&text)
                .map_err(|e| Violation::NotJson(e.to_string()))
                .and_then(|body| expectation.body.evaluate(&body));
            if let Err(violation) = outcome {
                violations.push(violation);
            }
        }

        for violation in &violations {
            tracing::warn!(%violation, "Contract violated");
        }

        Ok(Outcome {
            name: expectation.name.clone(),
            violations,
        })
    }

    /// Check expectations one after the other.
    ///
    /// A transport failure aborts the run.
    #[tracing::instrument(
        name = "Verifying contract",
        skip_all,
        fields(base_url = %self.client.base_url(), expectations = expectations.len())
    )]
    pub async fn run(&self, expectations: &[Expectation]) -> Result<Report, VerifyError> {
        let mut report = Report::default();
        for expectation in expectations {
            let outcome = self.check(expectation).await?;
            let failed = !outcome.passed();
            report.outcomes.push(outcome);
            if failed && self.stop_on_failure {
                tracing::info!("Stopping after the first failed expectation");
                break;
            }
        }
        Ok(report)
    }
}
