// Payment collaborator client: the one outbound call the system makes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::booking::{BookingRequest, Confirmation, SubmissionError};
use crate::listing::ListingId;

// Payment function endpoint of the production deployment
pub const DEFAULT_PAYMENT_ENDPOINT: &str =
    "https://functions.poehali.dev/b3465267-cc05-41db-832f-e7be5e4acb1e";

// Gateway client configuration. No timeout is configured here; the
// transport's own behavior applies.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PAYMENT_ENDPOINT.to_string(),
        }
    }
}

// Seam to the remote payment collaborator. One best-effort charge per
// booking; no retry, backoff, or idempotency-key logic lives behind this
// trait.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &BookingRequest) -> Result<Confirmation, SubmissionError>;
}

// JSON body sent to the payment collaborator. The field names are the
// collaborator's contract; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub apartment_id: ListingId,
    pub apartment_title: String,
    pub price: f64,
    pub hours: u32,
    pub total: f64,
    pub customer_email: String,
}

impl From<&BookingRequest> for PaymentPayload {
    fn from(request: &BookingRequest) -> Self {
        Self {
            apartment_id: request.listing_id,
            apartment_title: request.listing_title.clone(),
            price: request.price,
            hours: request.hours,
            total: request.total,
            customer_email: request.customer_email.clone(),
        }
    }
}

// Response body from the payment collaborator. Every field is optional on
// the wire; a missing success indicator reads as a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentOutcome {
    pub success: bool,
    pub test_mode: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub booking_id: Option<String>,
    pub amount: Option<f64>,
}

// Maps a decoded collaborator response onto the submission result: a truthy
// success indicator is a confirmation, anything else a rejection.
pub fn interpret_outcome(outcome: PaymentOutcome) -> Result<Confirmation, SubmissionError> {
    if outcome.success {
        Ok(Confirmation {
            booking_id: outcome.booking_id,
            amount: outcome.amount,
            test_mode: outcome.test_mode,
            message: outcome.message,
        })
    } else {
        Err(SubmissionError::Rejected(
            outcome
                .error
                .unwrap_or_else(|| "Не удалось обработать платёж".to_string()),
        ))
    }
}

// reqwest-backed gateway implementation.
pub struct HttpPaymentGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpPaymentGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpPaymentGateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn charge(&self, request: &BookingRequest) -> Result<Confirmation, SubmissionError> {
        let payload = PaymentPayload::from(request);
        debug!(
            listing = payload.apartment_id,
            hours = payload.hours,
            total = payload.total,
            "posting payment request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                warn!("payment request failed in transport: {err}");
                SubmissionError::NetworkError(err.to_string())
            })?;

        // The collaborator reports failures in the body, so the HTTP status
        // is not consulted. An undecodable body counts as a rejection: a
        // response was received, so it is not a transport failure.
        let outcome: PaymentOutcome = response.json().await.map_err(|err| {
            if err.is_decode() {
                SubmissionError::Rejected(format!("uninterpretable response: {err}"))
            } else {
                SubmissionError::NetworkError(err.to_string())
            }
        })?;

        interpret_outcome(outcome)
    }
}

// Scripted gateway for exercising the submission workflow without a network.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockGateway {
        outcomes: Mutex<VecDeque<Result<Confirmation, SubmissionError>>>,
        charges: AtomicUsize,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self::default()
        }

        // Queues the outcome of the next charge; unscripted charges resolve
        // like the collaborator running without a payment key.
        pub fn script(self, outcome: Result<Confirmation, SubmissionError>) -> Self {
            self.outcomes.lock().unwrap().push_back(outcome);
            self
        }

        pub fn charges(&self) -> usize {
            self.charges.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn charge(&self, request: &BookingRequest) -> Result<Confirmation, SubmissionError> {
            self.charges.fetch_add(1, Ordering::SeqCst);

            if let Some(outcome) = self.outcomes.lock().unwrap().pop_front() {
                return outcome;
            }

            Ok(Confirmation {
                booking_id: Some(format!("test_{}_{}h", request.listing_id, request.hours)),
                amount: Some(request.total),
                test_mode: true,
                message: Some("Тестовый режим: платёж успешно обработан".to_string()),
            })
        }
    }
}
