//! userdir Lambda - user CRUD behind a single API Gateway resource.
//!
//! This binary binds the dispatch layer to the AWS Lambda runtime: it builds
//! the DynamoDB client and repository once per execution environment, adapts
//! each incoming proxy event into the dispatcher's request shape, and returns
//! the rendered response.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TABLE_NAME` | `users` | Backing DynamoDB table |
//! | `OPERATION_TIMEOUT_SECS` | `10` | Per-operation deadline |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//! | `AWS_REGION` etc. | — | Resolved by the standard SDK config chain |

use std::collections::HashMap;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use bytes::Bytes;
use lambda_http::{Body, Request, RequestExt, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

use userdir_core::{DynamoStore, UserDirConfig, UserRepository};
use userdir_http::{ApiRequest, UserApiService};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        // The Lambda log stream already stamps each line.
        .without_time()
        .init();

    Ok(())
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Adapt an inbound Lambda proxy event into the dispatcher's request shape.
fn to_api_request(event: Request) -> ApiRequest {
    let query: HashMap<String, String> = event
        .query_string_parameters()
        .iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

    let (parts, body) = event.into_parts();
    let body = match body {
        Body::Empty => Bytes::new(),
        Body::Text(text) => Bytes::from(text),
        Body::Binary(data) => Bytes::from(data),
    };

    ApiRequest {
        method: parts.method,
        query,
        body,
    }
}

/// Handle one invocation: dispatch and convert the response for the runtime.
async fn handle_event(
    service: &UserApiService<DynamoStore>,
    event: Request,
) -> Result<http::Response<Body>, lambda_http::Error> {
    let response = service.handle(to_api_request(event)).await;
    Ok(response.map(Body::Text))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let config = UserDirConfig::from_env();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoStore::new(client, config.table_name.clone());
    let service = UserApiService::new(UserRepository::new(store), config.operation_timeout);

    info!(
        table = %config.table_name,
        timeout_secs = config.operation_timeout.as_secs(),
        "starting userdir lambda",
    );

    lambda_http::run(service_fn(move |event| {
        let service = service.clone();
        async move { handle_event(&service, event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime exited: {e}"))
}
