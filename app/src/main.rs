//! Userflow
//!
//! A small user intake pipeline demonstrating the Adapter pattern with
//! hexagonal (ports & adapters) structure: a persistence-shaped `UserEntity`
//! is adapted into a `UserDomainObject`, validated, and saved on success.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::UserAdapter;
use app::UserService;
use config::Config;
use domain::entities::UserEntity;

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,userflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting userflow...");

    // Load configuration
    let config = Config::from_env();

    // Wire the pipeline
    let user_entity = UserEntity::new(config.sample_username, config.sample_email);
    let service = UserService::new(UserAdapter::new());

    let outcome = service.process_user(&user_entity);
    if outcome.is_saved() {
        tracing::info!("Run complete: user saved");
    } else {
        tracing::warn!(?outcome, "Run complete: user rejected");
    }
}
