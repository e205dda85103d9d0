//! Star Protect - Demo Binary
//!
//! Walks through a complete session against the in-process services: the
//! admin registers an underwriter, two underwriters issue policies, and
//! ownership checks keep them out of each other's records.
//!
//! # Usage
//!
//! ```bash
//! # Run with the demo latency profile
//! cargo run --bin star-protect-demo
//!
//! # Run without simulated delays, keeping the session on disk
//! STAR_PROTECT__LATENCY__READ_MS=0 STAR_PROTECT__LATENCY__WRITE_MS=0 \
//! STAR_PROTECT__LATENCY__AUTH_MS=0 STAR_PROTECT__STORAGE_DIR=/tmp/star-protect \
//! cargo run --bin star-protect-demo
//! ```
//!
//! # Environment Variables
//!
//! * `STAR_PROTECT__LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `STAR_PROTECT__STORAGE_DIR` - Directory for the stored session (default: in memory)
//! * `STAR_PROTECT__LATENCY__READ_MS` - Single-record read delay (default: 500)
//! * `STAR_PROTECT__LATENCY__WRITE_MS` - Write and listing delay (default: 800)
//! * `STAR_PROTECT__LATENCY__AUTH_MS` - Sign-in delay (default: 800)
//! * `STAR_PROTECT__SEED_DEMO_DATA` - Seed underwriter UW001 (default: true)

use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app_shell::config::AppConfig;
use app_shell::handlers::{auth, dashboard, policies, underwriters};
use app_shell::AppContext;
use domain_auth::TracingNavigator;
use domain_policy::{InsuranceType, PolicyForm, VehicleType};
use domain_underwriter::UnderwriterForm;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid STAR_PROTECT__* configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(
        latency = ?config.latency,
        storage = ?config.storage_dir,
        "Starting Star Protect demo"
    );

    let ctx = AppContext::new(config, Arc::new(TracingNavigator));
    run_scenario(&ctx).await?;

    tracing::info!("Demo complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid date {y}-{m}-{d}"))
}

fn sample_policy(insurance_type: InsuranceType, customer: &str) -> anyhow::Result<PolicyForm> {
    let mut form = PolicyForm::new(VehicleType::FourWheeler, insurance_type, date(2025, 1, 1)?)?;
    form.vehicle_number = "MH12AB1234".to_string();
    form.customer_name = customer.to_string();
    form.engine_number = "ENG4471".to_string();
    form.chassis_number = "CHS9921".to_string();
    form.phone_number = "9876543210".to_string();
    Ok(form)
}

async fn run_scenario(ctx: &AppContext) -> anyhow::Result<()> {
    if ctx.session.is_authenticated() {
        tracing::info!("Found a stored session, signing out first");
        auth::sign_out(ctx);
    }

    // Admin registers a second underwriter
    auth::sign_in(ctx, "admin", "admin").await?;
    let registered = underwriters::register_underwriter(
        ctx,
        UnderwriterForm::new("Neha Kapoor", date(1995, 3, 14)?, date(2025, 6, 1)?, "Secure@456"),
    )
    .await?;
    let summary = dashboard::admin_summary(ctx).await?;
    tracing::info!(
        id = %registered.underwriter.id,
        login = %registered.login_name,
        underwriters = summary.underwriter_count,
        "Admin registered an underwriter"
    );
    auth::sign_out(ctx);

    // The seeded underwriter issues a policy
    auth::sign_in(ctx, "underwriter1", "Pass@123").await?;
    let policy = policies::issue_policy(ctx, sample_policy(InsuranceType::FullInsurance, "Rahul Verma")?).await?;
    tracing::info!(
        id = %policy.id,
        premium = %policy.premium_amount,
        to_date = %policy.to_date,
        "First underwriter issued a policy"
    );
    auth::sign_out(ctx);

    // The new underwriter cannot read it
    auth::sign_in(ctx, &registered.login_name, "Secure@456").await?;
    match policies::get_policy(ctx, policy.id).await {
        Ok(_) => tracing::warn!(id = %policy.id, "Ownership check did not apply"),
        Err(e) => tracing::info!(id = %policy.id, error = %e, "Second underwriter was refused"),
    }
    let own = policies::issue_policy(ctx, sample_policy(InsuranceType::ThirdParty, "Anita Desai")?).await?;
    let own = policies::change_insurance_type(ctx, own.id, InsuranceType::FullInsurance).await?;
    tracing::info!(
        id = %own.id,
        insurance_type = %own.insurance_type,
        premium = %own.premium_amount,
        "Second underwriter switched cover type"
    );
    let summary = dashboard::underwriter_summary(ctx).await?;
    tracing::info!(
        name = %summary.display_name,
        recent = summary.recent_policies.len(),
        "Underwriter dashboard"
    );
    auth::sign_out(ctx);

    Ok(())
}
