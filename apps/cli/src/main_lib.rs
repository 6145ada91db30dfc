use anyhow::Context;
use deposit_allocator_core::DepositAllocator;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::input::AllocationInput;
use crate::output::render;

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Loads the input, allocates it and renders the result.
pub fn run(config: &Config) -> anyhow::Result<String> {
    let input = match &config.input_path {
        Some(path) => AllocationInput::from_path(path)
            .with_context(|| format!("Failed to load allocation input from {}", path.display()))?,
        None => AllocationInput::sample().context("Failed to build sample input")?,
    };
    input.validate().context("Invalid allocation input")?;

    let (plans, deposits) = input.into_parts();
    info!(
        "Allocating {} deposits across {} plans",
        deposits.len(),
        plans.len()
    );

    let result = DepositAllocator::new().execute_with_breakdown(&plans, &deposits);
    info!(
        "Allocated {} of {} deposited ({} left for the last plan's weights)",
        result.total_allocated(),
        result.total_deposited,
        result.remainder
    );

    render(&result, config.output_format).context("Failed to render allocation result")
}
