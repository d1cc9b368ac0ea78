//! Therapeutic Diet Assistant (TDA)
//!
//! An MCP server for condition-aware nutrition plans.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use tda::build_info;
use tda::mcp::TdaService;
use tda::reference::ReferenceData;

/// Reference table override from the environment, if any
fn get_reference_path() -> Option<PathBuf> {
    std::env::var("TDA_REFERENCE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tda=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let reference_path = get_reference_path();
    match &reference_path {
        Some(path) => eprintln!("Reference data: {}", path.display()),
        None => eprintln!("Reference data: embedded"),
    }

    let reference = Arc::new(ReferenceData::load(reference_path.as_deref())?);
    eprintln!(
        "Reference version {}: {} conditions, {} foods, {} medications",
        reference.version,
        reference.conditions.len(),
        reference.foods.len(),
        reference.interactions.len()
    );

    let service = TdaService::new(reference_path, reference);

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
