// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::Context;
use the_bulletin::backends::FileTransport;
use the_bulletin::config::load_and_validate_config;
use the_bulletin::diagnostics::{CompletionStatus, EnvelopeSnapshot, MessageBus};
use the_bulletin::remote::RestClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: {} <config.yaml> <responses-dir> <path> [path ...]", args[0]);
        eprintln!("Example: {} bulletin.yaml responses/ users users/7", args[0]);
        std::process::exit(1);
    }

    let config = load_and_validate_config(&args[1])
        .with_context(|| format!("failed to load config from {}", args[1]))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let mut bus = MessageBus::new();
    bus.set_message_listener(|messages| {
        let snapshot = EnvelopeSnapshot::from_messages(messages);
        match serde_json::to_string(&snapshot) {
            Ok(rendered) => println!("📋 {}", rendered),
            Err(e) => eprintln!("❌ Could not render messages: {}", e),
        }
    });

    let transport = FileTransport::new(&args[2], config.service_url.clone());
    println!("📂 Serving responses from {}", transport.root().display());
    let client = RestClient::new(&config, Arc::new(transport), bus.shared());

    println!("📡 {} via {:?}", config.app_name, client);
    println!();

    for path in &args[3..] {
        println!("➡️  GET {}", path);
        match client.get(path, &[]).await {
            Ok(payload) => println!("✅ {}", serde_json::to_string_pretty(&payload)?),
            Err(e) => println!("❌ {}", e),
        }
        println!();
    }

    let max_severity = client.bus().lock().await.max_severity();
    let status = CompletionStatus::from_max_severity(Some(max_severity.label()));
    println!("🏁 Completion status: {} (max severity {})", status, max_severity);

    Ok(())
}
