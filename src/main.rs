use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ltss_webui::config::DevServerConfig;
use ltss_webui::{EmptyTokens, WebApp};

#[derive(Parser, Debug)]
#[command(name = "ltss-webui")]
#[command(version = "0.1.0")]
#[command(about = "Labels, routes and dev-server settings for the LTSS dashboard")]
struct Args {
    /// Values to render as title-case labels
    #[arg(conflicts_with = "query")]
    inputs: Vec<String>,

    /// Read values from stdin, one per line
    #[arg(long, conflicts_with = "query")]
    stdin: bool,

    /// Drop empty words left by repeated or boundary underscores
    #[arg(long)]
    collapse: bool,

    /// Print the route table as JSON
    #[arg(long, group = "query")]
    routes: bool,

    /// Resolve a location (e.g. "#/forecast/42") to its route
    #[arg(long, value_name = "PATH", group = "query")]
    resolve: Option<String>,

    /// Show which backend a request path is proxied to
    #[arg(long, value_name = "PATH", group = "query")]
    proxy: Option<String>,

    /// List registered UI components
    #[arg(long, group = "query")]
    components: bool,

    /// Dev-server config file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Only proxy lookups need the user's config file
    let config = match (&args.config, &args.proxy) {
        (Some(path), _) => DevServerConfig::load_from(path)?,
        (None, Some(_)) => DevServerConfig::load()?,
        (None, None) => DevServerConfig::default(),
    };

    let policy = if args.collapse {
        EmptyTokens::Collapse
    } else {
        EmptyTokens::Preserve
    };
    let app = WebApp::assemble(config)?.with_label_policy(policy);

    if args.routes {
        println!("{}", serde_json::to_string_pretty(app.routes())?);
        return Ok(());
    }

    if let Some(location) = &args.resolve {
        return print_route(&app, location);
    }

    if let Some(path) = &args.proxy {
        return print_proxy(&app, path);
    }

    if args.components {
        for component in app.components.iter() {
            println!("{}", component.name);
        }
        return Ok(());
    }

    for input in &args.inputs {
        println!("{}", app.label(input));
    }

    if args.stdin {
        label_stdin(&app).await?;
    }

    Ok(())
}

fn print_route(app: &WebApp, location: &str) -> Result<()> {
    let output = route_json(app, location)?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn route_json(app: &WebApp, location: &str) -> Result<serde_json::Value> {
    let matched = app
        .navigate(location)
        .with_context(|| format!("No route matches '{}'", location))?;

    Ok(serde_json::json!({
        "name": matched.route.name,
        "path": matched.route.path,
        "view": matched.route.view,
        "params": matched.params,
        "title": app.label(matched.route.name),
    }))
}

fn print_proxy(app: &WebApp, path: &str) -> Result<()> {
    println!("{}", serde_json::to_string(&proxy_json(app, path))?);
    Ok(())
}

fn proxy_json(app: &WebApp, path: &str) -> serde_json::Value {
    match app.config.proxy_target(path) {
        Some(rule) => serde_json::json!({
            "path": path,
            "proxied": true,
            "prefix": rule.prefix,
            "target": rule.target,
            "secure": rule.secure,
        }),
        None => serde_json::json!({
            "path": path,
            "proxied": false,
        }),
    }
}

async fn label_stdin(app: &WebApp) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        println!("{}", app.label(&line));
    }
    Ok(())
}
