use anyhow::Context;
use client::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config =
        util::load_config("Config.toml").context("failed to load Config.toml")?;

    let token = match util::load_env() {
        Ok(secrets) => secrets
            .get("API_TOKEN")
            .and_then(|token| token.as_str())
            .map(str::to_string),
        Err(e) => {
            warn!(task = "load secrets", err = e.to_string());
            None
        }
    };

    let client = Client::new(token, &config).context("invalid [api] config")?;
    info!(
        task = "list posts",
        base_url = %client.config().base_url,
        authenticated = client.is_authenticated()
    );

    let posts = client
        .list_posts(Pagination::default())
        .await
        .context("failed to list posts")?;

    for post in posts.items.iter() {
        info!(
            id = %post.id,
            title = %post.title,
            preview = %markdown::preview(post)
        );
    }

    let json = serde_json::to_string_pretty(&posts)
        .context("failed to serialize posts")?;
    println!("{json}");

    Ok(())
}
