use std::{path::PathBuf, sync::Arc};

mod config;
mod controller;
mod page;
mod view;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{CookieTokenProvider, OrderReviewClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_settings, normalize_base_url, Settings},
    controller::{FormController, SubmitResult},
    view::TerminalView,
};

#[derive(Parser, Debug)]
#[command(
    name = "order-detail",
    about = "Rate a delivered order and review its food items"
)]
struct Cli {
    /// TOML description of the order-detail page.
    #[arg(long)]
    page: Option<PathBuf>,
    #[arg(long)]
    base_url: Option<String>,
    /// Cookie string holding the `csrftoken` cookie.
    #[arg(long)]
    cookie: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Load the page and report whether the rating modal opens.
    Show,
    /// Submit the overall order rating form.
    Rate,
    /// Submit the per-item review form.
    Review,
    /// Submit both forms, one after the other.
    SubmitAll,
}

fn apply_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(page) = &cli.page {
        settings.page_path = page.clone();
    }
    if let Some(base_url) = &cli.base_url {
        settings.base_url = normalize_base_url(base_url);
    }
    if let Some(cookie) = &cli.cookie {
        settings.cookie = cookie.clone();
    }
    settings
}

fn required<'a, T>(form: Option<&'a T>, name: &str) -> Result<&'a T> {
    form.ok_or_else(|| anyhow!("order detail page has no {name}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = apply_cli_overrides(load_settings(), &cli);
    let page = page::load_page(&settings.page_path)?;

    let csrf = Arc::new(CookieTokenProvider::new(settings.cookie.clone()));
    let client = OrderReviewClient::new(&settings.base_url, csrf)
        .with_context(|| format!("failed to build client for {}", settings.base_url))?;
    let controller = FormController::initialize(&page, Arc::new(client), Arc::new(TerminalView))?;
    info!(order = %controller.order(), base_url = %settings.base_url, "order detail page loaded");

    let mut results: Vec<SubmitResult> = Vec::new();
    match cli.command {
        Command::Show => {
            let state = controller.snapshot().await;
            if state.modal.shown {
                println!("rating modal shown");
            } else {
                println!("rating modal not shown");
            }
        }
        Command::Rate => {
            let form = required(page.rating_form.as_ref(), "rating form")?;
            results.push(controller.submit_rating(form).await);
        }
        Command::Review => {
            let form = required(page.review_form.as_ref(), "review form")?;
            results.push(controller.submit_reviews(form).await);
        }
        Command::SubmitAll => {
            if let Some(form) = &page.rating_form {
                results.push(controller.submit_rating(form).await);
            }
            if let Some(form) = &page.review_form {
                results.push(controller.submit_reviews(form).await);
            }
            if results.is_empty() {
                bail!("order detail page has neither a rating form nor a review form");
            }
        }
    }

    let failed = results.iter().filter(|result| !result.ok).count();
    if failed > 0 {
        bail!("{failed} of {} submissions failed", results.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "order-detail",
            "--page",
            "pages/1024.toml",
            "--base-url",
            "https://shop.test/store",
            "--cookie",
            "csrftoken=abc",
            "submit-all",
        ])
        .expect("parse cli");

        let settings = apply_cli_overrides(Settings::default(), &cli);

        assert_eq!(cli.command, Command::SubmitAll);
        assert_eq!(settings.page_path, PathBuf::from("pages/1024.toml"));
        assert_eq!(settings.base_url, "https://shop.test/store/");
        assert_eq!(settings.cookie, "csrftoken=abc");
    }

    #[test]
    fn settings_are_kept_without_flags() {
        let cli = Cli::try_parse_from(["order-detail", "show"]).expect("parse cli");
        assert_eq!(
            apply_cli_overrides(Settings::default(), &cli),
            Settings::default()
        );
    }

    #[test]
    fn missing_form_is_reported_by_name() {
        let err = required::<page::RatingForm>(None, "rating form").expect_err("must fail");
        assert_eq!(err.to_string(), "order detail page has no rating form");
    }
}
