//! Demo binary: walks the structured onboarding flow against a running
//! backend and prints the catalog plus the matched tribes.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use impact_forge_client::adapters::ApiClient;
use impact_forge_client::application::OnboardingFlow;
use impact_forge_client::config::AppConfig;
use impact_forge_client::domain::OnboardingState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,impact_forge_client=debug")),
        )
        .init();

    let config = match AppConfig::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            std::process::exit(1);
        }
    };
    info!(base_url = %config.api.base_url, "starting Impact Forge demo client");

    let client = ApiClient::from_config(&config.api);

    match client.fetch_public_config().await {
        Ok(public) => info!(stripe_enabled = public.stripe_enabled, "public config"),
        Err(err) => eprintln!("Failed to load public config: {err}"),
    }

    match client.fetch_tribes().await {
        Ok(tribes) => {
            println!("Tribes ({}):", tribes.len());
            for tribe in tribes {
                println!("  - {} ({})", tribe.name, tribe.location.as_deref().unwrap_or("anywhere"));
            }
        }
        Err(err) => eprintln!("Failed to load tribes: {err}"),
    }

    match client.fetch_causes().await {
        Ok(causes) => {
            println!("Causes ({}):", causes.len());
            for cause in causes {
                println!(
                    "  - {} ({:.0}% funded, {} supporters)",
                    cause.name,
                    cause.funding_progress() * 100.0,
                    cause.supporters_count
                );
            }
        }
        Err(err) => eprintln!("Failed to load causes: {err}"),
    }

    // Walk the structured flow with a canned profile to show matching.
    let mut flow = OnboardingFlow::structured(Arc::new(client));
    for selection in ["Environment", "Programming", "Remote"] {
        if let Err(err) = flow.select_option(selection) {
            eprintln!("Selection failed: {err}");
            return;
        }
        if let Err(err) = flow.next().await {
            eprintln!("Could not advance: {err}");
            return;
        }
    }

    if let OnboardingState::Results { tribes } = flow.state() {
        println!("Suggested tribes:");
        for tribe in tribes {
            match tribe.score {
                Some(score) => println!("  - {} (score {score:.1})", tribe.name),
                None => println!("  - {}", tribe.name),
            }
        }
    }
}
