use eisenstein::{
    Cli, Commands, EisensteinConfig, EisensteinResult, GeminiClient, OutlineRequester,
    RegistryMaterializer, SectionOutline,
};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse_args();
    let config = EisensteinConfig::load()?;
    let project_dir = cli
        .project
        .unwrap_or_else(|| config.project_dir.clone());

    match cli.command {
        Commands::Outline {
            idea,
            model,
            dry_run,
        } => {
            let client = build_client(&config, model)?;
            let requester = OutlineRequester::new(client)
                .with_fps(config.fps)
                .with_temperature(config.temperature)
                .with_max_tokens(config.max_tokens);

            let outline = requester.fetch_outline(&idea).await?;
            print_outline(&outline);

            if dry_run {
                return Ok(());
            }

            build_materializer(&config, None, &project_dir)?
                .rebuild_all(&outline)
                .await?;
            println!("Rebuilt registry at {}", project_dir.display());
        }

        Commands::Rebuild => {
            let materializer = build_materializer(&config, None, &project_dir)?;
            let outline = materializer.current().await?;
            materializer.rebuild_all(&outline).await?;
            println!(
                "Rebuilt {} sections at {}",
                outline.len(),
                project_dir.display()
            );
        }

        Commands::Edit {
            section,
            instruction,
            fresh,
            model,
        } => {
            let updated = build_materializer(&config, model, &project_dir)?
                .update_section(&section, &instruction, !fresh)
                .await?;
            println!("Updated section {}", updated.identifier());
        }

        Commands::Show => {
            let outline = eisenstein::load_manifest(&project_dir).await?;
            print_outline(&outline);
        }
    }

    Ok(())
}

/// Build a Gemini client from configuration plus an optional CLI model
/// override.
fn build_client(
    config: &EisensteinConfig,
    model_override: Option<String>,
) -> EisensteinResult<GeminiClient> {
    let client = match model_override.or_else(|| config.model.clone()) {
        Some(model) => GeminiClient::new_with_model(&model)?,
        None => GeminiClient::new()?,
    };
    Ok(client.with_timeout(config.generation_timeout_secs))
}

/// Build a materializer rooted at the project directory.
fn build_materializer(
    config: &EisensteinConfig,
    model_override: Option<String>,
    project_dir: &Path,
) -> EisensteinResult<RegistryMaterializer<GeminiClient>> {
    Ok(
        RegistryMaterializer::new(build_client(config, model_override)?, project_dir)
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens),
    )
}

/// Print an outline in play order.
fn print_outline(outline: &SectionOutline) {
    for spec in outline {
        let edited = if *spec.edited() { " (edited)" } else { "" };
        println!(
            "{:>6} frames  {}{}: {}",
            spec.duration_frames(),
            spec.identifier(),
            edited,
            spec.description()
        );
    }
    println!(
        "{} sections, {} frames total",
        outline.len(),
        outline.total_frames()
    );
}
