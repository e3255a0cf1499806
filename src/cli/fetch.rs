use super::input::{DialoguerInput, UserInput};
use modbundle::core::{BundleError, BundleResult};
use modbundle::di::{ProgressReporter, ServiceContainer, VersionSource};
use modbundle::progress::TerminalReporter;
use modbundle::registry::{DefaultReason, LoadSource, Registry};
use modbundle::updater::{Completion, RunRequest, Updater, KNOWN_LOADERS};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FetchOptions {
    pub game_version: Option<String>,
    pub loader: Option<String>,
    pub output: Option<PathBuf>,
    pub no_input: bool,
}

pub async fn run(options: FetchOptions) -> BundleResult<()> {
    let mut services = ServiceContainer::new()?;
    if let Some(dir) = &options.output {
        services = services.with_output_dir(dir);
    }

    let interactive = !options.no_input && std::io::stdin().is_terminal();
    let input: Option<&dyn UserInput> = if interactive {
        Some(&DialoguerInput)
    } else {
        None
    };

    run_with_services(services, &options, input, Arc::new(TerminalReporter::new())).await
}

/// Load the mod list, fill in missing choices, and run once
///
/// A run that downloads nothing is returned as [`BundleError::RunFailed`] so
/// the process exits non-zero.
pub async fn run_with_services(
    services: ServiceContainer,
    options: &FetchOptions,
    input: Option<&dyn UserInput>,
    reporter: Arc<dyn ProgressReporter>,
) -> BundleResult<()> {
    let (registry, source) = Registry::load(services.store());
    if let LoadSource::Defaulted(DefaultReason::Unreadable(reason)) = &source {
        println!(
            "⚠️  Could not read the saved mod list ({}), using the default list",
            reason
        );
    }

    let request = build_request(services.versions(), options, input).await?;

    let mut updater = Updater::new(services, reporter);
    let outcome = updater.run(&request, &registry).await?;

    match outcome.completion {
        Completion::Failure => Err(BundleError::RunFailed {
            game_version: request.game_version.trim().to_string(),
            loader: request.loader.trim().to_lowercase(),
        }),
        Completion::Success | Completion::Partial => Ok(()),
    }
}

/// Take version and loader from the flags, prompting for whatever is missing
async fn build_request(
    versions: &dyn VersionSource,
    options: &FetchOptions,
    input: Option<&dyn UserInput>,
) -> BundleResult<RunRequest> {
    let mut game_version = options.game_version.clone().unwrap_or_default();
    let mut loader = options.loader.clone().unwrap_or_default();

    if let Some(input) = input {
        if game_version.trim().is_empty() {
            game_version = prompt_game_version(versions, input).await?;
        }
        if loader.trim().is_empty() {
            loader = prompt_loader(input)?;
        }
    }

    Ok(RunRequest::new(game_version, loader))
}

/// Pick a version from the remote list
///
/// When the list cannot be loaded the error is shown once and the selection
/// stays empty, so the run fails validation.
async fn prompt_game_version(
    versions: &dyn VersionSource,
    input: &dyn UserInput,
) -> BundleResult<String> {
    let items: Vec<String> = match versions.fetch_versions().await {
        Ok(list) => list.into_iter().map(|v| v.version).collect(),
        Err(e) => {
            println!("✖ Failed to load game versions: {}", e);
            return Ok(String::new());
        }
    };
    if items.is_empty() {
        return Ok(String::new());
    }

    let index = input.prompt_select("Minecraft version", &items, 0)?;
    Ok(items.get(index).cloned().unwrap_or_default())
}

fn prompt_loader(input: &dyn UserInput) -> BundleResult<String> {
    let items: Vec<String> = KNOWN_LOADERS.iter().map(|l| l.to_string()).collect();
    let index = input.prompt_select("Mod loader", &items, 0)?;
    Ok(items.get(index).cloned().unwrap_or_default())
}
