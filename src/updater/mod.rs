//! The resolve → download → package run
//!
//! A run walks the registry strictly in order. Each entry is resolved, then
//! downloaded, then recorded as a success or failure; a failed entry never
//! stops the loop. The archive is saved only when at least one entry
//! succeeded.

use crate::archive::{archive_file_name, ArchiveBuilder, Manifest};
use crate::core::{BundleError, BundleResult};
use crate::di::{ProgressReporter, ServiceContainer};
use crate::progress::{item_percent, Notification};
use crate::registry::{ModDescriptor, Registry};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loaders offered when prompting; any non-empty loader is accepted
pub const KNOWN_LOADERS: &[&str] = &["fabric", "forge", "quilt", "neoforge"];

/// What the user asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    pub game_version: String,
    pub loader: String,
}

impl RunRequest {
    pub fn new(game_version: impl Into<String>, loader: impl Into<String>) -> Self {
        Self {
            game_version: game_version.into(),
            loader: loader.into(),
        }
    }

    /// Trimmed game version and lowercased loader, or a validation error
    ///
    /// Both end up in the archive file name, so path separators are rejected.
    pub fn validate(&self) -> BundleResult<(String, String)> {
        let game_version = self.game_version.trim();
        let loader = self.loader.trim();
        if game_version.is_empty() || loader.is_empty() {
            return Err(BundleError::Validation(
                "Select a game version and a loader".to_string(),
            ));
        }
        if [game_version, loader]
            .iter()
            .any(|field| field.contains(['/', '\\']))
        {
            return Err(BundleError::Validation(format!(
                "Invalid game version or loader '{}' / '{}'",
                game_version, loader
            )));
        }
        Ok((game_version.to_string(), loader.to_lowercase()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed(Completion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Success,
    Partial,
    Failure,
}

/// Phase of the entry currently being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Resolving,
    Downloading,
    Recorded,
}

/// Per-run tally; successes and failures partition the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub total: usize,
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

impl RunResult {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn succeeded(&self) -> usize {
        self.successes.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Result of a run that got past validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub completion: Completion,
    pub result: RunResult,
    /// Where the archive was saved; `None` when nothing was downloaded
    pub archive_path: Option<PathBuf>,
}

/// Drives runs against the services in a [`ServiceContainer`]
///
/// `run` takes `&mut self`, so a second run cannot start while one is in
/// progress.
pub struct Updater {
    services: ServiceContainer,
    reporter: Arc<dyn ProgressReporter>,
    state: RunState,
    current: Option<(usize, ItemPhase)>,
    today: Option<NaiveDate>,
}

impl Updater {
    pub fn new(services: ServiceContainer, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            services,
            reporter,
            state: RunState::Idle,
            current: None,
            today: None,
        }
    }

    /// Pin the date written into the manifest (defaults to today)
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    #[cfg(test)]
    fn current_item(&self) -> Option<(usize, ItemPhase)> {
        self.current
    }

    /// Run once over `registry`
    ///
    /// Validation and archive failures abort with an error (after a failure
    /// notification). Per-item misses and download errors are recorded in the
    /// outcome instead.
    pub async fn run(
        &mut self,
        request: &RunRequest,
        registry: &Registry,
    ) -> BundleResult<RunOutcome> {
        let (game_version, loader) = match request.validate() {
            Ok(valid) => valid,
            Err(e) => {
                self.reporter
                    .notify(&Notification::failure(e.to_string(), Vec::new()));
                return Err(e);
            }
        };

        self.state = RunState::Running;
        info!(
            "Bundling {} mods for {} ({})",
            registry.len(),
            game_version,
            loader
        );
        self.reporter.update(0.0, "Preparing...");

        let config = self.services.config();
        let subfolder = config.archive_subfolder().to_string();
        let mut builder = ArchiveBuilder::new(&subfolder, config.compression_level());
        let mut result = RunResult::new(registry.len());

        for (index, descriptor) in registry.iter().enumerate() {
            self.process_item(index, descriptor, &game_version, &loader, &mut builder, &mut result)
                .await;
        }
        self.current = None;

        if result.succeeded() == 0 {
            return Ok(self.fail_empty(&game_version, &loader, result));
        }

        let manifest = Manifest {
            game_version: &game_version,
            loader: &loader,
            subfolder: &subfolder,
            result: &result,
            generated_on: self.today.unwrap_or_else(|| Local::now().date_naive()),
        }
        .render();

        let archive_name = archive_file_name(&game_version, &loader);
        let saved = builder
            .finish(&manifest)
            .and_then(|bytes| self.services.sink().save(&bytes, &archive_name));
        let archive_path = match saved {
            Ok(path) => path,
            Err(e) => return Err(self.abort(e)),
        };

        self.reporter.update(100.0, "Download complete!");

        let headline = format!(
            "Saved {} ({}/{} mods)",
            archive_path.display(),
            result.succeeded(),
            result.total
        );
        let (completion, notification) = if result.failures.is_empty() {
            (Completion::Success, Notification::success(headline))
        } else {
            (
                Completion::Partial,
                Notification::partial(headline, result.failures.clone()),
            )
        };

        info!(
            "Run finished: {} downloaded, {} failed",
            result.succeeded(),
            result.failed()
        );
        self.state = RunState::Completed(completion);
        self.reporter.notify(&notification);

        Ok(RunOutcome {
            completion,
            result,
            archive_path: Some(archive_path),
        })
    }

    /// Resolve, download and record one entry
    ///
    /// Misses, download failures and rejected archive entries are recorded
    /// in `result`; none of them stops the run.
    async fn process_item(
        &mut self,
        index: usize,
        descriptor: &ModDescriptor,
        game_version: &str,
        loader: &str,
        builder: &mut ArchiveBuilder,
        result: &mut RunResult,
    ) {
        let total = result.total;
        let name = &descriptor.display_name;

        self.enter(index, ItemPhase::Resolving);
        self.reporter.update(
            item_percent(index, total, false),
            &format!("Resolving {}...", name),
        );

        let release = self
            .services
            .resolver()
            .resolve(&descriptor.host_id, game_version, loader)
            .await;

        match release {
            None => {
                result.failures.push(format!(
                    "{}: no release found for {} ({})",
                    name, game_version, loader
                ));
            }
            Some(release) => {
                self.enter(index, ItemPhase::Downloading);
                self.reporter.update(
                    item_percent(index, total, true),
                    &format!("Downloading {}...", name),
                );

                match self
                    .services
                    .fetcher()
                    .fetch(&release.download_url, &release.file_name)
                    .await
                {
                    Ok(bytes) => match builder.add_mod(&release.file_name, &bytes) {
                        Ok(_) => result.successes.push(format!(
                            "{} {} ({})",
                            name, release.version, release.file_name
                        )),
                        Err(BundleError::Archive(reason)) => {
                            warn!("Skipping {}: {}", name, reason);
                            result.failures.push(format!("{}: {}", name, reason));
                        }
                        Err(e) => {
                            warn!("Skipping {}: {}", name, e);
                            result.failures.push(format!("{}: {}", name, e));
                        }
                    },
                    Err(e) => {
                        warn!("Failed to download {}: {}", release.download_url, e);
                        result
                            .failures
                            .push(format!("{}: download failed ({})", name, e));
                    }
                }
            }
        }

        self.enter(index, ItemPhase::Recorded);
        self.reporter.update(
            item_percent(index + 1, total, false),
            &format!("Downloaded {}/{}", result.succeeded(), total),
        );
    }

    fn enter(&mut self, index: usize, phase: ItemPhase) {
        match self.current.replace((index, phase)) {
            Some((previous, from)) if previous == index => {
                debug!("Item {}: {:?} -> {:?}", index, from, phase)
            }
            _ => debug!("Item {}: {:?}", index, phase),
        }
    }

    /// Zero successes: no archive, failure notification with diagnostics
    fn fail_empty(&mut self, game_version: &str, loader: &str, result: RunResult) -> RunOutcome {
        warn!("No mods downloaded for {} ({})", game_version, loader);

        let mut hints = Vec::new();
        if result.total == 0 {
            hints.push("The mod list is empty (add mods with `modbundle mods add`)".to_string());
        } else {
            hints.push(format!(
                "None of the mods has a release for Minecraft {} with {}",
                game_version, loader
            ));
            hints.push("The mod hosting service could not be reached".to_string());
            hints.push("A mod id in the list is misspelled".to_string());
        }

        self.state = RunState::Completed(Completion::Failure);
        self.reporter.notify(
            &Notification::failure("No mods could be downloaded", result.failures.clone())
                .with_hints(hints),
        );

        RunOutcome {
            completion: Completion::Failure,
            result,
            archive_path: None,
        }
    }

    /// Finalize or save failure: single notification, run ends as a failure
    fn abort(&mut self, error: BundleError) -> BundleError {
        let reason = match error {
            BundleError::Archive(reason) => reason,
            other => other.to_string(),
        };
        warn!("Run aborted: {}", reason);

        self.current = None;
        self.state = RunState::Completed(Completion::Failure);
        self.reporter.notify(&Notification::failure(
            format!("Failed to create the archive: {}", reason),
            Vec::new(),
        ));
        BundleError::Archive(reason)
    }
}
