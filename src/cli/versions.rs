use modbundle::core::BundleResult;
use modbundle::di::{ServiceContainer, VersionSource};
use modbundle::modrinth::GameVersion;

pub async fn run(releases_only: bool) -> BundleResult<()> {
    let services = ServiceContainer::new()?;
    let versions = list_versions(services.versions(), releases_only).await?;

    if versions.is_empty() {
        println!("No game versions available.");
        return Ok(());
    }

    for version in &versions {
        if version.is_release() {
            println!("{}", version.version);
        } else {
            println!("{}  ({})", version.version, version.version_type);
        }
    }

    Ok(())
}

/// Versions in the order the service returns them
pub async fn list_versions(
    source: &dyn VersionSource,
    releases_only: bool,
) -> BundleResult<Vec<GameVersion>> {
    let versions = source.fetch_versions().await?;
    Ok(versions
        .into_iter()
        .filter(|v| !releases_only || v.is_release())
        .collect())
}
