use modbundle::core::{BundleError, BundleResult};
use modbundle::di::RegistryStore;
use modbundle::registry::{DefaultReason, FileRegistryStore, LoadSource, Registry};

pub fn list() -> BundleResult<()> {
    list_with_store(&FileRegistryStore::open_default()?)
}

pub fn add(name: &str, id: &str) -> BundleResult<()> {
    add_with_store(&FileRegistryStore::open_default()?, name, id)
}

pub fn remove(target: &str) -> BundleResult<()> {
    remove_with_store(&FileRegistryStore::open_default()?, target)
}

pub fn reset() -> BundleResult<()> {
    reset_with_store(&FileRegistryStore::open_default()?)
}

fn load(store: &dyn RegistryStore) -> Registry {
    let (registry, source) = Registry::load(store);
    if let LoadSource::Defaulted(DefaultReason::Unreadable(reason)) = source {
        println!(
            "⚠️  Could not read the saved mod list ({}), using the default list",
            reason
        );
    }
    registry
}

pub fn list_with_store(store: &dyn RegistryStore) -> BundleResult<()> {
    let registry = load(store);

    if registry.is_empty() {
        println!("No mods in the list.");
        println!("Add one with: modbundle mods add <NAME> <ID>");
        return Ok(());
    }

    println!("Mods ({}):", registry.len());
    for (i, descriptor) in registry.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            descriptor.display_name,
            descriptor.host_id
        );
    }

    Ok(())
}

pub fn add_with_store(store: &dyn RegistryStore, name: &str, id: &str) -> BundleResult<()> {
    let mut registry = load(store);
    let added = registry.add(name, id)?.clone();
    registry.save(store)?;

    println!("✓ Added {} ({})", added.display_name, added.host_id);
    Ok(())
}

/// Remove by mod id, or by the 1-based position shown in `mods list`
///
/// An exact id match wins over reading `target` as a position.
pub fn remove_with_store(store: &dyn RegistryStore, target: &str) -> BundleResult<()> {
    let mut registry = load(store);
    let target = target.trim();

    let removed = match target.parse::<usize>() {
        Ok(0) if !registry.contains(target) => {
            return Err(BundleError::Registry(
                "Positions start at 1 (see `modbundle mods list`)".to_string(),
            ));
        }
        Ok(position) if !registry.contains(target) => registry.remove(position - 1)?,
        _ => registry.remove_by_id(target)?,
    };
    registry.save(store)?;

    println!("✓ Removed {} ({})", removed.display_name, removed.host_id);
    Ok(())
}

pub fn reset_with_store(store: &dyn RegistryStore) -> BundleResult<()> {
    let mut registry = load(store);
    registry.reset();
    registry.save(store)?;

    println!("✓ Restored the default mod list ({} mods)", registry.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use modbundle::di::mocks::MockRegistryStore;

    fn stored_ids(store: &MockRegistryStore) -> Vec<String> {
        let (registry, source) = Registry::load(store);
        assert_eq!(source, LoadSource::Stored);
        registry.iter().map(|m| m.host_id.clone()).collect()
    }

    #[test]
    fn test_add_persists_full_list() {
        let store = MockRegistryStore::new();
        add_with_store(&store, "Mod Menu", "modmenu").unwrap();

        assert_eq!(
            stored_ids(&store),
            vec!["sodium", "lithium", "fabric-api", "iris", "modmenu"]
        );
    }

    #[test]
    fn test_add_duplicate_does_not_write() {
        let store = MockRegistryStore::new();
        assert!(add_with_store(&store, "Sodium again", "sodium").is_err());
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_remove_by_position() {
        let store = MockRegistryStore::new();
        remove_with_store(&store, "2").unwrap();

        assert_eq!(stored_ids(&store), vec!["sodium", "fabric-api", "iris"]);
    }

    #[test]
    fn test_remove_by_id() {
        let store = MockRegistryStore::new();
        remove_with_store(&store, "fabric-api").unwrap();

        assert_eq!(stored_ids(&store), vec!["sodium", "lithium", "iris"]);
    }

    #[test]
    fn test_remove_numeric_id_wins_over_position() {
        let store = MockRegistryStore::new();
        add_with_store(&store, "Numbered", "1").unwrap();
        remove_with_store(&store, "1").unwrap();

        assert_eq!(
            stored_ids(&store),
            vec!["sodium", "lithium", "fabric-api", "iris"]
        );
    }

    #[test]
    fn test_remove_out_of_range_position() {
        let store = MockRegistryStore::new();
        assert!(remove_with_store(&store, "0").is_err());
        assert!(remove_with_store(&store, "5").is_err());
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = MockRegistryStore::with_contents(
            r#"[{"displayName":"Mod Menu","slug":"modmenu","hostId":"modmenu"}]"#,
        );
        reset_with_store(&store).unwrap();

        assert_eq!(
            stored_ids(&store),
            vec!["sodium", "lithium", "fabric-api", "iris"]
        );
    }

    #[test]
    fn test_list_does_not_write() {
        let store = MockRegistryStore::new();
        list_with_store(&store).unwrap();
        assert!(store.contents().is_none());
    }
}
