use dialoguer::Select;
use modbundle::core::{BundleError, BundleResult};

// Trait for user input (for dependency injection in tests)
pub trait UserInput {
    fn prompt_select(&self, prompt: &str, items: &[String], default: usize) -> BundleResult<usize>;
}

// Real implementation using dialoguer
pub struct DialoguerInput;

impl UserInput for DialoguerInput {
    fn prompt_select(&self, prompt: &str, items: &[String], default: usize) -> BundleResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| BundleError::Config(format!("Failed to read input: {}", e)))
    }
}
