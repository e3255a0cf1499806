use crate::updater::RunResult;
use chrono::NaiveDate;

/// README written at the root of every archive
pub struct Manifest<'a> {
    pub game_version: &'a str,
    pub loader: &'a str,
    pub subfolder: &'a str,
    pub result: &'a RunResult,
    pub generated_on: NaiveDate,
}

impl Manifest<'_> {
    pub fn render(&self) -> String {
        let mut lines = vec![
            "Minecraft Mods Collection".to_string(),
            "=========================".to_string(),
            String::new(),
            format!("Version: {}", self.game_version),
            format!("Loader: {}", self.loader),
            format!("Total mods: {}", self.result.total),
            format!("Successfully downloaded: {}", self.result.succeeded()),
            format!("Failed: {}", self.result.failed()),
            String::new(),
            "Mods included:".to_string(),
        ];
        lines.extend(self.result.successes.iter().map(|s| format!("- {}", s)));

        if !self.result.failures.is_empty() {
            lines.push(String::new());
            lines.push("Failed to download:".to_string());
            lines.extend(self.result.failures.iter().map(|f| format!("- {}", f)));
        }

        lines.extend([
            String::new(),
            "Instructions:".to_string(),
            "1. Extract this ZIP file".to_string(),
            format!(
                "2. Copy the '{}' folder to your Minecraft directory",
                self.subfolder
            ),
            format!("3. Launch Minecraft with {} loader", self.loader),
            String::new(),
            format!(
                "Generated by modbundle on {}",
                self.generated_on.format("%Y-%m-%d")
            ),
        ]);

        lines.join("\n")
    }
}
