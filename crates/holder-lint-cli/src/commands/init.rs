//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# holder-lint configuration

# Severity at or above which `holder-lint check` exits with status 1
# fail_on = "error"

[analyzer]
# Root directory to analyze, relative to this file (default: the checked path)
# root = "app/src/main/java"

# Glob patterns to exclude from analysis
exclude = [
    "**/build/**",
    "**/.gradle/**",
    "**/generated/**",
]

# Respect .gitignore files
respect_gitignore = true

# RecyclerViewHolder subclasses must link their layout in the class Javadoc:
#
#   /**
#    * Feed card, inflated from {@link R.layout#item_feed}.
#    */
#   public class FeedHolder extends RecyclerViewHolder { }
[rules.viewholder-layout-doc]
enabled = true
# severity = "warning"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("holder-lint.toml"), force)?;

    println!("Created holder-lint.toml");
    println!("\nNext steps:");
    println!("  1. Adjust [analyzer] for your module layout");
    println!("  2. Run: holder-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use holder_lint_core::Config;

    #[test]
    fn template_is_valid_config() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("viewholder-layout-doc"));
        assert_eq!(config.analyzer.exclude.len(), 3);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("holder-lint.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
