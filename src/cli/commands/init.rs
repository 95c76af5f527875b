//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::sample_config;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Also create the data directories with example input files
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Veil configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        if let Err(e) = fs::write(&self.output, sample_config()) {
            println!("❌ Failed to write configuration file");
            println!("   Error: {e}");
            return Ok(5); // Fatal error exit code
        }
        println!("✅ Configuration file created: {}", self.output);

        if self.with_examples {
            if let Err(e) = Self::write_examples() {
                println!("❌ Failed to write example input files");
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
            println!("✅ Example input files created under ./data/input");
        }

        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your settings", self.output);
        println!("  2. Validate configuration: veil validate-config");
        if self.with_examples {
            println!("  3. Queue an example: veil submit people.json");
            println!("  4. Drain the queue: veil worker --once");
            println!("  5. Check the result: veil status people.json");
        } else {
            println!("  3. Queue a file: veil submit <file-ref>");
            println!("  4. Drain the queue: veil worker --once");
        }
        println!();

        Ok(0)
    }

    /// Write small example inputs matching the default schema
    fn write_examples() -> std::io::Result<()> {
        fs::create_dir_all("./data/input")?;

        fs::write(
            "./data/input/people.json",
            concat!(
                "{\n",
                "  \"name\": \"Maria Rossi\",\n",
                "  \"email\": \"maria.rossi@example.com\",\n",
                "  \"age\": 41\n",
                "}\n"
            ),
        )?;

        fs::write(
            "./data/input/people.csv",
            concat!(
                "name,city,age\n",
                "Maria Rossi,Florence,41\n",
                "Ken Watanabe,Kyoto,58\n"
            ),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "veil.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "veil.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[tokio::test]
    async fn test_init_writes_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("veil.toml");

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        let written = std::fs::read_to_string(&output).unwrap();
        let config: crate::config::VeilConfig = toml::from_str(&written).unwrap();
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("veil.toml");
        std::fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            with_examples: false,
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
    }
}
