//! `pa-provider init` — generate a default TOML configuration file.

use std::fs;
use std::path::Path;

use pa_provider::config::generate_default_config;
use pa_provider::error::{Error, Result};

/// Execute the `init` command.
///
/// Writes a default TOML configuration template to `output`. Refuses to
/// overwrite an existing file unless `force` is `true`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        return Err(Error::config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }

    let content = generate_default_config();
    fs::write(output, content)
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))?;

    eprintln!("Config file written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_parseable_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        run(&path, false).expect("writes");
        let config = pa_provider::config::load_config(&path).expect("loads");
        assert_eq!(config, pa_provider::config::Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        run(&path, false).expect("writes");
        assert!(matches!(run(&path, false), Err(Error::Config(_))));
        run(&path, true).expect("overwrites with --force");
    }
}
