//! Init command implementation - scaffolds a new Starlift project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Execute the init command
pub(crate) fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    let project_dir = Path::new(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new Starlift project: {}\n", args.name);

    let dirs = ["", "data/raw", "data/staging", "data/warehouse"];
    for dir in &dirs {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    // Escape YAML special characters in interpolated values
    let safe_name = args.name.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"
version: "1.0.0"

# Raw extracts are discovered as <source>_<table>.csv, e.g.
# sqlserver_orders.csv or access_customers.csv
raw_dir: "data/raw"
staging_dir: "data/staging"
warehouse_dir: "data/warehouse"
"#,
        name = safe_name,
    );
    fs::write(project_dir.join("starlift.yml"), config_content)
        .context("Failed to write starlift.yml")?;

    let gitignore = "data/staging/\ndata/warehouse/\n";
    fs::write(project_dir.join(".gitignore"), gitignore).context("Failed to write .gitignore")?;

    println!("  Created starlift.yml");
    println!("  Created data/raw/");
    println!("  Created data/staging/");
    println!("  Created data/warehouse/");
    println!("  Created .gitignore");
    println!();
    println!("Project '{}' initialized successfully!", args.name);
    println!();
    println!("Next steps:");
    println!("  cd {}", args.name);
    println!("  # drop raw extracts into data/raw/");
    println!("  sl run          # Run the full pipeline");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InitArgs;
    use tempfile::TempDir;

    #[test]
    fn test_init_rejects_bad_names() {
        for name in ["../evil", "a/b", ".hidden", "-flag"] {
            let args = InitArgs {
                name: name.to_string(),
            };
            assert!(execute(&args).is_err(), "accepted {}", name);
        }
    }

    #[test]
    fn test_init_scaffolds_project() {
        let dir = TempDir::new().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let args = InitArgs {
            name: "demo".to_string(),
        };
        let result = execute(&args);
        std::env::set_current_dir(prev).unwrap();
        result.unwrap();

        let root = dir.path().join("demo");
        assert!(root.join("starlift.yml").exists());
        assert!(root.join("data/raw").is_dir());
        assert!(root.join("data/warehouse").is_dir());

        let config = sl_core::Config::load_from_dir(&root).unwrap();
        assert_eq!(config.name, "demo");
    }
}
