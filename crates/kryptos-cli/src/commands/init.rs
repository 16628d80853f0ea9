use anyhow::Result;
use kryptos_config::Config;
use std::path::Path;

pub fn handle(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("✓ Created {}", path.display());

    Ok(())
}
