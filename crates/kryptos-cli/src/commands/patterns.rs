use anyhow::Result;
use kryptos_config::Config;
use kryptos_security::PatternLibrary;

pub fn handle(config: &Config) -> Result<()> {
    let library = PatternLibrary::with_disabled(&config.patterns.disabled);

    println!("Active patterns:");
    for &category in library.categories() {
        if let Some(regex) = library.regex(category) {
            println!("  {:<20} {}", category.to_string(), regex.as_str());
        }
    }

    if !config.patterns.disabled.is_empty() {
        let disabled: Vec<String> = config.patterns.disabled.iter().map(|c| c.to_string()).collect();
        println!("Disabled: {}", disabled.join(", "));
    }

    Ok(())
}
