use anyhow::Result;
use recsvc::config::RecsvcConfig;
use recsvc::{db, store};

/// Display store statistics in the terminal.
pub fn stats(config: &RecsvcConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;

    let stats = store::stats(&conn)?;

    println!("Recommendation Store Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total records:       {}", stats.total);
    println!("  Active:              {}", stats.active);
    println!("  Inactive:            {}", stats.inactive);
    println!();

    if !stats.by_type.is_empty() {
        println!("By Type:");
        for (label, count) in &stats.by_type {
            println!("  {:<12} {}", label, count);
        }
    }

    Ok(())
}
