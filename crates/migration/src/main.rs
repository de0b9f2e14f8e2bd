//! `migration [up [N] | down [N] | fresh | refresh | status]`
//!
//! Applies the `sales` schema history to the database named by
//! `DATABASE_URL` (default `sqlite:./sales.db?mode=rwc`). `N` limits the
//! number of steps; without it every pending migration is applied (`up`) or
//! only the last one is rolled back (`down`).

use sea_orm::Database;
use sea_orm_migration::prelude::*;

const USAGE: &str = "Usage: cargo run -p migration -- [up [N]|down [N]|fresh|refresh|status]";

fn steps(arg: Option<String>) -> Option<u32> {
    match arg.map(|raw| raw.parse::<u32>()) {
        Some(Ok(n)) => Some(n),
        Some(Err(_)) => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        None => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "up".to_string());

    let db_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:./sales.db?mode=rwc".to_string());
    let db = Database::connect(&db_url).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, steps(args.next())).await?,
        "down" => migration::Migrator::down(&db, Some(steps(args.next()).unwrap_or(1))).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        "refresh" => migration::Migrator::refresh(&db).await?,
        "status" => migration::Migrator::status(&db).await?,
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
