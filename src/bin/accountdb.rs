use accountdb::{Account, AccountDao, Config, ConnectionProvider, Result, SqliteAccountDao};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

fn main() -> ExitCode {
    // Initialize the logging system using tracing subscriber; stdout carries the demo output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Starting accountdb...");

    // Optional first argument: path to a TOML config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    match run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("accountdb failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Walks one record through create, read, update and delete.
fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default(config_path.as_deref())?;
    println!("Using database: {}", config.database.path);

    let provider = Arc::new(ConnectionProvider::open(config.database)?);
    let dao = SqliteAccountDao::new(Arc::clone(&provider));

    let mut account = Account::new(
        "Olena",
        "Shevchenko",
        "olena_shev",
        "olena@example.com",
        "pass123",
        2,
    );
    dao.add(&mut account)?;
    println!("Created: {}", account);

    print_all(&dao)?;

    account.email = "olena.shev@newmail.com".to_string();
    dao.update(&account)?;
    println!("After update: {}", dao.require_by_id(account.id)?);

    dao.delete(account.id)?;
    println!("After delete:");
    print_all(&dao)?;

    provider.close()?;
    Ok(())
}

fn print_all(dao: &impl AccountDao) -> Result<()> {
    for account in dao.get_all()? {
        println!("{}", serde_json::to_string(&account)?);
    }
    Ok(())
}
