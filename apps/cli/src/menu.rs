//! # Text Menu Loop
//!
//! Line-oriented prompts over the inventory repository.
//!
//! ## Error Handling
//! Parse failures are rejected inline before they reach the store; store
//! errors (not found, constraint, invariant) are printed and the loop
//! re-prompts. The loop itself only exits on `quit` or end of input.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockroom_core::Item;
use stockroom_db::{Database, DbResult, InventoryRepository};

/// Column layout shared by `list` and the original grid view.
const HEADER: &str = "id        name                          price        amount";

/// Runs the menu loop until `quit` or EOF.
pub async fn run(db: &Database) -> io::Result<()> {
    let repo = db.inventory();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        let command = line.trim();

        if command.is_empty() {
            continue;
        }

        debug!(command, "Menu command");

        let result = match command {
            "help" => {
                print_help();
                Ok(())
            }
            "list" => list(&repo).await,
            "new" => new_item(&repo, &mut lines).await,
            "delete" => delete_item(&repo, &mut lines).await,
            "buy" => adjust(&repo, &mut lines, true).await,
            "sell" => adjust(&repo, &mut lines, false).await,
            "price" => set_price(&repo, &mut lines).await,
            "rename" => rename(&repo, &mut lines).await,
            "amount" => set_amount(&repo, &mut lines).await,
            "export" => export(&repo).await,
            "sql" => raw_sql(&repo, &mut lines).await,
            "quit" | "exit" => break,
            other => {
                println!("Unknown command '{other}'. Type 'help' for the command list.");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("Error: {err}");
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list     Show all items");
    println!("  new      Create a new item");
    println!("  delete   Delete an item");
    println!("  buy      Increase an item's stock");
    println!("  sell     Decrease an item's stock");
    println!("  price    Set or clear an item's price");
    println!("  rename   Rename an item");
    println!("  amount   Set an item's stock directly");
    println!("  export   Dump all items as JSON");
    println!("  sql      Run raw SQL (needs --unsafe-sql)");
    println!("  quit     Save and exit");
}

async fn list(repo: &InventoryRepository) -> DbResult<()> {
    let items: Vec<Item> = repo.list().await?;

    if items.is_empty() {
        println!("No items in inventory.");
        return Ok(());
    }

    println!("{HEADER}");
    for item in items {
        println!(
            "{:<10}{:<30}{:<13}{}",
            item.id,
            item.name,
            item.price_display(),
            item.amount
        );
    }

    Ok(())
}

async fn new_item<L>(repo: &InventoryRepository, lines: &mut L) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let Some(name) = prompt(lines, "Name: ") else {
        return Ok(());
    };
    let Some(price) = prompt_price(lines, "Price (empty for none): ") else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(lines, "Amount (empty for 0): ", 0) else {
        return Ok(());
    };

    let id = repo.create(&name, price, amount).await?;
    println!("Created item {id}");

    Ok(())
}

async fn delete_item<L>(repo: &InventoryRepository, lines: &mut L) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let pairs = repo.list_id_name_pairs().await?;
    if pairs.is_empty() {
        println!("No items to delete.");
        return Ok(());
    }

    for (id, name) in &pairs {
        println!("{id} - {name}");
    }

    let Some(id) = prompt_id(lines) else {
        return Ok(());
    };

    repo.delete(id).await?;
    println!("Deleted item {id}");

    Ok(())
}

async fn adjust<L>(repo: &InventoryRepository, lines: &mut L, buying: bool) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let Some(id) = prompt_id(lines) else {
        return Ok(());
    };
    let Some(n) = prompt_amount(lines, "Quantity: ", 1) else {
        return Ok(());
    };
    if n < 0 {
        println!("Quantity must not be negative; use the opposite command instead.");
        return Ok(());
    }

    let remaining = if buying {
        repo.buy(id, n).await?
    } else {
        repo.sell(id, n).await?
    };
    println!("Item {id} now has amount {remaining}");

    Ok(())
}

async fn set_price<L>(repo: &InventoryRepository, lines: &mut L) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let Some(id) = prompt_id(lines) else {
        return Ok(());
    };
    let Some(price) = prompt_price(lines, "New price (empty to clear): ") else {
        return Ok(());
    };

    repo.set_price(id, price).await?;
    println!("Updated price of item {id}");

    Ok(())
}

async fn rename<L>(repo: &InventoryRepository, lines: &mut L) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let Some(id) = prompt_id(lines) else {
        return Ok(());
    };
    let Some(name) = prompt(lines, "New name: ") else {
        return Ok(());
    };

    repo.rename(id, &name).await?;
    println!("Renamed item {id}");

    Ok(())
}

async fn set_amount<L>(repo: &InventoryRepository, lines: &mut L) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let Some(id) = prompt_id(lines) else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(lines, "New amount: ", 0) else {
        return Ok(());
    };

    repo.set_amount(id, amount).await?;
    println!("Updated amount of item {id}");

    Ok(())
}

async fn export(repo: &InventoryRepository) -> DbResult<()> {
    let items = repo.list().await?;

    match serde_json::to_string_pretty(&items) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Could not serialize items: {err}"),
    }

    Ok(())
}

async fn raw_sql<L>(repo: &InventoryRepository, lines: &mut L) -> DbResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    println!("WARNING: the statement is executed as-is, bypassing all validation.");
    let Some(sql) = prompt(lines, "SQL: ") else {
        return Ok(());
    };

    let affected = repo.raw_query(&sql).await?;
    println!("Affected rows: {affected}");

    Ok(())
}

// =============================================================================
// Prompt Helpers
// =============================================================================

/// Prompts for one non-empty line. `None` on EOF or empty input.
fn prompt<L>(lines: &mut L, label: &str) -> Option<String>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{label}");
    io::stdout().flush().ok()?;

    let line = lines.next()?.ok()?;
    let line = line.trim().to_string();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Prompts for an item id, rejecting non-numeric input inline.
fn prompt_id<L>(lines: &mut L) -> Option<i64>
where
    L: Iterator<Item = io::Result<String>>,
{
    let raw = prompt(lines, "Item id: ")?;
    match parse_i64(&raw) {
        Some(id) => Some(id),
        None => {
            println!("'{raw}' is not a valid id");
            None
        }
    }
}

/// Prompts for a price; empty input means "no price".
fn prompt_price<L>(lines: &mut L, label: &str) -> Option<Option<f64>>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{label}");
    io::stdout().flush().ok()?;

    let line = lines.next()?.ok()?;
    let raw = line.trim();
    if raw.is_empty() {
        return Some(None);
    }

    match parse_price(raw) {
        Some(price) => Some(Some(price)),
        None => {
            println!("'{raw}' is not a valid price");
            None
        }
    }
}

/// Prompts for a quantity; empty input falls back to `default`.
fn prompt_amount<L>(lines: &mut L, label: &str, default: i64) -> Option<i64>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{label}");
    io::stdout().flush().ok()?;

    let line = lines.next()?.ok()?;
    let raw = line.trim();
    if raw.is_empty() {
        return Some(default);
    }

    match parse_i64(raw) {
        Some(n) => Some(n),
        None => {
            println!("'{raw}' is not a valid amount");
            None
        }
    }
}

fn parse_i64(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|p| p.is_finite())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("42"), Some(42));
        assert_eq!(parse_i64("-3"), Some(-3));
        assert_eq!(parse_i64("abc"), None);
        assert_eq!(parse_i64("1.5"), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99"), Some(9.99));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("NaN"), None);
    }
}
