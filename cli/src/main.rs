mod board;
mod tui;

use anyhow::Result;
use clap::Parser;
use tallyboard_core::{BoardService, FileSnapshotRepository, SortOrder};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tallyboard")]
#[command(about = "A daily tally board for 50 numbered slots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Record an amount against a slot (1-50)
    Add {
        slot: u8,
        amount: String,
    },
    /// Remove one entry from a slot (1-based position within the slot)
    Remove {
        slot: u8,
        position: usize,
    },
    /// Print today's records
    List {
        /// Sort by total descending instead of slot number
        #[arg(long)]
        by_total: bool,
    },
    /// Clear the whole board and the stored snapshot
    Clear {
        /// Required confirmation, stands in for the UI dialog
        #[arg(long)]
        yes: bool,
    },
    /// Open the terminal user interface
    Tui,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = FileSnapshotRepository::new(None)?;
    let mut service = BoardService::new(repo);

    match cli.command {
        Some(Commands::Add { slot, amount }) => {
            if service.add_amount(slot, &amount) {
                println!(
                    "Slot {}: total ¥{:.2}",
                    slot,
                    service.ledger().slot_total(slot)
                );
            } else {
                println!("Rejected: slot must be 1-50 and the amount a positive number.");
            }
        }
        Some(Commands::Remove { slot, position }) => {
            let removed = position
                .checked_sub(1)
                .map(|index| service.remove_amount(slot, index))
                .unwrap_or(false);
            if removed {
                println!(
                    "Removed entry {} from slot {} (total now ¥{:.2})",
                    position,
                    slot,
                    service.ledger().slot_total(slot)
                );
            } else {
                println!("No such entry: slot {} position {}", slot, position);
            }
        }
        Some(Commands::List { by_total }) => {
            let order = if by_total {
                SortOrder::TotalDescending
            } else {
                SortOrder::SlotAscending
            };
            board::show_board(&service.day_label(), &service.projection(order));
        }
        Some(Commands::Clear { yes }) => {
            if yes {
                service.clear();
                println!("Board cleared.");
            } else {
                println!("Refusing to clear without --yes.");
            }
        }
        Some(Commands::Tui) | None => {
            // TUI is the primary surface; bare `tallyboard` opens it.
            tui::run(service)?;
        }
    }
    Ok(())
}
