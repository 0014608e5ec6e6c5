//! The `tempotrain board` command.
//!
//! The board is rebuilt from its seed on every invocation; `--add` and
//! `--move-ticket` mutate only this run's copy.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tempotrain_content::board::{Priority, TicketBoard, TicketStatus};

pub fn execute(
    add: Option<String>,
    priority: String,
    theme: String,
    estimate: String,
    move_ticket: Option<u32>,
    to: Option<String>,
) -> Result<()> {
    let mut board = TicketBoard::seeded();

    if let Some(title) = add {
        let priority: Priority = priority
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{}", e))?;
        let id = board.add(title, priority, theme, estimate)?;
        println!("Ticket #{id} créé dans « À faire ».\n");
    }

    if let Some(id) = move_ticket {
        let to = to.ok_or_else(|| anyhow::anyhow!("--move-ticket requires --to"))?;
        let status: TicketStatus = to.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
        board.move_ticket(id, status)?;
        println!("Ticket #{id} déplacé vers « {status} ».\n");
    }

    let stats = board.stats();
    println!(
        "{} tickets — {} en cours, {} terminés",
        stats.total, stats.in_progress, stats.done
    );

    for status in TicketStatus::ALL {
        let column = board.column(status);
        println!("\n{status} ({})", column.len());

        if column.is_empty() {
            continue;
        }

        let mut table = Table::new();
        table.set_header(vec!["Id", "Titre", "Priorité", "Thématique", "Estimation"]);
        for ticket in column {
            table.add_row(vec![
                Cell::new(ticket.id),
                Cell::new(&ticket.title),
                Cell::new(ticket.priority),
                Cell::new(&ticket.theme),
                Cell::new(&ticket.estimate),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
