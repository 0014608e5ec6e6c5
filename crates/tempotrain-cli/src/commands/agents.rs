//! The `tempotrain agents` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tempotrain_content::advisors::{builtin_advisors, ADVISOR_NAMES, GREETING};

pub fn execute() -> Result<()> {
    let registry = builtin_advisors(std::time::Duration::ZERO);

    println!("{GREETING}\n");

    let mut table = Table::new();
    table.set_header(vec!["Agent", "Disponible"]);
    for name in ADVISOR_NAMES {
        let available = if registry.get(name).is_ok() {
            "oui"
        } else {
            "non"
        };
        table.add_row(vec![Cell::new(name), Cell::new(available)]);
    }

    println!("{table}");
    println!("Posez une question : `tempotrain ask --agent \"Agent CP\" \"votre question\"`");

    Ok(())
}
