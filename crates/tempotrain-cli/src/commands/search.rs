//! The `tempotrain search` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tempotrain_content::knowledge::{knowledge_base, search_docs, DocCategory};

pub fn execute(query: Option<String>, category: Option<String>) -> Result<()> {
    let category = category
        .map(|c| c.parse::<DocCategory>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let docs = knowledge_base();
    let hits = search_docs(&docs, query.as_deref(), category);

    if hits.is_empty() {
        println!("Aucun document trouvé.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Titre", "Catégorie", "Thématique"]);
    for doc in &hits {
        table.add_row(vec![
            Cell::new(&doc.title),
            Cell::new(doc.category),
            Cell::new(&doc.theme),
        ]);
    }
    println!("{table}");

    for doc in &hits {
        println!("\n{}\n  {}", doc.title, doc.excerpt);
    }

    Ok(())
}
