//! The `tempotrain stats` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tempotrain_content::dashboard::{kpis, monthly_progress, theme_performance, PerfBand};

pub fn execute() -> Result<()> {
    let mut kpi_table = Table::new();
    kpi_table.set_header(vec!["Indicateur", "Valeur", "Évolution"]);
    for kpi in kpis() {
        kpi_table.add_row(vec![
            Cell::new(&kpi.label),
            Cell::new(&kpi.value),
            Cell::new(&kpi.change),
        ]);
    }
    println!("{kpi_table}");

    let mut perf_table = Table::new();
    perf_table.set_header(vec!["Thématique", "Score", "Quiz", "Tendance"]);
    for perf in theme_performance() {
        let band = match perf.band() {
            PerfBand::Strong => "solide",
            PerfBand::Fair => "correct",
            PerfBand::Weak => "à revoir",
        };
        perf_table.add_row(vec![
            Cell::new(&perf.theme),
            Cell::new(format!("{}%", perf.score)),
            Cell::new(perf.quizzes),
            Cell::new(band),
        ]);
    }
    println!("\nPerformance par thématique\n{perf_table}");

    println!("\nProgression mensuelle");
    for month in monthly_progress() {
        let bar = "█".repeat((month.score / 5) as usize);
        println!("  {:<5} {:>3}% {}", month.month, month.score, bar);
    }

    Ok(())
}
