//! The `tempotrain ask` command.

use std::time::Duration;

use anyhow::Result;

use tempotrain_agents::AdviceRequest;
use tempotrain_content::advisors::{builtin_advisors, TYPING_DELAY};

pub async fn execute(question: Vec<String>, agent: String, instant: bool) -> Result<()> {
    let question = question.join(" ");
    anyhow::ensure!(
        !question.trim().is_empty(),
        "no question given; try: tempotrain ask \"Combien de CP par mois ?\""
    );

    let delay = if instant { Duration::ZERO } else { TYPING_DELAY };
    let registry = builtin_advisors(delay);
    let advisor = registry.get(&agent)?;

    tracing::info!(agent = %agent, "asking advisor");

    let response = advisor.respond(&AdviceRequest { question }).await?;

    println!("[{}]", response.agent);
    println!("{}", response.content);

    Ok(())
}
