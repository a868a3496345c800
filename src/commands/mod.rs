// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! One-shot commands
//!
//! Non-interactive counterparts of the TUI widgets: one request, plain
//! stdout, errors propagated to main. `ask` opens a fresh conversation per
//! invocation; session identifiers are not persisted across processes.

use crate::backend::{Backend, ChatRequest};
use crate::error::{CampusError, Result};
use crate::tui::controllers::NO_RESULTS_PLACEHOLDER;

/// Ask the portal assistant a single question and print the reply.
pub async fn run_ask(backend: &dyn Backend, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CampusError::InvalidInput(
            "nothing to ask: the question is empty".to_string(),
        ));
    }

    let reply = backend.chat(ChatRequest::new(text, None)).await?;
    println!("{}", reply.response);
    Ok(())
}

/// Search the portal and print one block per result.
pub async fn run_search(backend: &dyn Backend, query: &str) -> Result<()> {
    let results = backend.search(query.trim()).await?;

    if results.is_empty() {
        println!("{}", NO_RESULTS_PLACEHOLDER);
        return Ok(());
    }

    for result in results {
        println!("{}", result.title);
        println!("  {}", result.url);
        if let Some(headline) = result.headline {
            println!("  {}", headline);
        }
    }
    Ok(())
}

/// Print the portal news list in response order.
pub async fn run_news(backend: &dyn Backend) -> Result<()> {
    let items = backend.news().await?;

    for item in items {
        match &item.date {
            Some(date) => println!("{}  ({})", item.title, date),
            None => println!("{}", item.title),
        }
        println!("  {}", item.image_link);
        println!("  {}", item.description);
        println!();
    }
    Ok(())
}
