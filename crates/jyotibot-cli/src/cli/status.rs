//! Status command: where the data lives and whether a profile is saved.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Display data dir, endpoint, and profile presence.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let has_profile = state.profile_store.exists().await;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "endpoint_url": state.config.endpoint_url,
            "session_id": state.config.session_id,
            "profile_saved": has_profile,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Jyotibot v{}",
        style("*").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  Data dir:  {}", style(state.data_dir.display()).dim());
    println!("  Endpoint:  {}", style(&state.config.endpoint_url).dim());
    println!("  Session:   {}", style(&state.config.session_id).dim());
    if has_profile {
        println!("  Profile:   {}", style("saved").green());
    } else {
        println!(
            "  Profile:   {} (run: jyoti profile set)",
            style("missing").yellow()
        );
    }
    println!();
    Ok(())
}
