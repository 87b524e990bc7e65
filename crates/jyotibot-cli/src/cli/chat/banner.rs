//! Welcome banner for chat sessions.

use console::style;

/// Print the banner at the start of a chat session.
pub fn print_welcome_banner(endpoint_url: &str, has_profile: bool) {
    println!();
    println!("  {} {}", "☸", style("Jyotibot").cyan().bold());
    println!("  {}", style("Your astrologer, one question at a time.").dim());
    println!();
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint_url).dim());
    if !has_profile {
        println!(
            "  {} No profile saved; answers will lack your birth details. Run: jyoti profile set",
            style("!").yellow().bold()
        );
    }
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
