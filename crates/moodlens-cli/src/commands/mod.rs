pub mod config;
pub mod detect;
pub mod repl;

use colored::Colorize;
use moodlens_core::MoodlensError;

/// Prints a detection failure the way an end user should see it.
///
/// Validation problems are warnings; everything else is logged in full and
/// shown with its generic message.
pub(crate) fn print_failure(err: &MoodlensError) {
    if err.is_validation() {
        println!("{}", format!("⚠️  {}", err.user_message()).yellow());
    } else {
        tracing::error!(error = %err, "Detection failed");
        eprintln!("{}", err.user_message().red());
    }
}
