//! Confirmation Mail Config

use clap::Args;

/// Confirmation mail settings.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// Sender identity on confirmation mail
    #[arg(
        long,
        env = "MAIL_FROM",
        default_value = "\"Nexus Gaming\" <orders@nexusgaming.com>"
    )]
    pub mail_from: String,
}
