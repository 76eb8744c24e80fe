//! Chat replies. Fixed texts plus [`render_outcome`], which turns a [`LaunchOutcome`] into Telegram HTML.
//!
//! User-supplied values are escaped; failure replies never carry the underlying cause.

use launch_client::LaunchOutcome;
use teloxide::utils::html::escape;

pub const WELCOME_TEXT: &str = "🏙️🐒 <b>Welcome to Ape City Launchpad on Base!</b>\n\n\
Launch memecoins for FREE (only gas).\n\
Bonding curve → Auto migration to Uniswap V3.\n\
Creator reward + burned LP.\n\n\
Use /launch to create your token!";

pub const USAGE_TEXT: &str = "Reply with token details:\n\n\
<code>Name|Symbol|Supply</code>\n\
Example: <code>MyCoin|MYC|1000000000</code>";

/// Sent as plain text before the transaction goes out.
pub const LAUNCHING_TEXT: &str = "🚀 Launching your token... (10-30 sec)";

pub const INVALID_FORMAT_TEXT: &str = "❌ Invalid format. Use: Name|Symbol|Supply";

pub const LAUNCH_FAILED_TEXT: &str = "❌ Launch failed. Check details or try again.";

/// Renders the single reply for a launch command.
pub fn render_outcome(outcome: &LaunchOutcome) -> String {
    match outcome {
        LaunchOutcome::Success { request, result } => format!(
            "✅ <b>Token Launched Successfully!</b>\n\n\
             Name: {}\n\
             Symbol: {}\n\
             Supply: {}\n\n\
             🔗 Token Address: <code>{}</code>\n\
             🧾 Tx: <code>{}</code>\n\n\
             Trading is live on bonding curve!\n\
             When ~4.2 ETH bought → auto-migrates to Uniswap V3 (burned LP).\n\n\
             Share and pump it! 🏙️🐒",
            escape(request.name()),
            escape(request.symbol()),
            escape(request.supply_text()),
            result.token_address(),
            result.transaction_hash(),
        ),
        LaunchOutcome::ValidationError(_) => INVALID_FORMAT_TEXT.to_string(),
        LaunchOutcome::SubmissionError(_) => LAUNCH_FAILED_TEXT.to_string(),
    }
}
