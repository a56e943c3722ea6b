// src/utils/format.rs
use chrono::{DateTime, Utc};
use console::{style, StyledObject};

use crate::models::{StrengthResult, StrengthTier};

const BAR_WIDTH: usize = 30;

// Format a duration for display
pub fn format_time_ago(time: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds().max(0);

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else {
        format!("{} days ago", duration.num_days())
    }
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Number of filled cells for a strength bar of `width` cells.
pub fn filled_cells(fill_percent: u8, width: usize) -> usize {
    (width * fill_percent.min(100) as usize + 50) / 100
}

pub fn styled_tier(tier: StrengthTier) -> StyledObject<&'static str> {
    match tier {
        StrengthTier::Weak => style(tier.label()).red().bold(),
        StrengthTier::Medium => style(tier.label()).yellow().bold(),
        StrengthTier::Strong => style(tier.label()).green().bold(),
    }
}

// Render the strength indicator as a terminal bar
pub fn strength_bar(result: &StrengthResult) -> String {
    let filled = filled_cells(result.fill_percent, BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    let bar = match result.tier {
        StrengthTier::Weak => style(bar).red(),
        StrengthTier::Medium => style(bar).yellow(),
        StrengthTier::Strong => style(bar).green(),
    };

    format!("[{}] {}%", bar, result.fill_percent)
}
