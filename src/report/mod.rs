//! Terminal report for a merged record.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use colored::{Color, Colorize};

use crate::core::ProfileRecord;
use crate::core::record::{PLACEHOLDER, is_truthy};

const RULE_WIDTH: usize = 70;

/// Whether the report carries ANSI color codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Ansi,
    Plain,
}

impl Palette {
    fn paint(self, text: &str, color: Color) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Ansi => text.color(color).to_string(),
        }
    }

    fn heading(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Ansi => text.bold().to_string(),
        }
    }

    fn banner(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Ansi => text.bright_magenta().bold().to_string(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// `is_business`, or the web profile's `is_business_account` when that is all we have.
fn business_flag(record: &ProfileRecord) -> bool {
    record
        .get("is_business")
        .map_or_else(|| record.flag("is_business_account"), is_truthy)
}

/// Renders the fixed-section report.
///
/// Every section is always present; absent or non-scalar fields show
/// [`PLACEHOLDER`]. Contact lines appear only when the field has a value.
/// The output depends on nothing but `record` and `palette`.
pub fn render(record: &ProfileRecord, palette: Palette) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", palette.banner(&rule));
    let _ = writeln!(out, "{}", palette.banner("📊 INVESTIGATION RESULTS"));
    let _ = writeln!(out, "{}", palette.banner(&rule));

    let field = |out: &mut String, label: &str, value: &str, color: Color| {
        let _ = writeln!(out, "   {label}: {}", palette.paint(value, color));
    };
    let flag = |out: &mut String, label: &str, set: bool, good_when_set: bool| {
        let color = if set == good_when_set {
            Color::BrightGreen
        } else {
            Color::BrightRed
        };
        field(out, label, yes_no(set), color);
    };

    let _ = writeln!(out, "\n{}", palette.heading("👤 BASIC INFORMATION:"));
    field(
        &mut out,
        "Username",
        &record.text_or_placeholder("username"),
        Color::BrightGreen,
    );
    field(
        &mut out,
        "User ID",
        &record.user_id().unwrap_or_else(|| PLACEHOLDER.to_string()),
        Color::BrightGreen,
    );
    field(
        &mut out,
        "Full name",
        &record.text_or_placeholder("full_name"),
        Color::BrightGreen,
    );
    flag(&mut out, "Verified", record.flag("is_verified"), true);
    flag(&mut out, "Business account", business_flag(record), true);
    // a private account is the unfavourable case
    flag(&mut out, "Private account", record.flag("is_private"), false);

    let _ = writeln!(out, "\n{}", palette.heading("📈 STATISTICS:"));
    for (label, key) in [
        ("Followers", "follower_count"),
        ("Following", "following_count"),
        ("Posts", "media_count"),
    ] {
        field(&mut out, label, &record.text_or_placeholder(key), Color::BrightCyan);
    }

    let contacts: Vec<(&str, String, Color)> = [
        ("Public email", "public_email", Color::BrightGreen),
        ("Obfuscated email", "obfuscated_email", Color::BrightYellow),
    ]
    .into_iter()
    .filter(|(_, key, _)| record.flag(key))
    .filter_map(|(label, key, color)| record.text(key).map(|v| (label, v, color)))
    .collect();

    if !contacts.is_empty() {
        let _ = writeln!(out, "\n{}", palette.heading("📧 CONTACT:"));
        for (label, value, color) in contacts {
            field(&mut out, label, &value, color);
        }
    }

    out
}

/// The closing rule with the completion time (`dd/mm/YYYY HH:MM:SS`).
pub fn render_footer(completed_at: DateTime<Local>, palette: Palette) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{}\n{}\n{}",
        palette.banner(&rule),
        palette.paint(
            &format!(
                "⏰ Investigation completed at: {}",
                completed_at.format("%d/%m/%Y %H:%M:%S")
            ),
            Color::BrightMagenta,
        ),
        palette.banner(&rule),
    )
}
