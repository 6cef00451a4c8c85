use dialoguer::{Confirm, Input, Select};
use igscout::{Credentials, ExportFormat, SessionToken, Username};

use super::output;
use super::theme::THEME;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Investigate,
    Tutorial,
    ExportLast,
    Quit,
}

const MENU: [(&str, MenuChoice); 4] = [
    ("New investigation", MenuChoice::Investigate),
    ("Show tutorial (how to get the session ID)", MenuChoice::Tutorial),
    ("Export last investigation", MenuChoice::ExportLast),
    ("Quit", MenuChoice::Quit),
];

const FORMATS: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Csv];

pub fn menu_choice() -> anyhow::Result<MenuChoice> {
    let labels: Vec<&str> = MENU.iter().map(|(label, _)| *label).collect();
    let idx = Select::with_theme(&*THEME)
        .with_prompt("🔍 MAIN MENU")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MENU[idx].1)
}

/// Asks for username and session id until both validate.
pub fn credentials() -> anyhow::Result<Credentials> {
    let raw: String = Input::with_theme(&*THEME)
        .with_prompt("👤 Instagram username (without @)")
        .validate_with(|s: &String| Username::parse(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    if raw.trim().starts_with('@') {
        output::warning("@ removed automatically");
    }
    let username = Username::parse(&raw)?;

    let token: String = Input::with_theme(&*THEME)
        .with_prompt("🔑 Instagram session ID")
        .validate_with(|s: &String| SessionToken::parse(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(Credentials::new(username, SessionToken::parse(&token)?))
}

pub fn confirm_export() -> anyhow::Result<bool> {
    Ok(Confirm::with_theme(&*THEME)
        .with_prompt("Export the results?")
        .default(false)
        .interact()?)
}

pub fn export_format() -> anyhow::Result<ExportFormat> {
    let idx = Select::with_theme(&*THEME)
        .with_prompt("Format")
        .items(&FORMATS)
        .default(0)
        .interact()?;
    Ok(FORMATS[idx])
}
