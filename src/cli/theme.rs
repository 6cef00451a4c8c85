use std::sync::LazyLock;

use console::Emoji;
use dialoguer::console::Style;
use dialoguer::theme::ColorfulTheme;

pub static THEME: LazyLock<ColorfulTheme> = LazyLock::new(|| ColorfulTheme {
    prompt_prefix: Style::new()
        .green()
        .apply_to(Emoji("👉 ", "> ").to_string()),
    prompt_suffix: Style::new().dim().apply_to(":".to_string()),
    success_prefix: Style::new().green().apply_to("✔".to_string()),
    values_style: Style::new().yellow(),
    active_item_style: Style::new().cyan().bold(),
    ..ColorfulTheme::default()
});
