use crossterm::style::Stylize;

use objview::config::ConfigWarning;

use crate::ui::theme;

fn icon(icon: &str, color: crossterm::style::Color, enabled: bool) -> String {
    if enabled {
        icon.with(color).to_string()
    } else {
        icon.to_string()
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool, color: bool) {
    let icon = icon(theme::warning_icon(unicode), theme::colors::WARNING, color);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, w.file.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Print a failed command's error chain.
pub fn print_error(err: &anyhow::Error, unicode: bool, color: bool) {
    let icon = icon(theme::error_icon(unicode), theme::colors::ERROR, color);
    eprintln!("{} Error: {:#}", icon, err);
}
