use colored::Colorize;

pub fn print_success_message(message: &str) {
    println!("{}", message.bright_green().bold());
}

/// Shortens long hex strings for tables.
pub fn truncate_hex(value: &str, keep: usize) -> String {
    if value.len() <= keep * 2 + 3 {
        return value.to_string();
    }
    format!("{}...{}", &value[..keep], &value[value.len() - keep..])
}
