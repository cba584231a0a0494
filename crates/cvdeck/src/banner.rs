use colored::Colorize;

pub fn print_banner_with_version() {
    println!();
    println!("  {}", "cvdeck".bold().cyan());
    println!("  {}", "A CV and portfolio presentation tool".dimmed());
    println!("  version {}", env!("CARGO_PKG_VERSION"));
    println!();
}
