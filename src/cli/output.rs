//! User-facing terminal lines (separate from tracing logs).

use colored::Colorize;

const BANNER: &str = r"
╔══════════════════════════════════════════════════════════════╗
║                      Instagram OSINT                         ║
║                                                              ║
║          For educational and investigative purposes.         ║
╚══════════════════════════════════════════════════════════════╝
";

pub fn banner() {
    println!("{}", BANNER.bright_magenta().bold());
}

pub fn tutorial() {
    let step = |n: u8, text: &str| println!("{} {text}", format!("{n}.").bright_blue());

    println!();
    println!(
        "{}",
        "📋 How to obtain your Instagram session ID:".bright_cyan().bold()
    );
    println!();
    step(1, "Open Instagram in a browser and log in");
    step(2, "Press F12 to open the developer tools");
    step(3, "Go to the \"Application\" tab");
    step(4, "In the sidebar, open \"Cookies\" → \"https://www.instagram.com\"");
    step(5, "Find \"sessionid\" and copy its value");
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: keep your session ID private and never share it!".bright_yellow()
    );
}

pub fn progress(msg: &str) {
    println!("{}", format!("⏳ {msg}...").bright_cyan());
}

pub fn success(msg: &str) {
    println!("{}", format!("✅ {msg}").bright_green());
}

pub fn warning(msg: &str) {
    println!("{}", format!("⚠️  {msg}").bright_yellow());
}

pub fn error(msg: &str) {
    eprintln!("{}", format!("❌ {msg}").bright_red());
}

pub fn farewell() {
    println!("\n{}", "👋 Thanks for using igscout!".bright_green());
}
