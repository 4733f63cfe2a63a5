const BOLD: &str = "1";
const RED: &str = "91";
const GREEN: &str = "92";
const YELLOW: &str = "93";

/// Wrap text in an ANSI SGR sequence
pub fn paint(code: &str, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

pub fn print_bold(text: &str) {
    println!("{}", paint(BOLD, text));
}

pub fn print_red(text: &str) {
    println!("{}", paint(RED, text));
}

pub fn print_green(text: &str) {
    println!("{}", paint(GREEN, text));
}

pub fn print_yellow(text: &str) {
    println!("{}", paint(YELLOW, text));
}
