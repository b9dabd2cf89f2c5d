//! Startup banner.

use crate::terminal::{BOLD, RESET, box_bottom, box_line, box_line_center, box_top};

pub fn print() {
    box_top("ClatShield");
    box_line("");
    box_line_center(&format!(
        "{BOLD}C L A T S H I E L D   P A S S W O R D   T O O L{RESET}"
    ));
    box_line_center(&format!("v{}", env!("CARGO_PKG_VERSION")));
    box_line("");
    box_line_center("Digital Defense, One Password At A Time");
    box_line("");
    box_bottom();
    println!();
}
