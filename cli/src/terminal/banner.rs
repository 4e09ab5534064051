use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          ███████╗██╗██████╗  ██████╗
          ██╔════╝██║██╔══██╗██╔═══██╗
          █████╗  ██║██████╔╝██║   ██║
          ██╔══╝  ██║██╔══██╗██║   ██║
          ██║     ██║██████╔╝╚██████╔╝
          ╚═╝     ╚═╝╚═════╝  ╚═════╝
          0 · 1 · 1 · 2 · 3 · 5 · 8 · 13
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.truecolor(255, 165, 0)));
}
