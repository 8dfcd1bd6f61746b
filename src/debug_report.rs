use ngimete::{Stage, TranscriptionTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

pub fn print_trace(trace: &TranscriptionTrace, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Transcribing: \"{}\"", trace.input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    let width = Stage::ALL.iter().map(|s| s.name().len()).max().unwrap_or(0);
    let mut previous: Option<&str> = None;

    for snapshot in &trace.stages {
        let label = format!("{:<width$}", snapshot.stage.name());
        // Unchanged stages are dimmed.
        let text = if previous == Some(snapshot.text.as_str()) {
            palette.dim(&snapshot.text)
        } else {
            palette.paint(&snapshot.text, ansi::YELLOW)
        };
        println!(
            "  {} {} {}  {}",
            palette.paint(label, ansi::BLUE),
            palette.dim("│"),
            text,
            palette.dim(format!("{:?}", snapshot.at)),
        );
        previous = Some(snapshot.text.as_str());
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&trace.output, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", trace.elapsed), ansi::GREEN));
    println!();
}
