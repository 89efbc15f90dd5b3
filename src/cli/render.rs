//! Colored console output

use owo_colors::{OwoColorize, colors::css};
use supports_color::Stream;

/// How a line of output should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something was registered (green).
    Success,
    /// Input was rejected (amber).
    Warning,
    /// A listing header (blue).
    Heading,
    /// Secondary information (dimmed).
    Muted,
}

impl Tone {
    /// The stream text of this tone is written to.
    ///
    /// Warnings go to stderr, everything else to stdout.
    pub const fn stream(self) -> Stream {
        match self {
            Self::Warning => Stream::Stderr,
            Self::Success | Self::Heading | Self::Muted => Stream::Stdout,
        }
    }
}

/// Applies `tone` to `text` if the stream it is written to supports color.
pub fn paint(text: &str, tone: Tone) -> String {
    if supports_color::on(tone.stream()).is_none() {
        return text.to_string();
    }

    match tone {
        Tone::Success => text.fg::<css::Green>().to_string(),
        Tone::Warning => text.fg::<css::Orange>().to_string(),
        Tone::Heading => text.fg::<css::LightBlue>().bold().to_string(),
        Tone::Muted => text.dimmed().to_string(),
    }
}

/// Bullets each entry, keeping the order given.
pub fn bullets(entries: impl IntoIterator<Item = String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| format!("  • {entry}"))
        .collect()
}

/// Prints a titled listing, or `empty` if there is nothing to list.
pub fn print_listing(title: &str, empty: &str, entries: impl IntoIterator<Item = String>) {
    let lines = bullets(entries);
    if lines.is_empty() {
        println!("{}", paint(empty, Tone::Muted));
        return;
    }

    println!("{}", paint(&format!("{title} ({})", lines.len()), Tone::Heading));
    for line in lines {
        println!("{line}");
    }
}
