// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the nexus-search CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `NEXUS_THEME` picks
//! explicitly, otherwise `COLORFGBG` is consulted, otherwise dark. `NO_COLOR`
//! and non-TTY stdout turn all styling off so output stays pipeable.

use std::sync::OnceLock;

use nexus_search::{Category, Segment};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("NEXUS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

/// A 24-bit foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn escape(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// Colors by what they mark, not by hue.
#[derive(Debug)]
pub struct Palette {
    /// Borders, destinations, fuzzy-only scores, `Code` entries
    pub frame: Rgb,
    /// Group labels and `Section` entries
    pub heading: Rgb,
    /// `Page` entries and title-prefix scores
    pub page: Rgb,
    pub api: Rgb,
    pub concept: Rgb,
    /// `Type` entries and mid-range scores
    pub kind: Rgb,
    /// Title-substring scores
    pub hit: Rgb,
    /// Highlighted spans
    pub mark: Rgb,
}

const DARK: Palette = Palette {
    frame: Rgb(92, 99, 112),
    heading: Rgb(86, 182, 194),
    page: Rgb(166, 226, 46),
    api: Rgb(97, 175, 239),
    concept: Rgb(198, 120, 221),
    kind: Rgb(229, 192, 123),
    hit: Rgb(152, 195, 121),
    mark: Rgb(255, 215, 0),
};

const LIGHT: Palette = Palette {
    frame: Rgb(160, 161, 167),
    heading: Rgb(1, 132, 188),
    page: Rgb(68, 140, 39),
    api: Rgb(64, 120, 242),
    concept: Rgb(166, 38, 164),
    kind: Rgb(193, 132, 1),
    hit: Rgb(80, 161, 79),
    mark: Rgb(152, 104, 1),
};

pub fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never when `NO_COLOR` is set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a palette color with optional modifiers
pub fn themed(color: Rgb, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(palette().frame, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(palette().heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(palette().frame, &[], "┌"),
        label_part,
        themed(palette().frame, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(palette().frame, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded category badge, fixed width so titles line up.
pub fn category_badge(category: Category) -> String {
    let label = format!("[{}]", category);
    let colors = palette();
    let color = match category {
        Category::Page => colors.page,
        Category::Section => colors.heading,
        Category::Api => colors.api,
        Category::Concept => colors.concept,
        Category::Type => colors.kind,
        Category::Code => colors.frame,
    };
    pad_right(&themed(color, &[], &label), 10)
}

/// Color-coded score: exact-ish hits bright, fuzzy-only hits dim.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.1}", score);
    let colors = palette();
    let color = if score >= 150.0 {
        colors.page
    } else if score >= 100.0 {
        colors.hit
    } else if score >= 50.0 {
        colors.kind
    } else {
        colors.frame
    };
    themed(color, &[], &text)
}

/// Render highlight segments: matches bold+underlined, or `[..]` without color.
pub fn render_segments(segments: &[Segment]) -> String {
    let mark = use_colors().then(|| palette().mark.escape());
    segments
        .iter()
        .map(|segment| match (segment.matched, &mark) {
            (false, _) => segment.text.clone(),
            (true, Some(mark)) => format!("{}{}{}{}{}", BOLD, UNDERLINE, mark, segment.text, RESET),
            (true, None) => format!("[{}]", segment.text),
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
