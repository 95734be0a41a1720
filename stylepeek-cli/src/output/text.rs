//! Text output formatting with color swatches.

use stylepeek_core::{ButtonStyle, LinkStyle, StyleProject, TypeStyle};
use stylepeek_fetch::{FetchAttempt, FetchOutcome};
use stylepeek_store::Settings;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Width of a color swatch, in cells.
const SWATCH_WIDTH: usize = 4;

/// Parses `#rgb` or `#rrggbb` into its channels.
pub fn parse_hex_color(literal: &str) -> Option<(u8, u8, u8)> {
    let hex = literal.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..=i].repeat(2));
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// Formats the full detail view of one project.
    pub fn format_project(&self, project: &StyleProject) -> String {
        let mut lines = Vec::new();

        lines.push(self.bold(&project.title));
        lines.push(self.cyan(&project.url));
        if let Some(favicon) = &project.favicon {
            lines.push(format!("Favicon: {}", self.dim(favicon)));
        }
        lines.push(format!("Created: {}", self.dim(&project.created_at)));

        lines.push(String::new());
        lines.push(self.section("Colors", project.colors.len()));
        for color in &project.colors {
            lines.push(format!("  {} {}", self.swatch(color), color));
        }

        lines.push(String::new());
        lines.push(self.section("Typography", project.type_styles.len()));
        for style in &project.type_styles {
            lines.push(self.format_type_style(style));
        }

        lines.push(String::new());
        lines.push(self.section("Buttons", project.button_styles.len()));
        for button in &project.button_styles {
            lines.push(self.format_button(button));
        }

        lines.push(String::new());
        lines.push(self.section("Links", project.link_styles.len()));
        for link in &project.link_styles {
            lines.push(self.format_link(link));
        }

        lines.join("\n")
    }

    fn format_type_style(&self, style: &TypeStyle) -> String {
        let mut line = format!(
            "  {:<3} {} / {} / {}  {}",
            style.tag.as_str(),
            style.font_size,
            style.font_weight,
            style.line_height,
            style.font_family,
        );
        if let Some(class) = style.class_name.as_deref().filter(|c| !c.is_empty()) {
            line.push_str(&format!(" {}", self.dim(&format!(".{class}"))));
        }
        line.push_str(&format!(
            "\n      {} \"{}\"",
            self.swatch(&style.color),
            style.actual_text
        ));
        line
    }

    fn format_button(&self, button: &ButtonStyle) -> String {
        format!(
            "  {} {}  on {} {}  radius {}  padding {}",
            self.bold(&button.text),
            button.color,
            self.swatch(&button.background_color),
            button.background_color,
            button.border_radius,
            button.padding,
        )
    }

    fn format_link(&self, link: &LinkStyle) -> String {
        format!(
            "  {} {} {}  {} / {}  {}",
            self.swatch(&link.color),
            link.text,
            self.dim(&format!("({})", link.color)),
            link.font_size,
            link.font_weight,
            link.text_decoration,
        )
    }

    /// Formats the saved-project list, one line per project.
    pub fn format_project_list(&self, projects: &[StyleProject]) -> String {
        if projects.is_empty() {
            return self.dim("No saved projects");
        }

        projects
            .iter()
            .map(|p| {
                format!(
                    "{}  {}  {}\n    {} colors · {} type · {} buttons · {} links",
                    self.dim(&p.created_at),
                    self.bold(&p.title),
                    self.cyan(&p.url),
                    p.colors.len(),
                    p.type_styles.len(),
                    p.button_styles.len(),
                    p.link_styles.len(),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Confirmation after a project was saved.
    pub fn format_saved(&self, created_at: &str) -> String {
        format!("{} Saved as {}", self.green("✓"), created_at)
    }

    /// Result of a delete.
    pub fn format_deleted(&self, created_at: &str, deleted: bool) -> String {
        if deleted {
            format!("{} Deleted {}", self.green("✓"), created_at)
        } else {
            format!("{} No saved project with createdAt {}", self.dim("−"), created_at)
        }
    }

    // ========================================================================
    // Check / Config
    // ========================================================================

    /// Formats a proxy check report.
    pub fn format_check(&self, url: &str, outcome: &FetchOutcome) -> String {
        let mut lines = vec![format!("Checking {}", self.cyan(url)), "─".repeat(40)];

        for attempt in &outcome.attempts {
            lines.push(self.format_attempt(attempt));
        }

        lines.push(String::new());
        match &outcome.result {
            Ok(page) => lines.push(format!(
                "{} fetched {} chars via {}",
                self.green("✓"),
                page.html.chars().count(),
                page.proxy
            )),
            Err(e) => lines.push(format!("{} {}", self.red("✗"), e)),
        }

        lines.join("\n")
    }

    fn format_attempt(&self, attempt: &FetchAttempt) -> String {
        let millis = attempt.duration.as_millis();
        if attempt.success {
            format!("{} {:<28} {}ms", self.green("✓"), attempt.proxy, millis)
        } else {
            format!(
                "{} {:<28} {}ms  {}",
                self.red("✗"),
                attempt.proxy,
                millis,
                self.dim(attempt.error.as_deref().unwrap_or("unknown error"))
            )
        }
    }

    /// Formats the current settings.
    pub fn format_settings(&self, settings: &Settings) -> String {
        let mut lines = vec![
            self.bold("Stylepeek Configuration"),
            "─".repeat(40),
            String::new(),
            "Proxies:".to_string(),
        ];
        if settings.proxies.is_empty() {
            lines.push(format!("  {}", self.dim("(none)")));
        }
        for (i, proxy) in settings.proxies.iter().enumerate() {
            lines.push(format!("  [{i}] {} {}", proxy.name, self.dim(&proxy.template)));
        }
        lines.push(String::new());
        lines.push(format!("Request timeout: {}s", settings.request_timeout_secs));
        lines.push(format!("Min body chars:  {}", settings.min_body_chars));
        lines.push(format!("Log level:       {}", settings.log_level));
        lines.push(format!("Auto-save:       {}", settings.auto_save));
        lines.join("\n")
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    /// A block of the given color, or nothing for non-hex literals.
    pub fn swatch(&self, color: &str) -> String {
        match parse_hex_color(color) {
            Some((r, g, b)) if self.use_colors => {
                format!("\x1b[48;2;{r};{g};{b}m{}{RESET}", " ".repeat(SWATCH_WIDTH))
            }
            _ => " ".repeat(SWATCH_WIDTH),
        }
    }

    fn section(&self, title: &str, count: usize) -> String {
        format!("{} {}", self.bold(title), self.dim(&format!("({count})")))
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

// ============================================================================
// Tests
// ============================================================================
