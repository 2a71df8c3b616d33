//! Rendering primitives for CLI output.
//!
//! Every function returns a `String`; the caller decides where it goes, so
//! menus stay testable against any writer.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ComfyTable};
use tally_core::Report;

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Tally · command (context)"
/// Plain mode: "tally command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("Tally", styles::bold(), ctx.color);
        let sep = if ctx.unicode { "\u{00B7}" } else { "-" };
        match context {
            Some(c) => format!("{} {} {} ({})", title, sep, command, c),
            None => format!("{} {} {}", title, sep, command),
        }
    } else {
        format!("tally {}", command)
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Render a numbered menu. `options[i]` is shown as `i + 1`; `0` exits.
pub fn menu(ctx: &UiContext, title: &str, options: &[&str]) -> String {
    let mut lines = Vec::with_capacity(options.len() + 2);
    let banner = format!("=== {} ===", title);
    lines.push(String::new());
    lines.push(if ctx.mode.is_pretty() {
        styled(&banner, styles::bold(), ctx.color)
    } else {
        banner
    });
    for (i, option) in options.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, option));
    }
    lines.push("0. Exit".to_string());
    lines.join("\n")
}

/// Render an operation outcome.
///
/// Plain mode keeps the report's own text layout; pretty mode swaps the
/// SUCCESS/ERROR markers for badges.
pub fn report(ctx: &UiContext, outcome: &Report) -> String {
    if !ctx.mode.is_pretty() {
        return outcome.to_string();
    }
    match outcome {
        Report::Failure { title, message } => {
            error_message(ctx, &format!("{}: {}", title, message), None)
        }
        Report::Success { title, lines } => {
            let mut out = badge(ctx, Badge::Ok, title);
            for line in lines {
                out.push('\n');
                out.push_str(line);
            }
            out
        }
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a table using comfy-table for pretty mode.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Space-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        }

        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(ctx.width.min(u16::MAX as usize) as u16);

        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
