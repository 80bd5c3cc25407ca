//! Output formatting for route and airport rendering.
//!
//! Formatters return `String`s so they can be unit tested; the `render_*`
//! functions write them to stdout.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightmap_lib::{
    format_distance, format_duration, format_price, Airport, RouteRenderMode, RouteSummary,
};

use crate::terminal::{supports_color, supports_unicode, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing with per-leg details and totals.
    #[default]
    Text,
    /// Markdown-flavoured output.
    Rich,
    /// Colored, tagged listing for capable terminals.
    Enhanced,
    /// `+`/`|`/`-` prefixed airport codes.
    Basic,
    /// Single line: path and the optimised cost.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether the logo banner and footer accompany this format.
    pub fn is_decorated(self) -> bool {
        matches!(
            self,
            OutputFormat::Text | OutputFormat::Rich | OutputFormat::Enhanced
        )
    }
}

/// Print the CLI logo banner.
///
/// Falls back to ASCII when the locale is not UTF-8 and honours `NO_COLOR`.
pub fn print_logo() {
    let palette = ColorPalette::detect();
    let (orange, cyan, reset) = (palette.orange, palette.cyan, palette.reset);

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────────╮{reset}
{cyan}│{orange}   ✈  F L I G H T M A P                    {cyan}│{reset}
{cyan}├──────────────────────────────────────────┤{reset}
{cyan}│{orange}        [ route planner · C L I ]         {cyan}│{reset}
{cyan}╰──────────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+------------------------------------------+
|  FLIGHTMAP                               |
|  >> ROUTE PLANNER COMMAND LINE INTERFACE |
+------------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let (gray, reset) = if supports_color() {
        (crate::terminal::colors::GRAY, crate::terminal::colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}

/// Render a route summary to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
        OutputFormat::Compact => print!("{}", summary.render(RouteRenderMode::Compact)),
        OutputFormat::Enhanced => {
            print!("{}", format_route_enhanced(summary, &ColorPalette::detect()))
        }
        OutputFormat::Basic => print!("{}", format_route_basic(summary)),
        OutputFormat::Json => return render_json(summary),
    }
    Ok(())
}

/// Serialize any value as pretty JSON followed by a newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Minimal path listing using `+`/`|`/`-` prefixes for first/middle/last steps.
pub fn format_route_basic(summary: &RouteSummary) -> String {
    let mut buffer = String::new();
    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        let _ = writeln!(buffer, "{} {}", prefix, step.airport.code);
    }
    let _ = writeln!(buffer, "via {} flights, {}", summary.hops, summary.cost_label);
    buffer
}

/// Tagged, colored route listing.
pub fn format_route_enhanced(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let p = palette;
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {}{}{} to {}{}{} ({} hops, optimised for {}):",
        p.white_bold,
        summary.start.code,
        p.reset,
        p.white_bold,
        summary.goal.code,
        p.reset,
        summary.hops,
        summary.metric
    );

    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let (tag_color, tag) = if i == 0 {
            (p.tag_start, "DEPART")
        } else if i + 1 == len {
            (p.tag_goal, "ARRIVE")
        } else {
            (p.tag_stop, "CHANGE")
        };
        let _ = write!(
            buffer,
            " {tag_color} {tag} {} {}{}{}",
            p.reset, p.white_bold, step.airport.code, p.reset
        );
        if let Some(name) = &step.airport.name {
            let _ = write!(buffer, " {}{}{}", p.gray, name, p.reset);
        }
        if let (Some(km), Some(min), Some(price)) = (step.distance_km, step.duration_min, step.price)
        {
            let _ = write!(
                buffer,
                " {}[{} | {} | {}]{}",
                p.cyan,
                format_distance(km),
                format_duration(min),
                format_price(price),
                p.reset
            );
        }
        buffer.push('\n');
    }

    let _ = writeln!(
        buffer,
        "\n{}Totals:{} {} · {} · {}",
        p.white_bold,
        p.reset,
        format_distance(summary.total_distance_km),
        format_duration(summary.total_duration_min),
        format_price(summary.total_price)
    );
    buffer
}

/// Multi-line airport description.
pub fn format_airport_details(airport: &Airport, outgoing: usize) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{}", airport.display_label());
    let _ = writeln!(buffer, "  Name:      {}", airport.name);
    if !airport.country.is_empty() {
        let _ = writeln!(buffer, "  Country:   {}", airport.country);
    }
    let _ = writeln!(
        buffer,
        "  Location:  {:.4}, {:.4}",
        airport.latitude, airport.longitude
    );
    let _ = writeln!(buffer, "  Routes:    {} outgoing", outgoing);
    buffer
}

/// One `display_label` per line followed by a count.
pub fn format_airport_list(airports: &[&Airport]) -> String {
    let mut buffer = String::new();
    for airport in airports {
        let _ = writeln!(buffer, "{}", airport.display_label());
    }
    let noun = if airports.len() == 1 {
        "airport"
    } else {
        "airports"
    };
    let _ = writeln!(buffer, "{} {}", airports.len(), noun);
    buffer
}
