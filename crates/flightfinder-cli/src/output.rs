//! Output formatting for route, region, and airport listings.
//!
//! Renderers write to any [`Write`] sink so the binary can target stdout
//! while tests capture into a buffer. Colour comes from a [`Style`], whose
//! fields are empty strings when colour is off.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightfinder_lib::{NodeBound, RegionSummary, RouteStep, RouteSummary};


/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly view with tags and totals.
    #[default]
    Text,
    /// Bare path with `+`/`|`/`-` prefixes.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// ANSI sequences for each role in the text renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub reset: &'static str,
    /// Badge on the departure airport.
    pub depart: &'static str,
    /// Badge on intermediate stops.
    pub stopover: &'static str,
    /// Badge on the destination.
    pub arrive: &'static str,
    pub airport: &'static str,
    pub region: &'static str,
    pub leg: &'static str,
    pub total: &'static str,
}

impl Style {
    pub const ANSI: Style = Style {
        reset: "\x1b[0m",
        depart: "\x1b[1;7;32m",
        stopover: "\x1b[1;7;36m",
        arrive: "\x1b[1;7;35m",
        airport: "\x1b[1;97m",
        region: "\x1b[90m",
        leg: "\x1b[36m",
        total: "\x1b[32m",
    };

    pub const PLAIN: Style = Style {
        reset: "",
        depart: "",
        stopover: "",
        arrive: "",
        airport: "",
        region: "",
        leg: "",
        total: "",
    };

    /// Style for stdout, honouring `NO_COLOR` and `TERM=dumb`.
    pub fn from_env() -> Self {
        let term = std::env::var("TERM").ok();
        Self::for_terminal(std::env::var_os("NO_COLOR").is_some(), term.as_deref())
    }

    pub fn for_terminal(no_color: bool, term: Option<&str>) -> Self {
        let dumb = term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        if no_color || dumb {
            Self::PLAIN
        } else {
            Self::ANSI
        }
    }

    // Badge colour and label for the step at `position` of a `len`-step route.
    fn badge(&self, position: usize, len: usize) -> (&'static str, &'static str) {
        if position == 0 {
            (self.depart, " STRT ")
        } else if position + 1 == len {
            (self.arrive, " GOAL ")
        } else {
            (self.stopover, " STOP ")
        }
    }
}

/// Render a cost for people: whole amounts are grouped in thousands, anything
/// else keeps two decimals.
pub fn format_cost(cost: f64) -> String {
    if !cost.is_finite() {
        return cost.to_string();
    }
    let text = if cost.fract() == 0.0 {
        format!("{cost:.0}")
    } else {
        format!("{cost:.2}")
    };
    let (whole, decimals) = match text.split_once('.') {
        Some((whole, decimals)) => (whole, Some(decimals)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(decimals) = decimals {
        grouped.push('.');
        grouped.push_str(decimals);
    }
    grouped
}

/// Airport row for the `airports` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportRow {
    pub name: String,
    pub region: String,
    /// Number of routes leaving the airport.
    pub routes: usize,
}

impl OutputFormat {
    pub fn write_route<W: Write>(
        self,
        out: &mut W,
        summary: &RouteSummary,
        style: Style,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => write_route_text(out, summary, style),
            OutputFormat::Basic => write_route_basic(out, summary),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    pub fn write_region<W: Write>(
        self,
        out: &mut W,
        summary: &RegionSummary,
        style: Style,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => write_region_text(out, summary, style),
            OutputFormat::Basic => out.write_all(summary.render_plain().as_bytes()),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    pub fn write_airports<W: Write>(self, out: &mut W, rows: &[AirportRow]) -> io::Result<()> {
        match self {
            OutputFormat::Text => write_airports_text(out, rows),
            OutputFormat::Basic => {
                for row in rows {
                    writeln!(out, "{} ({})", row.name, row.region)?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, rows),
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

fn describe_bound(bound: NodeBound) -> String {
    match bound {
        NodeBound::Unbounded => String::new(),
        NodeBound::AtMost(nodes) => format!("; at most {nodes} airports"),
        NodeBound::Exactly(nodes) => format!("; exactly {nodes} airports"),
    }
}

fn write_route_text<W: Write>(out: &mut W, summary: &RouteSummary, s: Style) -> io::Result<()> {
    let hops = summary.hops;
    writeln!(
        out,
        "Route from {}{}{} to {}{}{} ({} {}{}):",
        s.airport,
        summary.start.name,
        s.reset,
        s.airport,
        summary.goal.name,
        s.reset,
        hops,
        if hops == 1 { "hop" } else { "hops" },
        describe_bound(summary.bound)
    )?;

    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        write_step(out, step, s.badge(i, len), s)?;
    }
    write_total(out, summary.cost, s)
}

fn write_step<W: Write>(
    out: &mut W,
    step: &RouteStep,
    (badge, label): (&str, &str),
    s: Style,
) -> io::Result<()> {
    write!(
        out,
        "{}{}{} {}{}{} {}({}){}",
        badge, label, s.reset, s.airport, step.name, s.reset, s.region, step.region, s.reset
    )?;
    if let Some(leg) = step.leg_cost {
        write!(out, " {}+{}{}", s.leg, format_cost(leg), s.reset)?;
    }
    writeln!(out)
}

fn write_total<W: Write>(out: &mut W, cost: f64, s: Style) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {}Total cost:{} {}{}{}",
        s.total,
        s.reset,
        s.airport,
        format_cost(cost),
        s.reset
    )
}

fn write_route_basic<W: Write>(out: &mut W, summary: &RouteSummary) -> io::Result<()> {
    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        writeln!(out, "{} {}", prefix, step.name)?;
    }
    writeln!(out, "cost {}", summary.cost)
}

fn write_region_text<W: Write>(out: &mut W, summary: &RegionSummary, s: Style) -> io::Result<()> {
    writeln!(
        out,
        "Cheapest airport in {}{}{} from {}{}{}:",
        s.airport, summary.region, s.reset, s.airport, summary.start.name, s.reset
    )?;
    writeln!(
        out,
        "{} GOAL {} {}{}{} {}({}){}",
        s.arrive,
        s.reset,
        s.airport,
        summary.airport.name,
        s.reset,
        s.region,
        summary.airport.region,
        s.reset
    )?;
    write_total(out, summary.cost, s)
}

fn write_airports_text<W: Write>(out: &mut W, rows: &[AirportRow]) -> io::Result<()> {
    let name_width = rows
        .iter()
        .map(|row| row.name.len())
        .chain(std::iter::once("Airport".len()))
        .max()
        .unwrap_or(0);
    let region_width = rows
        .iter()
        .map(|row| row.region.len())
        .chain(std::iter::once("Region".len()))
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        "{:<name_width$}  {:<region_width$}  Routes",
        "Airport", "Region"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<name_width$}  {:<region_width$}  {:>6}",
            row.name, row.region, row.routes
        )?;
    }
    writeln!(out, "\n{} airports", rows.len())
}
