//! Reading airport networks from graph description files.
//!
//! The format is line oriented:
//!
//! ```text
//! graph airports {
//!     sfo [label="San Francisco,USA"];
//!     ams [label="Amsterdam,Netherlands"];
//!     sfo -- ams [cost=1230];
//!     nrt -> ams [cost=780];
//! }
//! ```
//!
//! Node lines carry a quoted `"name,region"` label. `--` edges are
//! undirected and produce a route in each direction; `->` edges produce a
//! single directed route.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::location::{Cost, Location};

/// Default filename for the dataset in the platform data directory.
const DATASET_FILENAME: &str = "airports.dot";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "FLIGHTFINDER_DATASET";

/// Directed route between two resolved airports.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub from: Location,
    pub to: Location,
    pub cost: Cost,
}

/// Airports and routes parsed from a graph description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub airports: Vec<Location>,
    pub routes: Vec<RouteRecord>,
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightfinder", "flightfinder")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Pick the dataset path: an explicit path wins, then the
/// `FLIGHTFINDER_DATASET` environment variable, then the platform default.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(DATASET_ENV_VAR).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_dataset_path()
}

/// Read and parse a graph description file.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let dataset = parse_dataset(&contents)?;
    debug!(
        path = %path.display(),
        airports = dataset.airports.len(),
        routes = dataset.routes.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse a graph description held in memory.
pub fn parse_dataset(contents: &str) -> Result<Dataset> {
    let mut dataset = Dataset::default();
    let mut ids: HashMap<String, usize> = HashMap::new();
    let mut edges: Vec<(usize, EdgeLine)> = Vec::new();
    let mut seen_header = false;

    for (offset, raw) in contents.lines().enumerate() {
        let line_no = offset + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }
        if !seen_header {
            if !is_header(line) {
                return Err(Error::DatasetParse {
                    line: line_no,
                    message: format!("expected a `graph <name> {{` header, found '{line}'"),
                });
            }
            seen_header = true;
            continue;
        }
        if line == "}" {
            continue;
        }

        match parse_line(line).map_err(|message| Error::DatasetParse {
            line: line_no,
            message,
        })? {
            Line::Node { id, name, region } => {
                let location = Location::new(name, region).map_err(|err| Error::DatasetParse {
                    line: line_no,
                    message: err.to_string(),
                })?;
                if ids.contains_key(&id) {
                    warn!(id = %id, line = line_no, "duplicate node id ignored");
                    continue;
                }
                ids.insert(id, dataset.airports.len());
                dataset.airports.push(location);
            }
            Line::Edge(edge) => edges.push((line_no, edge)),
        }
    }

    for (line_no, edge) in edges {
        let lookup = |id: &str| {
            ids.get(id)
                .map(|&idx| dataset.airports[idx].clone())
                .ok_or_else(|| Error::DatasetParse {
                    line: line_no,
                    message: format!("edge refers to unknown node id '{id}'"),
                })
        };
        let from = lookup(&edge.from)?;
        let to = lookup(&edge.to)?;
        if edge.from == edge.to {
            warn!(id = %edge.from, line = line_no, "self-loop ignored");
            continue;
        }
        let cost = Cost::new(edge.cost).map_err(|err| Error::DatasetParse {
            line: line_no,
            message: err.to_string(),
        })?;

        dataset.routes.push(RouteRecord {
            from: from.clone(),
            to: to.clone(),
            cost,
        });
        if !edge.directed {
            dataset.routes.push(RouteRecord {
                from: to,
                to: from,
                cost,
            });
        }
    }

    Ok(dataset)
}

#[derive(Debug, PartialEq)]
struct EdgeLine {
    from: String,
    to: String,
    cost: f64,
    directed: bool,
}

#[derive(Debug, PartialEq)]
enum Line {
    Node {
        id: String,
        name: String,
        region: String,
    },
    Edge(EdgeLine),
}

// `[strict] graph|digraph [id] {`
fn is_header(line: &str) -> bool {
    let Some(body) = line.strip_suffix('{') else {
        return false;
    };
    let mut words = body.split_whitespace();
    let mut keyword = words.next();
    if keyword.is_some_and(|word| word.eq_ignore_ascii_case("strict")) {
        keyword = words.next();
    }
    let is_graph = keyword.is_some_and(|word| {
        word.eq_ignore_ascii_case("graph") || word.eq_ignore_ascii_case("digraph")
    });
    is_graph && words.count() <= 1
}

fn parse_line(line: &str) -> std::result::Result<Line, String> {
    let line = line.trim_end_matches(';').trim_end();
    let (head, attributes) = split_attributes(line)?;

    for (operator, directed) in [("->", true), ("--", false)] {
        if let Some((from, to)) = head.split_once(operator) {
            let cost = attribute(attributes, "cost")
                .ok_or_else(|| "edge is missing a cost attribute".to_string())?;
            let cost = cost
                .parse::<f64>()
                .map_err(|_| format!("invalid cost '{cost}'"))?;
            return Ok(Line::Edge(EdgeLine {
                from: node_id(from)?,
                to: node_id(to)?,
                cost,
                directed,
            }));
        }
    }

    let label = attribute(attributes, "label")
        .ok_or_else(|| "node is missing a label attribute".to_string())?;
    let (name, region) = label
        .split_once(',')
        .ok_or_else(|| format!("label '{label}' is not of the form \"name,region\""))?;
    Ok(Line::Node {
        id: node_id(head)?,
        name: name.trim().to_string(),
        region: region.trim().to_string(),
    })
}

fn split_attributes(line: &str) -> std::result::Result<(&str, &str), String> {
    let open = line
        .find('[')
        .ok_or_else(|| "expected an attribute list in brackets".to_string())?;
    let close = line
        .rfind(']')
        .filter(|&close| close > open)
        .ok_or_else(|| "unterminated attribute list".to_string())?;
    Ok((line[..open].trim(), &line[open + 1..close]))
}

// Value of `key=value` or `key="value"` within an attribute list.
fn attribute<'a>(attributes: &'a str, key: &str) -> Option<&'a str> {
    let mut rest = attributes;
    while let Some(pos) = rest.find(key) {
        let after = rest[pos + key.len()..].trim_start();
        let boundary_ok = rest[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_');
        if let (true, Some(value)) = (boundary_ok, after.strip_prefix('=')) {
            let value = value.trim_start();
            if let Some(quoted) = value.strip_prefix('"') {
                return quoted.find('"').map(|end| &quoted[..end]);
            }
            let end = value.find([',', ' ', ']']).unwrap_or(value.len());
            return Some(value[..end].trim());
        }
        rest = &rest[pos + key.len()..];
    }
    None
}

fn node_id(raw: &str) -> std::result::Result<String, String> {
    let id = raw.trim().trim_matches('"');
    if id.is_empty() || id.contains(char::is_whitespace) {
        return Err(format!("invalid node id '{}'", raw.trim()));
    }
    Ok(id.to_string())
}
