//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests:
//! the reference airport network used by the query tests, and temporary
//! dataset files for reader tests.

use std::fs;
use std::path::PathBuf;

use flightfinder_lib::{Cost, Graph, Location};
use tempfile::TempDir;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the checked-in airport network description.
#[allow(dead_code)]
pub fn fixture_dataset_path() -> PathBuf {
    fixtures_dir().join("airports.dot")
}

#[allow(dead_code)]
pub fn cost(value: f64) -> Cost {
    Cost::new(value).expect("valid cost")
}

/// Eight airports across five regions. Every route flies both ways except
/// PEK -> SFO, and CIA has no routes at all.
#[allow(dead_code)]
pub struct ReferenceNetwork {
    pub graph: Graph,
    pub sfo: Location,
    pub jfk: Location,
    pub man: Location,
    pub lhr: Location,
    pub mrs: Location,
    pub lil: Location,
    pub pek: Location,
    pub cia: Location,
}

#[allow(dead_code)]
impl ReferenceNetwork {
    pub fn new() -> Self {
        let airport = |name: &str, region: &str| Location::new(name, region).expect("valid");
        let sfo = airport("SFO", "United States");
        let jfk = airport("JFK", "United States");
        let man = airport("MAN", "England");
        let lhr = airport("LHR", "England");
        let mrs = airport("MRS", "France");
        let lil = airport("LIL", "France");
        let pek = airport("PEK", "China");
        let cia = airport("CIA", "Italy");

        let mut graph = Graph::new();
        for location in [&sfo, &jfk, &man, &lhr, &mrs, &lil, &pek, &cia] {
            assert!(graph.insert_node(location.clone()));
        }

        let routes = [
            (&lhr, &sfo, 5000.0),
            (&jfk, &sfo, 3000.0),
            (&mrs, &sfo, 7000.0),
            (&sfo, &jfk, 3000.0),
            (&lhr, &jfk, 3500.0),
            (&mrs, &jfk, 4000.0),
            (&jfk, &lhr, 3500.0),
            (&lil, &lhr, 700.0),
            (&man, &lhr, 200.0),
            (&sfo, &lhr, 5000.0),
            (&lhr, &man, 200.0),
            (&lil, &man, 380.0),
            (&mrs, &man, 900.0),
            (&lhr, &lil, 700.0),
            (&man, &lil, 380.0),
            (&mrs, &lil, 600.0),
            (&lil, &mrs, 600.0),
            (&man, &mrs, 900.0),
            (&sfo, &mrs, 7000.0),
            (&jfk, &mrs, 4000.0),
            (&pek, &sfo, 8000.0),
        ];
        for (pred, succ, weight) in routes {
            assert!(graph.insert_edge(pred, succ, cost(weight)));
        }

        Self {
            graph,
            sfo,
            jfk,
            man,
            lhr,
            mrs,
            lil,
            pek,
            cia,
        }
    }
}

impl Default for ReferenceNetwork {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of a route's steps, for compact assertions.
#[allow(dead_code)]
pub fn names(steps: &[Location]) -> Vec<&str> {
    steps.iter().map(Location::name).collect()
}

/// Temporary directory holding a dataset file.
#[allow(dead_code)]
pub struct DatasetTestEnv {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl DatasetTestEnv {
    /// Write `contents` to `airports.dot` inside a fresh temporary directory.
    pub fn with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("airports.dot");
        fs::write(&path, contents).expect("write dataset");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Copy of the checked-in fixture.
    pub fn fixture() -> Self {
        let contents = fs::read_to_string(fixture_dataset_path()).expect("read fixture");
        Self::with_contents(&contents)
    }

    pub fn temp_path(&self) -> &std::path::Path {
        self._temp_dir.path()
    }
}
