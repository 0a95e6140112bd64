use std::fs;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/** parameters shared by every search procedure */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// iteration budget of the search
    pub max_iter: usize,
    /// tabu tenure scaling factor (in percent of the current cardinality / co-cardinality)
    pub tenure: f64,
    /// maximum number of iterations spent escaping a single plateau
    pub plateau_length: usize,
    /// print the progress of the search
    pub verbose: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_iter: 10_000,
            tenure: 10.,
            plateau_length: 100,
            verbose: false,
        }
    }
}

impl SearchParams {
    /// reads parameters from a JSON file. Missing fields keep their default value.
    pub fn from_json_file(filename:&str) -> Result<Self> {
        let content = fs::read_to_string(filename).map_err(|e| Error::io(filename, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// tabu tenure used when inserting a vertex in a solution of size `card`
    pub fn tabu_in(&self, card:usize) -> usize {
        1 + (self.tenure / 100. * card as f64) as usize
    }

    /// tabu tenure used when removing a vertex from a solution of size `card` (n vertices)
    pub fn tabu_out(&self, n:usize, card:usize) -> usize {
        1 + (self.tenure / 100. * n.saturating_sub(card) as f64) as usize
    }
}


/** search procedures that can be called from the executables */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// strategic oscillation tabu search
    Tabu,
    /// tabu search with intensification & diversification
    IntensDivers,
    /// repeated expansions from scratch
    Iterated,
    /// plateau search restarted from scratch
    Multistart,
    /// plateau search with long-term memory
    Ltm,
    /// partial restarts mixing every expansion policy
    Hybrid,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s:&str) -> Result<Self> {
        match s {
            "tabu" => Ok(Self::Tabu),
            "intens-divers" => Ok(Self::IntensDivers),
            "iterated" => Ok(Self::Iterated),
            "multistart" => Ok(Self::Multistart),
            "ltm" => Ok(Self::Ltm),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(Error::UnknownName {
                kind: "algorithm",
                name: s.to_string(),
                valid: "tabu, intens-divers, iterated, multistart, ltm, hybrid",
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenures() {
        let params = SearchParams { tenure: 10., ..SearchParams::default() };
        assert_eq!(params.tabu_in(0), 1);
        assert_eq!(params.tabu_in(25), 3);
        assert_eq!(params.tabu_out(100, 25), 8);
        // never underflows, even on empty graphs
        assert_eq!(params.tabu_out(0, 0), 1);
        assert_eq!(params.tabu_out(3, 5), 1);
    }

    #[test]
    fn test_partial_json() {
        let params:SearchParams = serde_json::from_str(r#"{"max_iter": 42, "verbose": true}"#).unwrap();
        assert_eq!(params.max_iter, 42);
        assert!(params.verbose);
        assert_eq!(params.plateau_length, SearchParams::default().plateau_length);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(SearchParams::from_json_file("insts/nothing.json"), Err(Error::Io { .. })));
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("intens-divers".parse::<Algorithm>().unwrap(), Algorithm::IntensDivers);
        assert_eq!("hybrid".parse::<Algorithm>().unwrap(), Algorithm::Hybrid);
        assert!("annealing".parse::<Algorithm>().is_err());
    }
}
