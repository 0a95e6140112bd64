use serde::Serialize;

use crate::graph::VertexId;

/** receives a notification each time a search finds a better solution.
`label` tells which part of the search found it (e.g. "iter: 42").
*/
pub trait Report {
    /// called with the new best cardinality
    fn improvement(&mut self, card:usize, label:&str);
}

impl<F:FnMut(usize, &str)> Report for F {
    fn improvement(&mut self, card:usize, label:&str) { self(card, label) }
}

/// report that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReport;

impl Report for NoReport {
    fn improvement(&mut self, _card:usize, _label:&str) {}
}

/// report that records every improvement (card, label)
#[derive(Debug, Default, Clone)]
pub struct ImprovementList {
    /// improvements in the order they were found
    pub improvements: Vec<(usize, String)>,
}

impl Report for ImprovementList {
    fn improvement(&mut self, card:usize, label:&str) {
        self.improvements.push((card, label.to_string()));
    }
}

impl ImprovementList {
    /// cardinalities of the successive best solutions
    pub fn primal_list(&self) -> Vec<usize> {
        self.improvements.iter().map(|(c,_)| *c).collect()
    }
}


/** result of a search procedure */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// best stable set found
    pub solution: Vec<VertexId>,
    /// vertices not selected in the best stable set
    pub remainder: Vec<VertexId>,
    /// size of the best stable set
    pub cardinality: usize,
    /// number of iterations actually performed
    pub nb_iterations: usize,
}

impl SearchOutcome {
    /// outcome of a search on an empty graph
    pub fn empty() -> Self {
        Self { solution: Vec::new(), remainder: Vec::new(), cardinality: 0, nb_iterations: 0 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_report() {
        let mut seen = Vec::new();
        {
            let mut report = |card:usize, label:&str| seen.push(format!("{} {}", card, label));
            report.improvement(3, "iter: 1");
            report.improvement(4, "iter: 7");
        }
        assert_eq!(seen, vec!["3 iter: 1", "4 iter: 7"]);
    }

    #[test]
    fn test_improvement_list() {
        let mut list = ImprovementList::default();
        list.improvement(2, "a");
        list.improvement(5, "b");
        assert_eq!(list.primal_list(), vec![2,5]);
    }
}
