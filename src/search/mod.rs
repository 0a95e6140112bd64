//! Local search procedures for the maximum stable set problem.
//!
//! Every procedure looks for a large set of pairwise non-adjacent vertices.
//! Call them on the complement graph to search for a maximum clique.

/// evaluation from scratch, randomized maximal stable set construction
pub mod evaluation;

/// single-move primitives of the strategic oscillation (soft tabu)
pub mod oscillation;

/// strategic oscillation tabu search
pub mod tabu_search;

/// tabu search with intensification & diversification
pub mod intens_divers;

/// plateau state and expansion policies
pub mod expansion;

/// lateral swaps used to leave a plateau
pub mod plateau;

/// plateau searches (iterated, multistart, long-term memory, hybrid)
pub mod ltm;
