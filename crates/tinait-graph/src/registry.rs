//! Named capabilities over a [`Graph`]: predicates, numeric invariants and ordering generators.
//!
//! Collaborators (the CLI, batch jobs) dispatch through a [`Registry`] by string key instead of
//! hard-coding each algorithm. Registration order is significant: it is the order in which
//! reports list the capabilities.

use crate::{Error, Graph, Result, VertexOrdering, alg};
use rustc_hash::FxHashMap;

pub type PredicateFn = fn(&Graph) -> bool;
pub type InvariantFn = fn(&Graph) -> Vec<usize>;
pub type OrderingFn = fn(&Graph) -> Result<VertexOrdering>;

#[derive(Debug, Clone)]
pub struct Predicate {
    pub id: &'static str,
    /// Human-readable name, e.g. `"claw-free"` → `"clawfree"` in reports.
    pub label: &'static str,
    /// Predicates that must hold before this one is meaningful.
    pub requires: &'static [&'static str],
    /// Run time grows exponentially with the order.
    pub exponential: bool,
    pub test: PredicateFn,
}

impl Predicate {
    pub fn evaluate(&self, g: &Graph) -> bool {
        (self.test)(g)
    }
}

#[derive(Debug, Clone)]
pub struct Invariant {
    pub id: &'static str,
    /// One column name per value; `compute` always returns exactly `columns.len()` values.
    pub columns: &'static [&'static str],
    pub exponential: bool,
    pub compute: InvariantFn,
}

impl Invariant {
    pub fn evaluate(&self, g: &Graph) -> Vec<usize> {
        let values = (self.compute)(g);
        debug_assert_eq!(values.len(), self.columns.len(), "invariant {}", self.id);
        values
    }
}

#[derive(Debug, Clone)]
pub struct OrderingGenerator {
    pub id: &'static str,
    pub exponential: bool,
    pub generate: OrderingFn,
}

impl OrderingGenerator {
    pub fn evaluate(&self, g: &Graph) -> Result<VertexOrdering> {
        (self.generate)(g)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    predicates: Vec<Predicate>,
    invariants: Vec<Invariant>,
    orderings: Vec<OrderingGenerator>,
    predicate_index: FxHashMap<&'static str, usize>,
    invariant_index: FxHashMap<&'static str, usize>,
    ordering_index: FxHashMap<&'static str, usize>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every capability this crate implements.
    pub fn builtin() -> Self {
        let mut reg = Self::new();

        reg.add_predicate(Predicate {
            id: "connected",
            label: "connected",
            requires: &[],
            exponential: false,
            test: alg::is_connected,
        });
        reg.add_predicate(Predicate {
            id: "cograph",
            label: "cograph",
            requires: &[],
            exponential: false,
            test: alg::is_cograph,
        });
        reg.add_predicate(Predicate {
            id: "euler",
            label: "euler",
            requires: &[],
            exponential: false,
            test: alg::is_euler,
        });
        reg.add_predicate(Predicate {
            id: "chordal",
            label: "chordal",
            requires: &[],
            exponential: false,
            test: alg::is_chordal,
        });
        reg.add_predicate(Predicate {
            id: "claw-free",
            label: "clawfree",
            requires: &[],
            exponential: false,
            test: alg::is_clawfree,
        });
        reg.add_predicate(Predicate {
            id: "closed",
            label: "closed",
            requires: &["chordal", "claw-free"],
            exponential: true,
            test: alg::is_closed,
        });
        reg.add_predicate(Predicate {
            id: "cone",
            label: "cone",
            requires: &[],
            exponential: false,
            test: alg::is_cone,
        });

        reg.add_invariant(Invariant {
            id: "clique",
            columns: &["cliqueNr", "maxCliques"],
            exponential: true,
            compute: |g| widen(alg::clique_numbers(g)),
        });
        reg.add_invariant(Invariant {
            id: "detour",
            columns: &["detourNr"],
            exponential: true,
            compute: |g| vec![alg::detour_number(g) as usize],
        });
        reg.add_invariant(Invariant {
            id: "degree",
            columns: &["minDeg", "maxDeg"],
            exponential: false,
            compute: |g| widen(alg::extreme_degrees(g)),
        });
        reg.add_invariant(Invariant {
            id: "independence",
            columns: &["independenceNr", "maxIndependentSets"],
            exponential: true,
            compute: |g| widen(alg::independence_numbers(g)),
        });
        reg.add_invariant(Invariant {
            id: "girth",
            columns: &["girth"],
            exponential: false,
            compute: |g| vec![alg::girth(g) as usize],
        });

        reg.add_ordering(OrderingGenerator {
            id: "closed",
            exponential: true,
            generate: alg::closed_labeling,
        });
        reg.add_ordering(OrderingGenerator {
            id: "lexicographic",
            exponential: false,
            generate: |g| Ok(alg::lexicographic_ordering(g)),
        });

        reg
    }

    /// Registers `predicate`, replacing an earlier one with the same id.
    pub fn add_predicate(&mut self, predicate: Predicate) {
        insert(
            &mut self.predicates,
            &mut self.predicate_index,
            predicate.id,
            predicate,
        );
    }

    pub fn add_invariant(&mut self, invariant: Invariant) {
        insert(
            &mut self.invariants,
            &mut self.invariant_index,
            invariant.id,
            invariant,
        );
    }

    pub fn add_ordering(&mut self, generator: OrderingGenerator) {
        insert(
            &mut self.orderings,
            &mut self.ordering_index,
            generator.id,
            generator,
        );
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn invariants(&self) -> &[Invariant] {
        &self.invariants
    }

    pub fn orderings(&self) -> &[OrderingGenerator] {
        &self.orderings
    }

    pub fn predicate(&self, id: &str) -> Result<&Predicate> {
        lookup(&self.predicates, &self.predicate_index, "predicate", id)
    }

    pub fn invariant(&self, id: &str) -> Result<&Invariant> {
        lookup(&self.invariants, &self.invariant_index, "invariant", id)
    }

    pub fn ordering(&self, id: &str) -> Result<&OrderingGenerator> {
        lookup(&self.orderings, &self.ordering_index, "ordering", id)
    }
}

fn insert<T>(
    entries: &mut Vec<T>,
    index: &mut FxHashMap<&'static str, usize>,
    id: &'static str,
    entry: T,
) {
    match index.get(id) {
        Some(&i) => entries[i] = entry,
        None => {
            index.insert(id, entries.len());
            entries.push(entry);
        }
    }
}

fn lookup<'a, T>(
    entries: &'a [T],
    index: &FxHashMap<&'static str, usize>,
    kind: &'static str,
    id: &str,
) -> Result<&'a T> {
    index
        .get(id)
        .map(|&i| &entries[i])
        .ok_or_else(|| Error::UnknownCapability {
            kind,
            key: id.to_string(),
        })
}

fn widen<const N: usize>(values: [u32; N]) -> Vec<usize> {
    values.iter().map(|&v| v as usize).collect()
}
