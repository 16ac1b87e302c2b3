#[cfg(test)]
#[path = "../../tests/unit/solver/genetic_test.rs"]
mod genetic_test;

use crate::models::problem::{DistanceMatrix, Fleet};
use crate::models::solution::{Route, RouteSet};
use crate::utils::{parallel_into_collect, Environment};
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// A candidate solution encoded as a permutation of the non-depot location
/// indices.
pub type Genome = Vec<usize>;

/// Tuning values for the genetic solver. Adjustable, not correctness
/// critical.
#[derive(Clone, Debug)]
pub struct GaConfig {
    /// Number of parent genomes kept between iterations.
    pub parent_max: usize,
    /// Number of child genomes generated per iteration.
    pub candidate_count: usize,
    /// Chance of mutating a child built from distinct parents.
    pub mutation_probability: f64,
    /// Multiplier applied to the mutation chance after every swap.
    pub mutation_decay: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self { parent_max: 2, candidate_count: 20, mutation_probability: 0.01, mutation_decay: 0.8 }
    }
}

/// A solver which evolves permutation genomes with ordered crossover and swap
/// mutation, decoding them into capacity-respecting route sets.
#[derive(Clone)]
pub struct GeneticSolver {
    matrix: Arc<DistanceMatrix>,
    fleet: Fleet,
    config: GaConfig,
    /// Parent pool ordered cheapest first.
    parents: Vec<(Genome, RouteSet)>,
    rng: SmallRng,
}

impl GeneticSolver {
    /// Number of evolution iterations used by the background worker per run.
    pub const DEFAULT_ITERATIONS: usize = 5;

    /// Creates a new instance of `GeneticSolver` with a randomly initialized
    /// parent pool.
    pub fn new(matrix: Arc<DistanceMatrix>, fleet: Fleet, config: GaConfig, environment: &Environment) -> Self {
        assert!(matrix.size() > 0, "solver requires a non-empty distance matrix");
        assert!(config.parent_max >= 2, "parent pool requires at least two genomes");

        let mut rng = environment.random.get_rng();
        let parents = (0..config.parent_max)
            .map(|_| {
                let genome = random_genome(matrix.size(), &mut rng);
                let routes = decode(&genome, &matrix, &fleet);
                (genome, routes)
            })
            .collect();

        Self { matrix, fleet, config, parents, rng }
    }

    /// Runs the requested number of evolution iterations and returns a copy
    /// of the cheapest parent's route set.
    pub fn run(&mut self, iterations: usize) -> RouteSet {
        for _ in 0..iterations {
            self.refresh_degenerate_parents();

            let mut genomes: Vec<Genome> = Vec::with_capacity(self.config.candidate_count);
            for candidate in 0..self.config.candidate_count {
                let (parent_a, _) = &self.parents[candidate % self.config.parent_max];
                let (parent_b, _) = &self.parents[(candidate + 1) % self.config.parent_max];
                let identical = parent_a == parent_b;

                let mut child = crossover(parent_a, parent_b, &mut self.rng);
                mutate(&mut child, identical, &self.config, &mut self.rng);
                genomes.push(child);
            }

            // decoding is deterministic, so candidates are evaluated in parallel
            let matrix = &self.matrix;
            let fleet = &self.fleet;
            let mut candidates = parallel_into_collect(genomes, |genome| {
                let routes = decode(&genome, matrix, fleet);
                (genome, routes)
            });

            // parents compete with their children
            candidates.append(&mut self.parents);

            candidates.sort_by_key(|(_, routes)| routes.total_cost());
            candidates.truncate(self.config.parent_max);
            self.parents = candidates;
        }

        self.parents[0].1.clone()
    }

    /// Returns the current parent genomes, cheapest first.
    pub fn parent_genomes(&self) -> impl Iterator<Item = &[usize]> {
        self.parents.iter().map(|(genome, _)| genome.as_slice())
    }

    /// Replaces one of two identical lowest-cost parents with a fresh random
    /// genome so that crossover does not degenerate into cloning.
    fn refresh_degenerate_parents(&mut self) {
        if self.parents[0].0 == self.parents[1].0 {
            let genome = random_genome(self.matrix.size(), &mut self.rng);
            let routes = decode(&genome, &self.matrix, &self.fleet);
            self.parents[0] = (genome, routes);
        }
    }
}

/// Generates a random permutation of the non-depot location indices.
fn random_genome(size: usize, rng: &mut SmallRng) -> Genome {
    let mut genome: Genome = (1..size).collect();
    genome.shuffle(rng);
    genome
}

/// Decodes a genome into per-vehicle routes: genes are assigned round-robin,
/// a vehicle at capacity takes a depot return instead of its next gene, and
/// every route is closed with a trailing depot visit.
fn decode(genome: &[usize], matrix: &Arc<DistanceMatrix>, fleet: &Fleet) -> RouteSet {
    assert_eq!(genome.len(), matrix.size() - 1, "genome length must match the non-depot location count");

    let vehicles = fleet.vehicle_count();
    let mut routes: Vec<Route> = (0..vehicles).map(|_| Route::new(matrix.clone())).collect();
    let mut stops_since_depot = vec![0; vehicles];

    for route in routes.iter_mut() {
        route.add(0);
    }

    let mut pending = genome.iter().copied().peekable();
    let mut turn = 0;
    while pending.peek().is_some() {
        let vehicle = turn % vehicles;
        turn += 1;

        if stops_since_depot[vehicle] < fleet.capacity(vehicle) {
            routes[vehicle].add(pending.next().unwrap());
            stops_since_depot[vehicle] += 1;
        } else {
            stops_since_depot[vehicle] = 0;
            routes[vehicle].add(0);
        }
    }

    for route in routes.iter_mut() {
        if route.last() != Some(0) {
            route.add(0);
        }
    }

    RouteSet::new(routes)
}

/// Ordered crossover: the child takes parent A's genes before a random cut
/// point, then parent B's genes in order, substituting a gene from the missed
/// set whenever a gene is already placed. The child is a valid permutation
/// for any pair of valid parents and any cut point.
fn crossover(parent_a: &[usize], parent_b: &[usize], rng: &mut SmallRng) -> Genome {
    let gene_count = parent_a.len();
    assert_eq!(gene_count, parent_b.len(), "parent genomes must have equal length");

    // no interior cut point exists below two genes
    if gene_count < 2 {
        return parent_a.to_vec();
    }

    let cut = rng.gen_range(1..gene_count);

    let mut child = Vec::with_capacity(gene_count);
    let mut available = vec![true; gene_count + 1];
    for &gene in &parent_a[..cut] {
        child.push(gene);
        available[gene] = false;
    }

    // genes absent from both parent A's prefix and parent B's suffix
    let mut missed: Vec<usize> = {
        let mut in_suffix = vec![false; gene_count + 1];
        for &gene in &parent_b[cut..] {
            in_suffix[gene] = true;
        }
        (1..=gene_count).filter(|&gene| available[gene] && !in_suffix[gene]).collect()
    };

    for &gene in &parent_b[cut..] {
        if available[gene] {
            child.push(gene);
            available[gene] = false;
        } else {
            child.push(missed.pop().expect("missed gene pool exhausted for valid parents"));
        }
    }

    // any genes still unplaced
    while let Some(gene) = missed.pop() {
        child.push(gene);
    }

    child
}

/// Swaps random gene pairs, the chance of another swap decaying geometrically.
/// Identical parents mutate with certainty to inject diversity.
fn mutate(child: &mut Genome, identical_parents: bool, config: &GaConfig, rng: &mut SmallRng) {
    if child.len() < 2 {
        return;
    }

    let mut threshold = if identical_parents { 1. } else { config.mutation_probability };
    while rng.gen_range(0_f64..1.) < threshold {
        threshold *= config.mutation_decay;

        let a = rng.gen_range(0..child.len());
        let b = rng.gen_range(0..child.len());
        child.swap(a, b);
    }
}
