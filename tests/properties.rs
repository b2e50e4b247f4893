use proptest::prelude::*;
use u_tsp::constructive::nearest_neighbor;
use u_tsp::distance::DistanceMatrix;
use u_tsp::ga::{assign_fitness, swap_mutation, GaConfig, GeneticSolver, ReproductionStrategy};
use u_tsp::models::{is_permutation, Point, Tour};
use u_tsp::{build_distance_matrix, build_graph, solve_nearest_neighbor};

fn points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 0..max)
        .prop_map(|xy| xy.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nearest_neighbor_is_permutation(pts in points(30)) {
        let dm = DistanceMatrix::from_points(&pts);
        let tour = nearest_neighbor(&dm);
        prop_assert_eq!(tour.len(), pts.len());
        prop_assert!(is_permutation(tour.order()));
        if !pts.is_empty() {
            prop_assert_eq!(tour.start(), Some(0));
        }
    }

    #[test]
    fn nearest_neighbor_covers_every_vertex(pts in points(20)) {
        let mut graph = build_graph(&pts);
        let matrix = build_distance_matrix(&mut graph);
        let mut ids = solve_nearest_neighbor(&graph, &matrix).unwrap();
        ids.sort();
        let mut expected: Vec<_> = graph.vertices().iter().map(|v| v.id()).collect();
        expected.sort();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn matrix_symmetric_with_zero_diagonal(pts in points(25)) {
        let mut graph = build_graph(&pts);
        let dm = build_distance_matrix(&mut graph);
        for i in 0..dm.size() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
        prop_assert_eq!(dm, DistanceMatrix::from_points(&pts));
    }

    #[test]
    fn fitness_is_a_distribution(pts in points(12), seed in any::<u64>(), size in 1usize..20) {
        let dm = DistanceMatrix::from_points(&pts);
        let mut rng = u_numflow::random::create_rng(seed);
        let mut pop: Vec<Tour> = (0..size)
            .map(|_| Tour::random(&dm, &mut rng))
            .collect();
        let summary = assign_fitness(&mut pop);
        let sum: f64 = pop.iter().map(Tour::fitness).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        if summary.uniform {
            for t in &pop {
                prop_assert!((t.fitness() - 1.0 / size as f64).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn mutation_keeps_start_and_genes(n in 0usize..40, rate in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = u_numflow::random::create_rng(seed);
        for _ in 0..5 {
            swap_mutation(&mut order, rate, &mut rng);
        }
        prop_assert!(is_permutation(&order));
        if n > 0 {
            prop_assert_eq!(order[0], 0);
        }
    }

    #[test]
    fn ga_best_never_regresses(
        pts in points(14),
        seed in any::<u64>(),
        crossover in any::<bool>(),
    ) {
        let dm = DistanceMatrix::from_points(&pts);
        let strategy = if crossover {
            ReproductionStrategy::OrderCrossover
        } else {
            ReproductionStrategy::CloneAndMutate
        };
        let config = GaConfig::default()
            .with_population_size(8)
            .with_generations(15)
            .with_mutation_rate(0.2)
            .with_reproduction(strategy)
            .with_seed(seed);
        let mut ga = GeneticSolver::new(&dm, config).unwrap();
        let mut previous = f64::INFINITY;
        while let Some(snapshot) = ga.step() {
            prop_assert!(snapshot.weight <= previous);
            previous = snapshot.weight;
            if !snapshot.order.is_empty() {
                prop_assert_eq!(snapshot.order[0], 0);
            }
            for tour in ga.population() {
                prop_assert!(is_permutation(tour.order()));
            }
        }
    }
}
