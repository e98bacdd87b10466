//! End-to-end scenarios run against every exact variant: a handful of named
//! small graphs with known clique numbers, plus property-style checks
//! (permutation invariance, cross-variant agreement, seed safety) on a
//! planted-clique generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use maxclique_bench::search::DeadlineToken;
use maxclique_bench::{find_maximum_clique, validate_clique, Graph, Options, Variant};

fn assert_all_variants_find(g: &Graph, expected_size: usize) -> Vec<Vec<usize>> {
    let mut cliques = Vec::new();
    for variant in Variant::ALL {
        let (k, stats) = find_maximum_clique(g, variant, &Options::default()).unwrap();
        assert!(validate_clique(g, &k), "{variant} returned a non-clique: {k:?}");
        assert!(stats.proven, "{variant} did not run to completion");
        assert_eq!(k.len(), expected_size, "{variant} disagreed on clique size");
        cliques.push(k);
    }
    cliques
}

#[test]
fn s1_triangle() {
    let g = Graph::build([(0, 1), (0, 2), (1, 2)]).unwrap();
    let cliques = assert_all_variants_find(&g, 3);
    for k in cliques {
        let mut sorted = k;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }
}

#[test]
fn s2_path_p5() {
    let g = Graph::build([(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    let cliques = assert_all_variants_find(&g, 2);
    for k in cliques {
        assert!(g.has_edge(k[0], k[1]));
    }
}

#[test]
fn s3_disjoint_k4_and_k3() {
    let g = Graph::build([
        (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3),
        (4, 5), (4, 6), (5, 6),
    ])
    .unwrap();
    let cliques = assert_all_variants_find(&g, 4);
    for k in cliques {
        let mut sorted = k;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }
}

#[test]
fn s4_k33_is_triangle_free() {
    let g = Graph::build([
        (0, 3), (0, 4), (0, 5),
        (1, 3), (1, 4), (1, 5),
        (2, 3), (2, 4), (2, 5),
    ])
    .unwrap();
    assert_all_variants_find(&g, 2);
}

#[test]
fn s5_planted_clique_with_noise() {
    let mut edges = Vec::new();
    for i in 0..8i64 {
        for j in (i + 1)..8i64 {
            edges.push((i, j));
        }
    }
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for u in 0..30i64 {
        for v in (u + 1)..30i64 {
            if u >= 8 || v >= 8 {
                if rng.gen_bool(0.3) {
                    edges.push((u, v));
                }
            }
        }
    }
    let g = Graph::build(edges).unwrap();
    let cliques = assert_all_variants_find(&g, 8);
    for k in cliques {
        assert!(k.len() >= 8);
        assert!(g.is_clique(&k));
    }
}

#[test]
fn s6_isolated_vertex() {
    let g = Graph::from_dense_adjacency(vec![vec![]]);
    let cliques = assert_all_variants_find(&g, 1);
    for k in cliques {
        assert_eq!(k, vec![0]);
    }
}

#[test]
fn empty_graph_is_handled_by_every_variant() {
    let g = Graph::build(std::iter::empty()).unwrap();
    assert_all_variants_find(&g, 0);
}

#[test]
fn permutation_invariance_preserves_clique_number() {
    let g = Graph::build([
        (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3),
        (4, 5), (4, 6), (5, 6), (3, 4),
    ])
    .unwrap();
    let (base, _) = find_maximum_clique(&g, Variant::Tomita, &Options::default()).unwrap();

    // relabel: reverse the vertex ids.
    let n = g.vertex_count();
    let mut permuted_edges = Vec::new();
    for v in 0..n {
        for &u in g.neighbors(v).unwrap() {
            if u > v {
                permuted_edges.push(((n - 1 - v) as i64, (n - 1 - u) as i64));
            }
        }
    }
    let permuted = Graph::build(permuted_edges).unwrap();
    let (relabeled, _) = find_maximum_clique(&permuted, Variant::Tomita, &Options::default()).unwrap();
    assert_eq!(base.len(), relabeled.len());

    let mapped_back: Vec<usize> = relabeled.iter().map(|&v| n - 1 - v).collect();
    assert!(g.is_clique(&mapped_back));
    assert_eq!(mapped_back.len(), base.len());
}

#[test]
fn seed_clique_never_changes_the_optimum_on_a_denser_graph() {
    let g = Graph::build([
        (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3),
        (4, 5), (4, 6), (5, 6), (5, 7), (6, 7), (4, 7),
    ])
    .unwrap();
    let (unseeded, _) = find_maximum_clique(&g, Variant::Ostergard, &Options::default()).unwrap();

    let seeded_options = Options { seed_clique: Some(vec![0, 1]), ..Options::default() };
    let (seeded, _) = find_maximum_clique(&g, Variant::Ostergard, &seeded_options).unwrap();

    assert_eq!(unseeded.len(), seeded.len());
    assert!(validate_clique(&g, &seeded));
}

#[test]
fn cancellation_returns_a_valid_but_unproven_clique() {
    let mut edges = Vec::new();
    for i in 0..14i64 {
        for j in (i + 1)..14i64 {
            edges.push((i, j));
        }
    }
    let g = Graph::build(edges).unwrap();
    let options = Options {
        cancel: Some(Box::new(DeadlineToken { deadline: std::time::Instant::now() })),
        ..Options::default()
    };
    let (k, stats) = find_maximum_clique(&g, Variant::Bbmc, &options).unwrap();
    assert!(!stats.proven);
    assert!(validate_clique(&g, &k));
}

#[test]
fn dimacs_and_edgelist_loaders_agree_on_the_same_graph() {
    let edgelist = "0 1\n0 2\n1 2\n2 3\n";
    let dimacs = "p edge 4 4\ne 1 2\ne 1 3\ne 2 3\ne 3 4\n";

    use maxclique_bench::loader::{parse_edges, Format};
    let g1 = Graph::build(parse_edges(edgelist, Format::EdgeList).unwrap()).unwrap();
    let g2 = Graph::build(parse_edges(dimacs, Format::Dimacs).unwrap()).unwrap();

    assert_eq!(g1.vertex_count(), g2.vertex_count());
    assert_eq!(g1.edge_count(), g2.edge_count());

    let (k1, _) = find_maximum_clique(&g1, Variant::BkBasic, &Options::default()).unwrap();
    let (k2, _) = find_maximum_clique(&g2, Variant::BkBasic, &Options::default()).unwrap();
    assert_eq!(k1.len(), k2.len());
}
