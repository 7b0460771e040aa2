//! Unit tests for pe-graph.
//!
//! All tests use hand-built or seeded graphs so they are fully reproducible.

#[cfg(test)]
mod helpers {
    use pe_core::NodeId;

    use crate::{Topology, TopologyBuilder};

    /// A path `1 - 2 - … - n`: exactly one route between any two nodes.
    pub fn line(n: usize) -> Topology {
        let mut b = TopologyBuilder::new(n);
        for i in 1..n as u32 {
            b.add_edge(NodeId(i), NodeId(i + 1)).unwrap();
        }
        b.build().unwrap()
    }

    /// Square `1 - 2 - 3 - 4 - 1`: two equal-length routes from 1 to 3.
    pub fn square() -> Topology {
        TopologyBuilder::ring(4).unwrap().build().unwrap()
    }
}

// ── Builder & topology structure ──────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use pe_core::{NodeId, SimRng};

    use crate::{GraphError, TopologyBuilder};

    #[test]
    fn ring_structure() {
        let t = TopologyBuilder::ring(40).unwrap().build().unwrap();
        assert_eq!(t.node_count(), 40);
        assert_eq!(t.edge_count(), 40);
        for n in t.nodes() {
            assert_eq!(t.degree(n), 2, "{n} should have degree 2 on a bare ring");
        }
        assert!(t.has_edge(NodeId(40), NodeId(1)));
        assert!(t.has_edge(NodeId(1), NodeId(40)));
    }

    #[test]
    fn neighbor_order_is_insertion_order() {
        let t = TopologyBuilder::ring(3).unwrap().build().unwrap();
        // Edges added 1-2, 2-3, 3-1.
        assert_eq!(t.neighbors(NodeId(1)), &[NodeId(2), NodeId(3)]);
        assert_eq!(t.neighbors(NodeId(2)), &[NodeId(1), NodeId(3)]);
        assert_eq!(t.neighbors(NodeId(3)), &[NodeId(2), NodeId(1)]);
    }

    #[test]
    fn two_node_ring_has_one_edge() {
        let t = TopologyBuilder::ring(2).unwrap().build().unwrap();
        assert_eq!(t.edge_count(), 1);
    }

    #[test]
    fn symmetric_adjacency() {
        let mut rng = SimRng::new(7);
        let t = TopologyBuilder::ring(40)
            .unwrap()
            .with_max_degree(3)
            .add_random_chords(10, &mut rng)
            .unwrap()
            .build()
            .unwrap();
        for a in t.nodes() {
            for &b in t.neighbors(a) {
                assert!(t.has_edge(b, a), "edge {a}-{b} is not symmetric");
            }
        }
    }

    #[test]
    fn chords_respect_degree_bound() {
        let mut rng = SimRng::new(123);
        let t = TopologyBuilder::ring(40)
            .unwrap()
            .with_max_degree(3)
            .add_random_chords(10, &mut rng)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(t.edge_count(), 50);
        assert!(t.max_degree() <= 3);
    }

    #[test]
    fn chords_are_seed_deterministic() {
        let build = |seed| {
            let mut rng = SimRng::new(seed);
            TopologyBuilder::ring(40)
                .unwrap()
                .with_max_degree(3)
                .add_random_chords(10, &mut rng)
                .unwrap()
                .build()
                .unwrap()
        };
        let a = build(5);
        let b = build(5);
        for n in a.nodes() {
            assert_eq!(a.neighbors(n), b.neighbors(n));
        }
    }

    #[test]
    fn unsatisfiable_chords_fail() {
        // A 4-ring with degree bound 3 has room for exactly 2 chords.
        let mut rng = SimRng::new(1);
        let result = TopologyBuilder::ring(4)
            .unwrap()
            .with_max_degree(3)
            .add_random_chords(3, &mut rng);
        assert!(matches!(result, Err(GraphError::ChordBudgetExhausted { placed: 2, .. })));
    }

    #[test]
    fn isolated_node_rejected() {
        let mut b = TopologyBuilder::new(3);
        b.add_edge(NodeId(1), NodeId(2)).unwrap();
        assert!(matches!(b.build(), Err(GraphError::IsolatedNode(NodeId(3)))));
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = TopologyBuilder::new(3);
        assert!(matches!(b.add_edge(NodeId(2), NodeId(2)), Err(GraphError::SelfLoop(_))));
    }

    #[test]
    fn out_of_range_rejected() {
        let mut b = TopologyBuilder::new(3);
        assert!(matches!(
            b.add_edge(NodeId(1), NodeId(4)),
            Err(GraphError::NodeOutOfRange { node_count: 3, .. })
        ));
    }

    #[test]
    fn degree_bound_enforced_on_explicit_edges() {
        let mut b = TopologyBuilder::ring(5).unwrap().with_max_degree(2);
        assert!(matches!(
            b.add_edge(NodeId(1), NodeId(3)),
            Err(GraphError::DegreeExceeded { max_degree: 2, .. })
        ));
    }

    #[test]
    fn duplicate_edge_is_noop() {
        let mut b = TopologyBuilder::new(2);
        assert!(b.add_edge(NodeId(1), NodeId(2)).unwrap());
        assert!(!b.add_edge(NodeId(2), NodeId(1)).unwrap());
        assert_eq!(b.build().unwrap().edge_count(), 1);
    }

    #[test]
    fn unknown_label_has_no_neighbors() {
        let t = TopologyBuilder::ring(3).unwrap().build().unwrap();
        assert!(t.neighbors(NodeId(9)).is_empty());
        assert_eq!(t.degree(NodeId(9)), 0);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use pe_core::{AgentRng, NodeId};

    use super::helpers::{line, square};
    use crate::{
        BfsRouter, GraphError, Router, TopologyBuilder, distances_from, next_hop, shortest_path,
    };

    #[test]
    fn unique_path_has_exact_length() {
        let t = line(8);
        for k in 1..8u32 {
            let path = shortest_path(&t, NodeId(1), NodeId(1 + k));
            assert_eq!(path.len() - 1, k as usize, "path to node {} should be {k} hops", 1 + k);
            assert_eq!(path.first(), Some(&NodeId(1)));
            assert_eq!(path.last(), Some(&NodeId(1 + k)));
        }
    }

    #[test]
    fn same_node_route_is_trivial() {
        let t = line(3);
        let route = BfsRouter.route(&t, NodeId(2), NodeId(2)).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.hops(), 0);
        assert_eq!(route.next_hop(), None);
    }

    #[test]
    fn three_ring_is_one_hop() {
        let t = TopologyBuilder::ring(3).unwrap().build().unwrap();
        let route = BfsRouter.route(&t, NodeId(1), NodeId(2)).unwrap();
        assert_eq!(route.nodes, vec![NodeId(1), NodeId(2)]);
        assert_eq!(route.next_hop(), Some(NodeId(2)));
    }

    #[test]
    fn ring_takes_shorter_direction() {
        let t = TopologyBuilder::ring(10).unwrap().build().unwrap();
        let path = shortest_path(&t, NodeId(1), NodeId(9));
        assert_eq!(path, vec![NodeId(1), NodeId(10), NodeId(9)]);
    }

    #[test]
    fn tie_broken_by_insertion_order() {
        let t = square();
        // 1's neighbors are [2, 4]; both reach 3 in two hops.  BFS keeps 2.
        assert_eq!(shortest_path(&t, NodeId(1), NodeId(3)), vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn unreachable_goal_is_empty_path() {
        let mut b = TopologyBuilder::new(4);
        b.add_edge(NodeId(1), NodeId(2)).unwrap();
        b.add_edge(NodeId(3), NodeId(4)).unwrap();
        let t = b.build().unwrap();
        assert!(shortest_path(&t, NodeId(1), NodeId(4)).is_empty());
        assert!(matches!(
            BfsRouter.route(&t, NodeId(1), NodeId(4)),
            Err(GraphError::NoRoute { .. })
        ));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let t = line(3);
        assert!(matches!(
            BfsRouter.route(&t, NodeId(1), NodeId(7)),
            Err(GraphError::NodeOutOfRange { .. })
        ));
        assert!(shortest_path(&t, NodeId(1), NodeId(7)).is_empty());
    }

    #[test]
    fn distance_field() {
        let t = line(5);
        let d = distances_from(&t, NodeId(3));
        assert_eq!(d, vec![Some(2), Some(1), Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn distance_field_marks_unreachable() {
        let mut b = TopologyBuilder::new(3);
        b.add_edge(NodeId(1), NodeId(2)).unwrap();
        let t = b.build_unchecked();
        let d = distances_from(&t, NodeId(1));
        assert_eq!(d[2], None);
    }

    #[test]
    fn next_hop_follows_shortest_path() {
        let t = line(6);
        let mut rng = AgentRng::from_seed(0);
        assert_eq!(next_hop(&t, NodeId(1), NodeId(6), &mut rng), Some(NodeId(2)));
        assert_eq!(next_hop(&t, NodeId(6), NodeId(1), &mut rng), Some(NodeId(5)));
        assert_eq!(next_hop(&t, NodeId(3), NodeId(3), &mut rng), None);
    }

    #[test]
    fn next_hop_randomizes_between_equal_routes() {
        let t = square();
        let mut rng = AgentRng::from_seed(11);
        let mut saw_two = false;
        let mut saw_four = false;
        for _ in 0..200 {
            match next_hop(&t, NodeId(1), NodeId(3), &mut rng) {
                Some(NodeId(2)) => saw_two = true,
                Some(NodeId(4)) => saw_four = true,
                other => panic!("unexpected hop {other:?}"),
            }
        }
        assert!(saw_two && saw_four, "both shortest first hops should be chosen");
    }

    #[test]
    fn next_hop_none_when_unreachable() {
        let mut b = TopologyBuilder::new(4);
        b.add_edge(NodeId(1), NodeId(2)).unwrap();
        b.add_edge(NodeId(3), NodeId(4)).unwrap();
        let t = b.build().unwrap();
        let mut rng = AgentRng::from_seed(0);
        assert_eq!(next_hop(&t, NodeId(1), NodeId(3), &mut rng), None);
    }
}
