//! Unit tests for pe-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId, TrialId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
        assert_eq!(TrialId(3).index(), 3);
    }

    #[test]
    fn node_labels_are_one_based() {
        assert_eq!(NodeId(1).index(), 0);
        assert_eq!(NodeId(40).index(), 39);
        assert_eq!(NodeId::from_index(0), NodeId::FIRST);
        assert_eq!(NodeId::from_index(39), NodeId(40));
    }

    #[test]
    fn node_range_check() {
        assert!(NodeId(1).is_within(40));
        assert!(NodeId(40).is_within(40));
        assert!(!NodeId(41).is_within(40));
        assert!(!NodeId(0).is_within(40));
    }

    #[test]
    fn label_distance_is_symmetric() {
        assert_eq!(NodeId(3).label_distance(NodeId(10)), 7);
        assert_eq!(NodeId(10).label_distance(NodeId(3)), 7);
        assert_eq!(NodeId(5).label_distance(NodeId(5)), 0);
    }

    #[test]
    fn all_labels_in_order() {
        let labels: Vec<u32> = NodeId::all(4).map(|n| n.0).collect();
        assert_eq!(labels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod config {
    use crate::TrialConfig;

    #[test]
    fn default_is_reference_configuration() {
        let c = TrialConfig::default();
        assert_eq!(c.node_count, 40);
        assert_eq!(c.chord_count, 10);
        assert_eq!(c.max_degree, 3);
        assert_eq!(c.trials, 100);
        assert_eq!(c.particle_count, 1_000);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_tiny_graph() {
        let c = TrialConfig { node_count: 1, ..TrialConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_trials() {
        let c = TrialConfig { trials: 0, ..TrialConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_particles() {
        let c = TrialConfig { particle_count: 0, ..TrialConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng, TrialId};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(99, AgentId(5));
        let mut b = AgentRng::new(99, AgentId(5));
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut a = AgentRng::new(99, AgentId(0));
        let mut b = AgentRng::new(99, AgentId(1));
        let va: Vec<u64> = (0..10).map(|_| a.random()).collect();
        let vb: Vec<u64> = (0..10).map(|_| b.random()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn trials_get_independent_streams() {
        let mut t0 = AgentRng::for_trial(7, AgentId(2), TrialId(0));
        let mut t1 = AgentRng::for_trial(7, AgentId(2), TrialId(1));
        let v0: Vec<u64> = (0..10).map(|_| t0.random()).collect();
        let v1: Vec<u64> = (0..10).map(|_| t1.random()).collect();
        assert_ne!(v0, v1);

        let mut again = AgentRng::for_trial(7, AgentId(2), TrialId(0));
        let v0_again: Vec<u64> = (0..10).map(|_| again.random()).collect();
        assert_eq!(v0, v0_again);
    }

    #[test]
    fn evader_stream_differs_from_strategy_stream() {
        let mut e = AgentRng::for_trial(7, AgentId::EVADER, TrialId(0));
        let mut s = AgentRng::for_trial(7, AgentId(0), TrialId(0));
        assert_ne!(e.random::<u64>(), s.random::<u64>());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::from_seed(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(1..=40);
            assert!((1..=40).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::from_seed(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn sim_rng_children_are_deterministic() {
        let mut root_a = SimRng::new(1);
        let mut root_b = SimRng::new(1);
        let mut ca = root_a.child(3);
        let mut cb = root_b.child(3);
        for _ in 0..10 {
            assert_eq!(ca.gen_range(0..1_000u32), cb.gen_range(0..1_000u32));
        }
    }
}
