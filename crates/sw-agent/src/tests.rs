//! Unit tests for sw-agent.

#[cfg(test)]
mod tiling {
    use sw_core::Vec2;

    use crate::tile_targets;

    fn four() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        ]
    }

    #[test]
    fn fewer_agents_than_targets_claims_prefix() {
        let t = four();
        let tiled = tile_targets(&t, 2);
        assert_eq!(tiled, vec![t[0], t[1]]);
    }

    #[test]
    fn more_agents_than_targets_wraps() {
        let t = four();
        let tiled = tile_targets(&t, 10);
        assert_eq!(tiled.len(), 10);
        for (i, p) in tiled.iter().enumerate() {
            assert_eq!(*p, t[i % t.len()], "agent {i}");
        }
    }

    #[test]
    fn empty_targets_tile_to_nothing() {
        assert!(tile_targets(&[], 5).is_empty());
    }
}

#[cfg(test)]
mod builder {
    use sw_core::{AgentId, SimRng, Vec2};

    use crate::{PopulationBuilder, PopulationError};

    fn targets() -> Vec<Vec2> {
        vec![Vec2::new(20.0, 5.0), Vec2::new(40.0, 10.0), Vec2::new(30.0, 0.0)]
    }

    #[test]
    fn builds_requested_count() {
        let t = targets();
        let mut rng = SimRng::new(42);
        let pop = PopulationBuilder::new(&t, 7).build(&mut rng).unwrap();
        assert_eq!(pop.count, 7);
        assert_eq!(pop.len(), 7);
        assert!(!pop.is_empty());
        assert_eq!(pop.positions.len(), 7);
        assert_eq!(pop.velocities.len(), 7);
        assert_eq!(pop.targets.len(), 7);
        assert_eq!(pop.ids().count(), 7);
    }

    #[test]
    fn velocities_start_at_zero() {
        let t = targets();
        let pop = PopulationBuilder::new(&t, 4).build(&mut SimRng::new(1)).unwrap();
        assert!(pop.velocities.iter().all(|v| *v == Vec2::ZERO));
    }

    #[test]
    fn positions_within_target_bounds() {
        let t = targets();
        let pop = PopulationBuilder::new(&t, 500).build(&mut SimRng::new(3)).unwrap();
        for p in &pop.positions {
            assert!((0.0..=40.0).contains(&p.x), "{p}");
            assert!((0.0..=10.0).contains(&p.y), "{p}");
        }
    }

    #[test]
    fn same_seed_same_placement() {
        let t = targets();
        let a = PopulationBuilder::new(&t, 50).build(&mut SimRng::new(9)).unwrap();
        let b = PopulationBuilder::new(&t, 50).build(&mut SimRng::new(9)).unwrap();
        assert_eq!(a.positions, b.positions);

        let c = PopulationBuilder::new(&t, 50).build(&mut SimRng::new(10)).unwrap();
        assert_ne!(a.positions, c.positions);
    }

    #[test]
    fn targets_are_tiled() {
        let t = targets();
        let pop = PopulationBuilder::new(&t, 8).build(&mut SimRng::new(0)).unwrap();
        for id in pop.ids() {
            assert_eq!(pop.target(id), t[id.index() % t.len()]);
        }
    }

    #[test]
    fn explicit_positions_used_verbatim() {
        let t = vec![Vec2::ZERO];
        let pop = PopulationBuilder::new(&t, 1)
            .initial_positions(vec![Vec2::new(10.0, 10.0)])
            .build(&mut SimRng::new(0))
            .unwrap();
        assert_eq!(pop.position(AgentId(0)), Vec2::new(10.0, 10.0));
        assert_eq!(pop.velocities[0], Vec2::ZERO);
        assert!((pop.distance_to_target(AgentId(0)) - 200f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn degenerate_bounds_place_on_axis() {
        // All targets at x = 0: placement collapses onto the y axis instead
        // of failing.
        let t = vec![Vec2::new(0.0, 3.0), Vec2::new(0.0, 6.0)];
        let pop = PopulationBuilder::new(&t, 20).build(&mut SimRng::new(5)).unwrap();
        assert!(pop.positions.iter().all(|p| p.x == 0.0 && (0.0..=6.0).contains(&p.y)));
    }

    #[test]
    fn zero_agents_rejected() {
        let t = targets();
        let err = PopulationBuilder::new(&t, 0).build(&mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, PopulationError::NoAgents));
    }

    #[test]
    fn empty_targets_rejected() {
        let err = PopulationBuilder::new(&[], 3).build(&mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, PopulationError::EmptyTargets));
    }

    #[test]
    fn non_finite_target_rejected() {
        let t = vec![Vec2::ZERO, Vec2::new(f64::NAN, 1.0)];
        let err = PopulationBuilder::new(&t, 2).build(&mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, PopulationError::NonFinite { what: "target", index: 1 }));
    }

    #[test]
    fn position_count_mismatch_rejected() {
        let t = targets();
        let err = PopulationBuilder::new(&t, 3)
            .initial_positions(vec![Vec2::ZERO; 2])
            .build(&mut SimRng::new(0))
            .unwrap_err();
        assert!(matches!(
            err,
            PopulationError::AgentCountMismatch { expected: 3, got: 2, .. }
        ));
    }

    #[test]
    fn non_finite_initial_position_rejected() {
        let t = targets();
        let err = PopulationBuilder::new(&t, 2)
            .initial_positions(vec![Vec2::ZERO, Vec2::new(0.0, f64::INFINITY)])
            .build(&mut SimRng::new(0))
            .unwrap_err();
        assert!(matches!(err, PopulationError::NonFinite { what: "initial position", index: 1 }));
    }
}
