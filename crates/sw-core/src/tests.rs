//! Unit tests for sw-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_matches_inner() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GridPoint, Vec2, bounds_max};

    #[test]
    fn bounds_are_component_wise() {
        let pts = [Vec2::new(1.0, 9.0), Vec2::new(7.0, 2.0), Vec2::new(3.0, 3.0)];
        assert_eq!(bounds_max(&pts), Some(Vec2::new(7.0, 9.0)));
        assert_eq!(bounds_max(&[]), None);
    }

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.5));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, 7.0));
    }

    #[test]
    fn component_wise_bounds() {
        let a = Vec2::new(1.0, 9.0);
        let b = Vec2::new(4.0, 2.0);
        assert_eq!(a.max(b), Vec2::new(4.0, 9.0));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::ZERO;
        assert!((a.distance(b) - 14.142_135_623_730_951).abs() < 1e-12);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn finiteness() {
        assert!(Vec2::new(1.0, -1.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn grid_point_converts_and_shifts() {
        let p = GridPoint::new(3, 4).offset_x(15);
        assert_eq!(p, GridPoint::new(18, 4));
        assert_eq!(Vec2::from(p), Vec2::new(18.0, 4.0));
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn next_and_display() {
        assert_eq!(Step(4).next(), Step(5));
        assert_eq!(Step(12).to_string(), "S12");
    }

    #[test]
    fn frame_boundaries() {
        assert!(Step(10).is_frame(5));
        assert!(!Step(11).is_frame(5));
        assert!(Step(3).is_frame(1));
        assert!(!Step(0).is_frame(0), "interval 0 never matches");
    }
}

#[cfg(test)]
mod params {
    use crate::{RunConfig, SwError, SwarmParams};

    #[test]
    fn defaults_are_reference_constants() {
        let p = SwarmParams::default();
        assert_eq!(p.closeness_threshold, 0.05);
        assert_eq!(p.step_gain, 0.1);
        assert_eq!(p.min_step, 0.005);
        assert_eq!(p.max_step, 0.1);
        assert_eq!(p.damping, 0.6);
        assert_eq!(p.epsilon, 1e-5);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn step_size_clamps_both_ends() {
        let p = SwarmParams::default();
        assert_eq!(p.step_size(0.0), 0.005);
        assert_eq!(p.step_size(14.142), 0.1);
        // 0.5² × 0.1 = 0.025, inside the band.
        assert!((p.step_size(0.5) - 0.025).abs() < 1e-15);
    }

    #[test]
    fn step_size_stays_in_band() {
        let p = SwarmParams::default();
        for i in 0..10_000 {
            let dist = i as f64 * 0.001;
            let s = p.step_size(dist);
            assert!((0.005..=0.1).contains(&s), "dist {dist} gave {s}");
        }
        assert_eq!(p.step_size(1e300), 0.1);
    }

    #[test]
    fn step_size_respects_custom_bounds() {
        let p = SwarmParams { min_step: 0.02, max_step: 0.5, step_gain: 1.0, ..SwarmParams::default() };
        for i in 0..2_000 {
            let s = p.step_size(i as f64 * 0.01);
            assert!((0.02..=0.5).contains(&s));
        }
    }

    #[test]
    fn invalid_params_rejected() {
        let bad = [
            SwarmParams { closeness_threshold: 0.0, ..SwarmParams::default() },
            SwarmParams { step_gain: -1.0, ..SwarmParams::default() },
            SwarmParams { min_step: 0.2, max_step: 0.1, ..SwarmParams::default() },
            SwarmParams { min_step: 0.0, ..SwarmParams::default() },
            SwarmParams { damping: 1.0, ..SwarmParams::default() },
            SwarmParams { damping: -0.1, ..SwarmParams::default() },
            SwarmParams { epsilon: 0.0, ..SwarmParams::default() },
            SwarmParams { max_step: f64::NAN, ..SwarmParams::default() },
        ];
        for p in bad {
            assert!(matches!(p.validate(), Err(SwError::Config(_))), "{p:?} should fail");
        }
    }

    #[test]
    fn zero_damping_is_allowed() {
        let p = SwarmParams { damping: 0.0, ..SwarmParams::default() };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn run_config_defaults() {
        let c = RunConfig::default();
        assert_eq!(c.seed, 42);
        assert_eq!(c.max_steps, Some(100_000));
        assert_eq!(c.frame_interval, 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let va: Vec<u64> = (0..8).map(|_| a.unit().to_bits()).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.unit().to_bits()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn unit_in_half_open_interval() {
        let mut rng = SimRng::new(99);
        for _ in 0..1_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
