use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_core::config::KinematicsConfig;
use warren_core::kinematics::{renormalize, speed_for, wander_turn};
use warren_data::{Heading, Vitality};

prop_compose! {
    fn arb_vitality()(
        max_life in 1i64..10_000,
    )(
        life in 0..=max_life,
        max_life in Just(max_life),
    ) -> Vitality {
        Vitality { life, max_life }
    }
}

prop_compose! {
    fn arb_kinematics()(
        v_min in 0.1f64..5.0,
        extra in 0.0f64..5.0,
        turn_chance in 0.0f64..=1.0,
        turn_arc_degrees in 0.0f64..90.0,
    ) -> KinematicsConfig {
        KinematicsConfig {
            v_min,
            v_max: v_min + extra,
            turn_chance,
            turn_arc_degrees,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn speed_stays_within_bounds(vitality in arb_vitality(), kin in arb_kinematics()) {
        let speed = speed_for(&vitality, &kin);
        prop_assert!(speed >= kin.v_min - 1e-12);
        prop_assert!(speed <= kin.v_max + 1e-12);
    }

    #[test]
    fn speed_never_drops_as_life_depletes(
        vitality in arb_vitality(),
        kin in arb_kinematics(),
    ) {
        prop_assume!(vitality.life > 0);
        let now = speed_for(&vitality, &kin);
        let older = Vitality { life: vitality.life - 1, max_life: vitality.max_life };
        prop_assert!(speed_for(&older, &kin) >= now - 1e-12);
    }

    #[test]
    fn urgency_is_a_unit_interval(vitality in arb_vitality()) {
        let u = vitality.urgency();
        prop_assert!((0.0..=1.0).contains(&u));
    }

    #[test]
    fn renormalized_heading_has_exactly_current_speed(
        vitality in arb_vitality(),
        kin in arb_kinematics(),
        dx in -10.0f64..10.0,
        dy in -10.0f64..10.0,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut heading = Heading { dx, dy };
        renormalize(&mut heading, &vitality, &kin, &mut rng);
        let expected = speed_for(&vitality, &kin);
        prop_assert!((heading.length() - expected).abs() < 1e-9);
    }

    #[test]
    fn wander_turn_never_changes_speed(
        kin in arb_kinematics(),
        dx in -10.0f64..10.0,
        dy in -10.0f64..10.0,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut heading = Heading { dx, dy };
        let before = heading.length();
        wander_turn(&mut heading, &kin, &mut rng);
        prop_assert!((heading.length() - before).abs() < 1e-9);
    }

    #[test]
    fn feeding_never_exceeds_max_life(
        vitality in arb_vitality(),
        gain in 0i64..100_000,
    ) {
        let mut fed = vitality;
        fed.feed(gain);
        prop_assert!(fed.life <= fed.max_life);
        prop_assert!(fed.life >= vitality.life);
    }
}
