use proptest::prelude::*;
use scatter_rs::animation::{Easing, Transition};
use scatter_rs::core::{DomainPadding, LinearScale, Point};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (680.0, 0.0)).expect("valid scale");
        let px = scale.map(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn ticks_are_nice_and_inside_the_domain(
        domain_start in -100_000.0f64..100_000.0,
        domain_span in 0.01f64..100_000.0,
        count in 2usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 840.0)).expect("valid scale");
        let ticks = scale.ticks(count);
        let step = scale.tick_step(count).expect("step");

        prop_assert!(!ticks.is_empty());
        for tick in &ticks {
            prop_assert!(*tick >= domain_start - step * 1e-9);
            prop_assert!(*tick <= domain_end + step * 1e-9);
        }
        for pair in ticks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= step * 1e-6);
        }
        let mantissa = step / 10f64.powf(step.log10().floor());
        prop_assert!([1.0, 2.0, 5.0, 10.0].iter().any(|nice| (mantissa - nice).abs() < 1e-6));
    }

    #[test]
    fn padding_scales_extent_bounds(
        min in 0.1f64..100_000.0,
        spread in 0.0f64..100_000.0,
        low in 0.5f64..1.0,
        high in 1.0f64..1.5
    ) {
        let max = min + spread;
        let padding = DomainPadding::new(low, high).validate().expect("valid padding");
        let (start, end) = padding.apply(min, max);
        prop_assert_eq!(start, min * low);
        prop_assert_eq!(end, max * high);
        prop_assert!(start <= min && end >= max);
    }

    #[test]
    fn transitions_stay_between_endpoints(
        from_x in -1_000.0f64..1_000.0,
        from_y in -1_000.0f64..1_000.0,
        to_x in -1_000.0f64..1_000.0,
        to_y in -1_000.0f64..1_000.0,
        elapsed in 0.0f64..2_000.0
    ) {
        for easing in [Easing::Linear, Easing::Smoothstep, Easing::CubicInOut] {
            let mut transition = Transition::idle(Point::new(from_x, from_y), easing);
            transition.retarget(Point::new(to_x, to_y), 0.0, 1_000.0);
            let value = transition.value_at(elapsed);
            prop_assert!(value.x >= from_x.min(to_x) - 1e-9 && value.x <= from_x.max(to_x) + 1e-9);
            prop_assert!(value.y >= from_y.min(to_y) - 1e-9 && value.y <= from_y.max(to_y) + 1e-9);
            if elapsed >= 1_000.0 {
                prop_assert!((value.x - to_x).abs() <= 1e-9 && (value.y - to_y).abs() <= 1e-9);
            }
        }
    }
}
