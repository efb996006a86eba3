use revolve_core::{ExtentModel, NavigationEngine};
use revolve_model::Axis;

const VIEWPORTS: [f64; 10] = [
    50.0, 100.0, 150.0, 199.0, 200.0, 250.0, 300.0, 350.0, 555.0, 1000.0,
];

fn engine(extents: &[f64], viewport: f64, step: usize) -> NavigationEngine {
    NavigationEngine::with_extents(
        ExtentModel::from_extents(Axis::Horizontal, extents, viewport),
        step,
    )
}

/// Mixed extents built from a fixed pattern so the cases are reproducible.
fn mixed(count: usize, seed: usize) -> Vec<f64> {
    const PATTERN: [f64; 7] = [40.0, 75.5, 100.0, 180.0, 260.0, 400.0, 12.25];
    (0..count)
        .map(|i| PATTERN[(i * 3 + seed) % PATTERN.len()])
        .collect()
}

fn uniform_cases() -> impl Iterator<Item = (usize, usize, f64)> {
    (1..15).flat_map(|count| {
        (1..6).flat_map(move |step| {
            VIEWPORTS.into_iter().map(move |viewport| (count, step, viewport))
        })
    })
}

#[test]
fn ten_items_scenario() {
    let mut nav = engine(&[100.0; 10], 350.0, 1);

    let cmd = nav.next().expect("slides");
    assert_eq!(nav.current_index(), 1);
    assert!((cmd.offset_percent - 10.0).abs() < 1e-4);
    assert!((cmd.offset_absolute - 100.0).abs() < 1e-3);

    nav.previous();
    let cmd = nav.previous().expect("slides");
    assert_eq!(nav.current_index(), 7);
    assert!((cmd.offset_percent - 70.0).abs() < 1e-4);
}

#[test]
fn index_stays_in_range_under_any_call_sequence() {
    for count in 1..12 {
        for step in 1..5 {
            for (seed, viewport) in VIEWPORTS.into_iter().enumerate() {
                let mut nav = engine(&mixed(count, seed), viewport, step);
                for call in 0..40 {
                    if (call * 7 + seed) % 3 == 0 {
                        nav.previous();
                    } else {
                        nav.next();
                    }
                    assert!(
                        nav.current_index() < count,
                        "index {} out of range for {count} items",
                        nav.current_index()
                    );
                }
            }
        }
    }
}

#[test]
fn uniform_forward_wrap_within_ceil_of_count_over_step() {
    for (count, step, viewport) in uniform_cases() {
        let mut nav = engine(&vec![100.0; count], viewport, step);
        if !nav.should_slide() {
            continue;
        }
        let bound = count.div_ceil(step);
        let wrapped = (0..bound).any(|_| {
            nav.next();
            nav.current_index() == 0
        });
        assert!(
            wrapped,
            "no wrap within {bound} calls ({count} items, step {step}, viewport {viewport})"
        );
    }
}

#[test]
fn mixed_forward_wrap_within_item_count() {
    for count in 2..12 {
        for step in 1..5 {
            for (seed, viewport) in VIEWPORTS.into_iter().enumerate() {
                let mut nav = engine(&mixed(count, seed), viewport, step);
                if !nav.should_slide() {
                    continue;
                }
                let wrapped = (0..count).any(|_| {
                    nav.next();
                    nav.current_index() == 0
                });
                assert!(wrapped, "{count} items, step {step}, viewport {viewport}");
            }
        }
    }
}

#[test]
fn single_steps_are_symmetric_for_uniform_extents() {
    for (count, _, viewport) in uniform_cases().filter(|(_, step, _)| *step == 1) {
        for start in 0..count {
            let mut nav = engine(&vec![100.0; count], viewport, 1);
            if !nav.should_slide() {
                break;
            }
            for _ in 0..start {
                nav.next();
            }
            let from = nav.current_index();
            nav.next();
            if nav.current_index() == 0 {
                continue;
            }
            nav.previous();
            assert_eq!(nav.current_index(), from);
        }

        // Backward wrap is undone by one forward wrap.
        let mut nav = engine(&vec![100.0; count], viewport, 1);
        if nav.previous().is_some() {
            nav.next();
            assert_eq!(nav.current_index(), 0);
        }
    }
}

#[test]
fn nothing_moves_when_everything_fits() {
    for count in 0..6 {
        let extents = vec![50.0; count];
        let mut nav = engine(&extents, 50.0 * count as f64 + 1.0, 2);
        assert!(nav.next().is_none());
        assert!(nav.previous().is_none());
        assert_eq!(nav.current_index(), 0);
    }
}

#[test]
fn offsets_follow_the_index() {
    let extents = mixed(9, 2);
    let total: f64 = extents.iter().sum();
    let mut nav = engine(&extents, 300.0, 2);
    for _ in 0..12 {
        let Some(cmd) = nav.next() else {
            panic!("expected a slide");
        };
        let expected = 100.0 / 9.0 * nav.current_index() as f64;
        assert!((cmd.offset_percent - expected).abs() < 1e-3);
        assert!((cmd.offset_absolute - expected * total / 100.0).abs() < 1e-2);
    }
}
