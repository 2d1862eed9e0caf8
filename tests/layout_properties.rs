//! Property tests for the panel layout engine

use proptest::prelude::*;

use xslt_playground::layout::WIDTH_EPSILON;
use xslt_playground::{LayoutEvent, LayoutState, PanelSet};

fn event() -> impl Strategy<Value = LayoutEvent> {
    prop_oneof![
        (0usize..3, -200.0f64..1200.0)
            .prop_map(|(handle, pointer_x)| LayoutEvent::BeginDrag { handle, pointer_x }),
        (-200.0f64..1200.0, prop_oneof![Just(1000.0f64), 1.0f64..4000.0]).prop_map(
            |(pointer_x, container_width)| LayoutEvent::UpdateDrag {
                pointer_x,
                container_width,
            }
        ),
        Just(LayoutEvent::EndDrag),
        (0usize..4).prop_map(|panel| LayoutEvent::ToggleMinimize { panel }),
        Just(LayoutEvent::Reset),
    ]
}

proptest! {
    #[test]
    fn widths_always_sum_to_100(events in prop::collection::vec(event(), 0..64)) {
        let mut state = LayoutState::default();
        for event in events {
            state = state.apply(event);
            let total = state.panels().total();
            prop_assert!((total - 100.0).abs() < WIDTH_EPSILON, "total {}", total);
            for width in state.panels().widths() {
                prop_assert!(*width >= -WIDTH_EPSILON && *width <= 100.0 + WIDTH_EPSILON);
            }
        }
    }

    #[test]
    fn drag_floor_holds_during_drag(handle in 0usize..2, start in 0.0f64..1000.0, to in -500.0f64..1500.0) {
        let state = LayoutState::default()
            .apply(LayoutEvent::BeginDrag { handle, pointer_x: start })
            .apply(LayoutEvent::UpdateDrag { pointer_x: to, container_width: 1000.0 });
        for width in state.panels().widths() {
            prop_assert!(*width >= 1.0 - WIDTH_EPSILON);
        }
    }

    #[test]
    fn returning_to_start_restores_exactly(handle in 0usize..2, start in 0.0f64..1000.0, to in -500.0f64..1500.0) {
        let initial = LayoutState::default();
        let state = initial
            .clone()
            .apply(LayoutEvent::BeginDrag { handle, pointer_x: start })
            .apply(LayoutEvent::UpdateDrag { pointer_x: to, container_width: 1000.0 })
            .apply(LayoutEvent::UpdateDrag { pointer_x: start, container_width: 1000.0 });
        prop_assert_eq!(state.panels(), initial.panels());
    }
}

#[test]
fn growth_clamps_to_ceiling() {
    let state = LayoutState::default()
        .with_panels(PanelSet::from_widths(vec![33.33, 33.33, 33.34]))
        .apply(LayoutEvent::BeginDrag {
            handle: 0,
            pointer_x: 200.0,
        })
        .apply(LayoutEvent::UpdateDrag {
            pointer_x: 700.0,
            container_width: 1000.0,
        });

    let widths = state.panels().widths();
    assert!((widths[0] - 95.0).abs() < WIDTH_EPSILON);
    assert!((widths[1] + widths[2] - 5.0).abs() < WIDTH_EPSILON);
    assert!(widths[1] >= 1.0 && widths[2] >= 1.0);
}

#[test]
fn css_widths_follow_panels() {
    let state = LayoutState::default().apply(LayoutEvent::ToggleMinimize { panel: 0 });
    let css = state.panels().css_widths();
    assert_eq!(css.len(), 3);
    assert_eq!(css[0], "2.00%");
}
