use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// A click is outside when it has no target node or when no mounted target
/// contains it. Unmounted targets (`None`) never contain anything.
pub(crate) fn lands_outside<T, N>(
    targets: &[Option<T>],
    clicked: Option<&N>,
    contains: impl Fn(&T, &N) -> bool,
) -> bool {
    match clicked {
        Some(node) => !targets.iter().flatten().any(|target| contains(target, node)),
        None => true,
    }
}

/// While `active`, fire `on_outside` for every document click that lands
/// outside all `targets`. No listener is registered while inactive.
#[hook]
pub fn use_outside_click(targets: Vec<NodeRef>, active: bool, on_outside: Callback<()>) {
    use_effect_with((targets, active, on_outside), |(targets, active, on_outside)| {
        let listener = active.then(|| {
            let targets = targets.clone();
            let on_outside = on_outside.clone();

            EventListener::new(&gloo::utils::document(), "click", move |event| {
                let clicked = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                let mounted: Vec<Option<Node>> = targets.iter().map(NodeRef::get).collect();
                if lands_outside(&mounted, clicked.as_ref(), |target, node| target.contains(Some(node))) {
                    on_outside.emit(());
                }
            })
        });

        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Range;

    fn within(range: &Range<u32>, point: &u32) -> bool {
        range.contains(point)
    }

    #[test]
    fn test_click_inside_any_target_is_not_outside() {
        let targets = [Some(0..10), Some(20..30)];
        assert!(!lands_outside(&targets, Some(&5), within));
        assert!(!lands_outside(&targets, Some(&25), within));
    }

    #[test]
    fn test_click_between_targets_is_outside() {
        let targets = [Some(0..10), Some(20..30)];
        assert!(lands_outside(&targets, Some(&15), within));
    }

    #[test]
    fn test_unmounted_targets_and_missing_node() {
        let targets: [Option<Range<u32>>; 2] = [None, Some(20..30)];
        assert!(lands_outside(&targets, Some(&5), within));
        assert!(!lands_outside(&targets, Some(&21), within));
        assert!(lands_outside(&targets, None, within));
    }
}
