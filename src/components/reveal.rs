use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of an element's area that must be visible before it activates.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Direction variant of a reveal animation. Purely cosmetic; activation
/// semantics are identical for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Fade,
    Left,
    Right,
}

impl RevealKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Fade => "reveal",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
        }
    }
}

struct Inner {
    observer: IntersectionObserver,
    // Keeps the callback alive for as long as the observer is.
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Page-wide scroll-reveal controller, shared through Yew context.
///
/// Each `Reveal` element registers itself here on mount and deregisters on
/// unmount, so elements created after the page mounts are observed too.
/// When an element first crosses the visibility threshold it gains the
/// `active` class and is unobserved, making the activation one-shot.
#[derive(Clone)]
pub struct RevealRegistry {
    inner: Rc<Inner>,
}

impl PartialEq for RevealRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl RevealRegistry {
    pub fn new() -> Self {
        let on_intersect = Closure::wrap(Box::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("active");
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .unwrap();

        Self {
            inner: Rc::new(Inner {
                observer,
                _on_intersect: on_intersect,
            }),
        }
    }

    pub fn observe(&self, target: &Element) {
        self.inner.observer.observe(target);
    }

    pub fn unobserve(&self, target: &Element) {
        self.inner.observer.unobserve(target);
    }

    /// Drops every subscription at once. Called on page teardown.
    pub fn disconnect(&self) {
        self.inner.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealKind::Fade)]
    pub kind: RevealKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that animates in the first time it scrolls
/// into view. Renders plainly (no animation) when no registry is provided.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let registry = use_context::<RevealRegistry>();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |registry: &Option<RevealRegistry>| {
                let registry = registry.clone();
                if let (Some(registry), Some(el)) = (&registry, node.cast::<Element>()) {
                    registry.observe(&el);
                }
                move || {
                    if let (Some(registry), Some(el)) = (registry, node.cast::<Element>()) {
                        registry.unobserve(&el);
                    }
                }
            },
            registry,
        );
    }

    html! {
        <div ref={node} class={classes!(props.kind.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_marker_class() {
        assert_eq!(RevealKind::Fade.class(), "reveal");
        assert_eq!(RevealKind::Left.class(), "reveal-left");
        assert_eq!(RevealKind::Right.class(), "reveal-right");
    }
}
