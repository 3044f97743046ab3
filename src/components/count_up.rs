use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::state::count_up::CountUpTask;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub end: u32,
    #[prop_or(config::COUNT_UP_DURATION_MS)]
    pub duration: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Animates a displayed integer from 0 to `end` over `duration` milliseconds,
/// driven by the frame clock. The start timestamp is taken from the first
/// frame callback; changing `end` or `duration` restarts from 0. The pending
/// frame request is cancelled and its closure dropped on teardown so nothing
/// can touch state after the component is gone.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(end, duration)| {
                let task = CountUpTask::new(end, duration);
                let window = web_sys::window().unwrap();

                let frame_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
                let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                let start: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

                if task.is_complete(0.0) || task.end() == 0 {
                    // Zero duration or zero target: no frames needed.
                    value.set(task.end());
                } else {
                    value.set(0);

                    let step = {
                        let value = value.clone();
                        let window = window.clone();
                        let frame_id = frame_id.clone();
                        let frame_cb = frame_cb.clone();
                        Closure::wrap(Box::new(move |timestamp: f64| {
                            let started = match start.get() {
                                Some(s) => s,
                                None => {
                                    start.set(Some(timestamp));
                                    timestamp
                                }
                            };
                            let elapsed = timestamp - started;
                            value.set(task.value_at(elapsed));
                            if !task.is_complete(elapsed) {
                                let id = window
                                    .request_animation_frame(
                                        frame_cb.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                                    )
                                    .unwrap();
                                *frame_id.borrow_mut() = Some(id);
                            } else {
                                *frame_id.borrow_mut() = None;
                            }
                        }) as Box<dyn FnMut(f64)>)
                    };

                    let id = window
                        .request_animation_frame(step.as_ref().unchecked_ref())
                        .unwrap();
                    *frame_cb.borrow_mut() = Some(step);
                    *frame_id.borrow_mut() = Some(id);
                }

                move || {
                    if let Some(id) = frame_id.borrow_mut().take() {
                        let _ = window.cancel_animation_frame(id);
                    }
                    // Dropping the closure invalidates any stray callback.
                    frame_cb.borrow_mut().take();
                }
            },
            (props.end, props.duration),
        );
    }

    html! {
        <span>{*value}{props.suffix.clone()}</span>
    }
}
