use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;

mod config;
mod state {
    pub mod count_up;
    pub mod one_shot;
    pub mod toggle;
}
mod components {
    pub mod count_up;
    pub mod faq;
    pub mod icons;
    pub mod nav;
    pub mod preloader;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use components::preloader::Preloader;
use components::reveal::RevealRegistry;
use pages::home::Home;
use state::one_shot::OneShot;

#[function_component]
fn App() -> Html {
    let preload = use_state(OneShot::default);

    // One-shot preload timer. Dropping the handle in the cleanup cancels the
    // timer, so an unmount before it fires can never settle stale state.
    {
        let preload = preload.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(config::PRELOAD_DELAY_MS, move || {
                    let mut next = *preload;
                    if next.settle() {
                        preload.set(next);
                    }
                });
                move || drop(timer)
            },
            (),
        );
    }

    // One reveal observer per page instance; every Reveal element registers
    // itself against it through context.
    let registry = use_memo(|_| RevealRegistry::new(), ());

    {
        let registry = (*registry).clone();
        use_effect_with_deps(move |_| move || registry.disconnect(), ());
    }

    html! {
        <ContextProvider<RevealRegistry> context={(*registry).clone()}>
            { if preload.is_pending() { html! { <Preloader /> } } else { html! {} } }
            <Nav />
            <Home />
        </ContextProvider<RevealRegistry>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
