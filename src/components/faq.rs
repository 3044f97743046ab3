use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::toggle::Toggle;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

/// One FAQ entry. Every entry owns its own toggle, so opening one never
/// closes another.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let state = use_state(Toggle::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set(state.toggled());
        })
    };

    html! {
        <div class={classes!("faq-item", state.is_open().then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <h3>{&props.question}</h3>
                <span class="faq-icon">{if state.is_open() { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}
