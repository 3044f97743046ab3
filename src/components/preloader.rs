use yew::prelude::*;

use crate::components::icons::WheelIcon;

/// Full-screen splash shown while the page is still "loading". Presentation
/// only; the 1.5 s timer and the one-shot state live in the root component.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    html! {
        <div class="preloader">
            <WheelIcon />
            <h3 class="loading-text">{"Loading FLITO..."}</h3>
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #0d0f12;
                }

                .preloader .wheel-spinner {
                    width: 64px;
                    height: 64px;
                    color: #ff6b35;
                    animation: wheel-spin 1.2s linear infinite;
                }

                .loading-text {
                    color: #fff;
                    font-size: 1.1rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                @keyframes wheel-spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
