use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::state::toggle::Toggle;

/// Site header with the mobile hamburger menu. The menu toggle is the only
/// state shared between two regions of the header: the hamburger button
/// flips it, and every nav link closes it unconditionally so users always
/// land on a closed menu after navigating.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(Toggle::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <header class="site-header">
            <div class="container">
                <nav class="navbar">
                    <div class="nav-left">
                        <button
                            class={classes!("hamburger", menu.is_open().then_some("open"))}
                            onclick={toggle_menu}
                            aria-label="Toggle menu"
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                        <div class="logo-container">
                            <img src="/flito.png" alt="Flito Logo" style="height: 40px; width: auto;" />
                        </div>
                    </div>

                    <div class={classes!("nav-right", menu.is_open().then_some("mobile-open"))}>
                        <div class="nav-links">
                            <a href="#home" onclick={close_menu.clone()}>{"Home"}</a>
                            <a href="#why" onclick={close_menu.clone()}>{"Why Flito?"}</a>
                            <a href="#about" onclick={close_menu.clone()}>{"About Us"}</a>
                            <a href="#contact" onclick={close_menu}>{"Contact"}</a>
                        </div>

                        <a
                            href={config::PLAY_STORE_URL}
                            class="btn-primary"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Download App"}
                        </a>
                    </div>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(13, 15, 18, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(255, 107, 53, 0.1);
                }

                .navbar {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.75rem 0;
                }

                .nav-left {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .hamburger {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 5px;
                    width: 36px;
                    height: 36px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .hamburger span {
                    display: block;
                    height: 2px;
                    width: 100%;
                    background: #fff;
                    border-radius: 2px;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .hamburger.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .hamburger.open span:nth-child(2) {
                    opacity: 0;
                }

                .hamburger.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-links {
                    display: flex;
                    gap: 1.75rem;
                }

                .nav-links a {
                    color: #ddd;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }

                .nav-links a:hover {
                    color: #ff6b35;
                }

                @media (max-width: 768px) {
                    .hamburger {
                        display: flex;
                    }

                    .nav-right {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.25rem 1.5rem;
                        background: rgba(13, 15, 18, 0.97);
                        border-bottom: 1px solid rgba(255, 107, 53, 0.1);
                        transform: translateY(-8px);
                        opacity: 0;
                        pointer-events: none;
                        transition: transform 0.25s ease, opacity 0.25s ease;
                    }

                    .nav-right.mobile-open {
                        transform: translateY(0);
                        opacity: 1;
                        pointer-events: auto;
                    }

                    .nav-links {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
