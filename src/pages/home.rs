use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::faq::FaqItem;
use crate::components::icons::{
    AwardIcon, BillIcon, ClockIcon, LightningIcon, LocationIcon, MailIcon, MapPinIcon, PhoneIcon,
    PlayIcon, PromiseCheckIcon, StepArrow, UsersIcon, WhatsAppIcon,
};
use crate::components::reveal::{Reveal, RevealKind};
use crate::config;

/// The whole single-page site below the header: hero, feature highlights,
/// about/how-it-works, service promise, app preview, FAQ and footer.
#[function_component(Home)]
pub fn home() -> Html {
    let year = Local::now().year();

    html! {
        <>
            <div class="page-background"></div>

            <div class="container">
                <section class="hero" id="home">
                    <Reveal kind={RevealKind::Left}>
                        <h1 class="hero-title">
                            {"Repair smart with "}<span class="highlight">{"flito"}</span>
                        </h1>
                    </Reveal>

                    <Reveal kind={RevealKind::Right}>
                        <p class="hero-subtitle">
                            {"Flito saves your time with 4-hour general service and 30-minute repairs \
                              during working hours. Predefined pricing and guaranteed OEM spare parts \
                              ensure transparent, reliable servicing at your doorstep."}
                        </p>
                    </Reveal>

                    <div class="cta-group">
                        <a href="#play-store" class="play-store-badge-link">
                            <img src="/google_play_badge.png" alt="Get it on Google Play" class="play-store-badge" />
                        </a>

                        <button class="btn-outline">
                            <PlayIcon class="play-icon" />
                            {"Watch Demo"}
                        </button>
                    </div>

                    <div class="stats-container">
                        <div class="stat-item">
                            <h3 class="stat-number"><CountUp end={12} suffix="k" /></h3>
                            <p class="stat-label">{"Customers"}</p>
                        </div>
                        <div class="stat-item">
                            <h3 class="stat-number"><CountUp end={20} suffix="k+" /></h3>
                            <p class="stat-label">{"Mechanics"}</p>
                        </div>
                        <div class="stat-item">
                            <h3 class="stat-number"><CountUp end={10} suffix="k" /></h3>
                            <p class="stat-label">{"Brand Dealers"}</p>
                        </div>
                    </div>
                </section>
            </div>

            <section class="why-section" id="why">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Why "}<span class="highlight">{"Flito"}</span>{"?"}</h2>
                        <div class="title-underline"></div>
                    </Reveal>

                    <div class="features-grid">
                        <Reveal class="feature-card">
                            <div class="icon-box"><ClockIcon /></div>
                            <h3>{"4-Hour Service"}</h3>
                            <p>{"Full general service completed rapidly."}</p>
                        </Reveal>

                        <Reveal class="feature-card">
                            <div class="icon-box"><LightningIcon /></div>
                            <h3>{"30-Min Repair"}</h3>
                            <p>{"Quick fixes at your convenience."}</p>
                        </Reveal>

                        <Reveal class="feature-card">
                            <div class="icon-box"><MapPinIcon /></div>
                            <h3>{"At Your Door"}</h3>
                            <p>{"We come to you, wherever you are."}</p>
                        </Reveal>

                        <Reveal class="feature-card">
                            <div class="icon-box"><BillIcon /></div>
                            <h3>{"Fixed Pricing"}</h3>
                            <p>{"No hidden costs or surprises."}</p>
                        </Reveal>

                        <Reveal class="feature-card">
                            <div class="icon-box"><AwardIcon /></div>
                            <h3>{"OEM Parts"}</h3>
                            <p>{"Genuine components guaranteed."}</p>
                        </Reveal>

                        <Reveal class="feature-card">
                            <div class="icon-box"><UsersIcon /></div>
                            <h3>{"Expert Pros"}</h3>
                            <p>{"Highly skilled bike mechanics."}</p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="about-section" id="about">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"About "}<span class="highlight">{"Flito"}</span></h2>
                    </Reveal>

                    <p class="about-description">
                        {"Flito is a modern platform dedicated to bringing professional bike maintenance \
                          directly to you. Our mission is to simplify bike care through transparency, speed, \
                          and uncompromising quality. We believe your time is valuable, and your ride \
                          deserves the best care possible without the hassle of traditional workshops."}
                    </p>

                    <Reveal class="how-it-works-card">
                        <h2>{"How It Works"}</h2>

                        <div class="steps-container">
                            <div class="step-item">
                                <div class="step-number">{"1"}</div>
                                <h3>{"Book"}</h3>
                                <p>{"Choose your service and schedule a time on our app or website."}</p>
                            </div>

                            <StepArrow />

                            <div class="step-item">
                                <div class="step-number">{"2"}</div>
                                <h3>{"Service"}</h3>
                                <p>{"Our expert mechanic arrives at your doorstep with everything needed."}</p>
                            </div>

                            <StepArrow />

                            <div class="step-item">
                                <div class="step-number">{"3"}</div>
                                <h3>{"Done"}</h3>
                                <p>{"Your bike is ready! Pay securely and get back on the road."}</p>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="promise-section" id="promise">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Our Service "}<span class="highlight">{"Promise"}</span></h2>
                        <p class="section-subtitle">
                            {"We're committed to delivering exceptional service that exceeds your \
                              expectations. Here's our promise to you."}
                        </p>
                    </Reveal>

                    <div class="promise-grid">
                        <Reveal class="promise-card">
                            <div class="promise-icon-box"><PromiseCheckIcon /></div>
                            <div class="promise-content">
                                <h3>{"Lightning Fast Turnaround"}</h3>
                                <p>{"Minimized downtime for your commute."}</p>
                            </div>
                        </Reveal>

                        <Reveal class="promise-card">
                            <div class="promise-icon-box"><PromiseCheckIcon /></div>
                            <div class="promise-content">
                                <h3>{"Transparent Pricing"}</h3>
                                <p>{"No hidden costs, ever. Pay what you see."}</p>
                            </div>
                        </Reveal>

                        <Reveal class="promise-card">
                            <div class="promise-icon-box"><PromiseCheckIcon /></div>
                            <div class="promise-content">
                                <h3>{"Genuine Spare Parts"}</h3>
                                <p>{"Only 100% authentic OEM parts used."}</p>
                            </div>
                        </Reveal>

                        <Reveal class="promise-card">
                            <div class="promise-icon-box"><PromiseCheckIcon /></div>
                            <div class="promise-content">
                                <h3>{"Unmatched Reliability"}</h3>
                                <p>{"Certified mechanics you can trust."}</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="app-preview-section" id="app-preview">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"App "}<span class="highlight">{"Preview"}</span></h2>
                        <p class="section-subtitle">
                            {"Get a glimpse of our seamless and user-friendly mobile experience."}
                        </p>
                    </Reveal>

                    <Reveal kind={RevealKind::Right} class="app-slider-container">
                        <div class="app-slider">
                            {
                                (1..=config::APP_SCREENSHOT_COUNT).map(|num| html! {
                                    <div key={num} class="app-slide">
                                        <img
                                            src={format!("/app-img/ap-{num}.png")}
                                            alt={format!("App Screen {num}")}
                                            class="app-screenshot"
                                        />
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="faq-section" id="faq">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Frequently Asked "}<span class="highlight">{"Questions"}</span></h2>
                        <div class="title-underline"></div>
                    </Reveal>

                    <Reveal class="faq-container">
                        <FaqItem question="What is Flito's 4-Hour Service?">
                            <p>{"Our 4-Hour Service means that once our mechanic starts working on your \
                                 bike, a general service will be completed within 4 hours at your location, \
                                 ensuring minimal downtime."}</p>
                        </FaqItem>
                        <FaqItem question="Are there any hidden costs?">
                            <p>{"No, Flito guarantees 100% transparent pricing. You will be able to see \
                                 exactly what you are paying for via the app before confirming the booking."}</p>
                        </FaqItem>
                        <FaqItem question="Do you use genuine spare parts?">
                            <p>{"Yes, we strictly use authentic OEM (Original Equipment Manufacturer) parts \
                                 directly sourced from certified suppliers."}</p>
                        </FaqItem>
                        <FaqItem question="How do I book a service?">
                            <p>{"You can book a service directly through the Flito app or website by choosing \
                                 your required service, selecting a convenient time slot, and providing your \
                                 location."}</p>
                        </FaqItem>
                    </Reveal>
                </div>
            </section>

            <footer class="footer" id="contact">
                <div class="container footer-container">
                    <div class="footer-brand">
                        <img src="/flito.png" alt="Flito Logo" class="footer-logo" />
                        <p class="footer-desc">
                            {"Your ultimate companion for bike rides. Professional maintenance delivered \
                              directly to you."}
                        </p>
                        <a href="#" class="play-store-badge-link footer-badge" aria-label="Get it on Google Play">
                            <img src="/google_play_badge.png" alt="Get it on Google Play" class="play-store-badge" />
                        </a>
                    </div>

                    <div class="footer-links-group">
                        <div class="footer-col">
                            <h4>{"Company"}</h4>
                            <a href="#why">{"Why Flito?"}</a>
                            <a href="#about">{"About Us"}</a>
                            <a href="#promise">{"Our Promise"}</a>
                        </div>

                        <div class="footer-col">
                            <h4>{"Support"}</h4>
                            <a href="#contact">{"Contact Us"}</a>
                            <a href="#faq">{"FAQ"}</a>
                            <a href="#">{"Terms of Service"}</a>
                        </div>

                        <div class="footer-col">
                            <h4>{"Contact Info"}</h4>
                            <p class="footer-contact-item">
                                <LocationIcon />
                                <span>{config::CONTACT_ADDRESS}</span>
                            </p>
                            <p class="footer-contact-item">
                                <PhoneIcon />
                                <span>{config::CONTACT_PHONE}</span>
                            </p>
                            <p class="footer-contact-item">
                                <MailIcon />
                                <span>{config::CONTACT_EMAIL}</span>
                            </p>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {year} Flito. All rights reserved.")}</p>
                </div>
            </footer>

            <a
                href={config::WHATSAPP_URL}
                class="floating-whatsapp"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat on WhatsApp"
            >
                <WhatsAppIcon />
            </a>

            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    background: #0d0f12;
                    color: #f5f5f5;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    line-height: 1.6;
                    scroll-behavior: smooth;
                }

                .page-background {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                    background:
                        radial-gradient(ellipse at top, rgba(255, 107, 53, 0.08), transparent 60%),
                        radial-gradient(ellipse at bottom right, rgba(255, 107, 53, 0.05), transparent 50%),
                        #0d0f12;
                }

                .container {
                    max-width: 1140px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .highlight {
                    color: #ff6b35;
                }

                /* Scroll-reveal states. Elements start hidden and slide in
                   once the observer grants them the active class. */
                .reveal,
                .reveal-left,
                .reveal-right {
                    opacity: 0;
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .reveal {
                    transform: translateY(30px);
                }

                .reveal-left {
                    transform: translateX(-40px);
                }

                .reveal-right {
                    transform: translateX(40px);
                }

                .reveal.active,
                .reveal-left.active,
                .reveal-right.active {
                    opacity: 1;
                    transform: none;
                }

                .btn-primary {
                    display: inline-block;
                    background: #ff6b35;
                    color: #0d0f12;
                    font-weight: 600;
                    padding: 0.6rem 1.4rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .btn-primary:hover {
                    background: #ff8a5c;
                    transform: translateY(-2px);
                }

                .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: 1px solid rgba(255, 107, 53, 0.6);
                    color: #fff;
                    font-size: 1rem;
                    padding: 0.7rem 1.5rem;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }

                .btn-outline:hover {
                    border-color: #ff6b35;
                    background: rgba(255, 107, 53, 0.08);
                }

                .play-icon {
                    width: 20px;
                    height: 20px;
                }

                /* Hero */
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding-top: 72px;
                    gap: 1.5rem;
                }

                .hero-title {
                    font-size: 3.75rem;
                    line-height: 1.15;
                    font-weight: 800;
                }

                .hero-subtitle {
                    max-width: 640px;
                    color: #b5b5b5;
                    font-size: 1.1rem;
                }

                .cta-group {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }

                .play-store-badge {
                    height: 52px;
                    width: auto;
                    display: block;
                }

                .stats-container {
                    display: flex;
                    gap: 3.5rem;
                    margin-top: 2.5rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }

                .stat-number {
                    font-size: 2.25rem;
                    color: #ff6b35;
                    font-weight: 700;
                }

                .stat-label {
                    color: #b5b5b5;
                    font-size: 0.95rem;
                }

                /* Sections */
                section {
                    padding: 5rem 0;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-header h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                }

                .section-subtitle {
                    color: #b5b5b5;
                    max-width: 560px;
                    margin: 0.75rem auto 0;
                }

                .title-underline {
                    width: 64px;
                    height: 3px;
                    background: #ff6b35;
                    margin: 1rem auto 0;
                    border-radius: 2px;
                }

                /* Why Flito */
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 107, 53, 0.12);
                    border-radius: 14px;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(255, 107, 53, 0.4);
                    transform: translateY(-4px);
                }

                .feature-card h3 {
                    margin: 1rem 0 0.5rem;
                }

                .feature-card p {
                    color: #b5b5b5;
                    font-size: 0.95rem;
                }

                .icon-box {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 12px;
                    background: rgba(255, 107, 53, 0.12);
                    color: #ff6b35;
                }

                /* About / How it works */
                .about-description {
                    max-width: 760px;
                    margin: 0 auto 3rem;
                    text-align: center;
                    color: #b5b5b5;
                    font-size: 1.05rem;
                }

                .how-it-works-card {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 107, 53, 0.12);
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                    text-align: center;
                }

                .how-it-works-card h2 {
                    margin-bottom: 2rem;
                }

                .steps-container {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }

                .step-item {
                    flex: 1;
                    min-width: 200px;
                    max-width: 280px;
                }

                .step-item h3 {
                    margin: 0.75rem 0 0.5rem;
                }

                .step-item p {
                    color: #b5b5b5;
                    font-size: 0.95rem;
                }

                .step-number {
                    width: 44px;
                    height: 44px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #ff6b35;
                    color: #0d0f12;
                    font-weight: 700;
                    font-size: 1.2rem;
                }

                .step-arrow {
                    color: #ff6b35;
                }

                /* Promise */
                .promise-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .promise-card {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 107, 53, 0.12);
                    border-radius: 14px;
                    padding: 1.5rem;
                    transition: border-color 0.3s ease;
                }

                .promise-card:hover {
                    border-color: rgba(255, 107, 53, 0.4);
                }

                .promise-icon-box {
                    color: #ff6b35;
                    flex-shrink: 0;
                }

                .promise-content p {
                    color: #b5b5b5;
                    font-size: 0.95rem;
                }

                /* App preview */
                .app-slider-container {
                    overflow-x: auto;
                    padding-bottom: 1rem;
                }

                .app-slider {
                    display: flex;
                    gap: 1.25rem;
                    width: max-content;
                    margin: 0 auto;
                }

                .app-screenshot {
                    height: 420px;
                    width: auto;
                    border-radius: 18px;
                    border: 1px solid rgba(255, 107, 53, 0.15);
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.4);
                }

                /* FAQ */
                .faq-container {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 107, 53, 0.12);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(255, 107, 53, 0.35);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-question h3 {
                    font-size: 1.05rem;
                    font-weight: 600;
                }

                .faq-icon {
                    font-size: 1.5rem;
                    color: #ff6b35;
                    line-height: 1;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.4s ease, padding 0.4s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #b5b5b5;
                }

                /* Footer */
                .footer {
                    background: rgba(255, 255, 255, 0.02);
                    border-top: 1px solid rgba(255, 107, 53, 0.1);
                    padding: 4rem 0 0;
                }

                .footer-container {
                    display: flex;
                    justify-content: space-between;
                    gap: 3rem;
                    flex-wrap: wrap;
                    padding-bottom: 3rem;
                }

                .footer-brand {
                    max-width: 300px;
                }

                .footer-logo {
                    height: 40px;
                    width: auto;
                    margin-bottom: 1rem;
                }

                .footer-desc {
                    color: #b5b5b5;
                    font-size: 0.95rem;
                    margin-bottom: 1.25rem;
                }

                .footer-badge .play-store-badge {
                    height: 44px;
                }

                .footer-links-group {
                    display: flex;
                    gap: 3.5rem;
                    flex-wrap: wrap;
                }

                .footer-col {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }

                .footer-col h4 {
                    margin-bottom: 0.4rem;
                    color: #ff6b35;
                }

                .footer-col a {
                    color: #b5b5b5;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }

                .footer-col a:hover {
                    color: #fff;
                }

                .footer-contact-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #b5b5b5;
                    font-size: 0.9rem;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    text-align: center;
                    padding: 1.25rem 0;
                    color: #777;
                    font-size: 0.9rem;
                }

                /* Floating WhatsApp */
                .floating-whatsapp {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #25d366;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                    transition: transform 0.3s ease;
                }

                .floating-whatsapp svg {
                    width: 30px;
                    height: 30px;
                }

                .floating-whatsapp:hover {
                    transform: scale(1.08);
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.5rem;
                    }

                    .section-header h2 {
                        font-size: 2rem;
                    }

                    .stats-container {
                        gap: 2rem;
                    }

                    .app-screenshot {
                        height: 320px;
                    }

                    .steps-container {
                        flex-direction: column;
                    }

                    .step-arrow {
                        transform: rotate(90deg);
                    }
                }
                "#}
            </style>
        </>
    }
}
