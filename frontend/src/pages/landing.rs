use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::components::Link;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title("Credit Risk Assessment".to_string());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>{"Credit Risk Assessment"}</h1>
                    <p class="hero-subtitle">
                        {"Revolutionize credit risk assessment with cutting-edge machine learning! \
                          Accurately predict credit card loan defaults and make smarter, faster, \
                          and more confident lending decisions. Unlock the power of AI for risk-free growth."}
                    </p>
                    <Link<Route> to={Route::Features} classes="forward-link">
                        <button class="hero-cta">{"Start Assessment"}</button>
                    </Link<Route>>
                </div>
            </header>
            <style>
                {r#"
                .hero {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-image: url('/assets/white.jpg');
                    background-size: cover;
                    background-position: center;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .hero-content {
                    position: relative;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hero-content h1 {
                    font-size: 3.75rem;
                    color: #fff;
                    margin: 0;
                }
                .hero-subtitle {
                    font-size: 1.125rem;
                    color: #f3f4f6;
                    margin: 0.75rem auto 0;
                    max-width: 48rem;
                }
                .hero-cta {
                    margin-top: 1.75rem;
                    padding: 0.75rem 1.5rem;
                    background: #2563eb;
                    color: #fff;
                    font-size: 1.125rem;
                    font-family: inherit;
                    border: none;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                }
                .hero-cta:hover {
                    background: #1d4ed8;
                }
                @media (max-width: 768px) {
                    .hero-content h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
