use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::components::Link;
use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    (
        "🚀 Advanced Analytics",
        "Harness the power of machine learning for precise, data-driven risk predictions.",
    ),
    (
        "🔒 Secure Platform",
        "Protect your sensitive data with industry-leading, bank-grade security.",
    ),
    (
        "📊 Credit Monitoring",
        "Stay ahead with real-time insights into your credit portfolios.",
    ),
    (
        "⚖ Risk Scoring",
        "Make informed decisions with a comprehensive, AI-powered risk scoring system.",
    ),
];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    body: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <h3>{props.title}</h3>
            <p>{props.body}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    use_title("Features | Credit Risk Assessment".to_string());

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
        <div class="features-page">
            <section class="features-section">
                <div class="features-header">
                    <Link<Route> to={Route::Landing} classes="back-link">
                        {"Back"}
                    </Link<Route>>
                    <h2>{"Powerful Features for Smarter Risk Assessment"}</h2>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, body)| html! {
                        <FeatureCard title={*title} body={*body} />
                    }) }
                </div>
            </section>

            <section class="features-cta">
                <h2>{"Ready to Elevate Your Risk Assessment?"}</h2>
                <p>
                    {"Join top financial institutions leveraging our cutting-edge platform \
                      to predict credit risk with confidence!"}
                </p>
                <Link<Route> to={Route::Assessment} classes="forward-link">
                    <button class="cta-button">{"Get Started"}</button>
                </Link<Route>>
            </section>

            <style>
                {r#"
                .features-section {
                    padding: 2.5rem 1rem;
                    margin: 2rem 0;
                }
                .features-header {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .features-header h2,
                .features-cta h2,
                .feature-card h3 {
                    color: #066BB0;
                }
                .features-header h2 {
                    font-size: 2.25rem;
                    margin: 0;
                }
                .back-link {
                    padding: 0.75rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 0.5rem;
                    text-decoration: none;
                }
                .features-grid {
                    margin: 2rem auto 0;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1.5rem;
                    max-width: 72rem;
                }
                .feature-card {
                    padding: 1.5rem;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .feature-card h3 {
                    font-size: 1.25rem;
                    margin: 0;
                }
                .feature-card p {
                    color: #4b5563;
                    margin-top: 0.5rem;
                }
                .features-cta {
                    background: linear-gradient(to bottom, #bfdbfe, #fff);
                    padding: 2rem 1rem;
                    text-align: center;
                }
                .features-cta h2 {
                    font-size: 1.875rem;
                    margin: 0;
                }
                .features-cta p {
                    font-size: 1.125rem;
                    color: #374151;
                    max-width: 42rem;
                    margin: 0.5rem auto 0;
                }
                .cta-button {
                    margin-top: 1.5rem;
                    padding: 0.75rem 1.5rem;
                    background: #1d4ed8;
                    color: #fff;
                    font-size: 1.125rem;
                    font-family: inherit;
                    border: none;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                @media (max-width: 768px) {
                    .features-grid {
                        grid-template-columns: 1fr;
                    }
                    .features-header {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
