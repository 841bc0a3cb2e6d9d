use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::components::Link;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;
use crate::Route;
use crate::config;
use crate::components::modal::Modal;
use crate::assessment::applicant::{ApplicantField, InputKind};
use crate::assessment::flow::{AssessmentAction, AssessmentSession};
use crate::assessment::prediction::{request_prediction, Prediction};

#[derive(Properties, PartialEq)]
struct FieldInputProps {
    field: ApplicantField,
    value: String,
    error: Option<&'static str>,
    on_change: Callback<(ApplicantField, String)>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let field = props.field;
    let spec = field.spec();
    let input_class = classes!("form-input", props.error.is_some().then(|| "field-invalid"));

    let control = match spec.kind {
        InputKind::Number { min, max } => {
            let on_change = props.on_change.clone();
            html! {
                <input
                    id={spec.key}
                    name={spec.key}
                    type="number"
                    min={min.to_string()}
                    max={max.to_string()}
                    class={input_class}
                    value={props.value.clone()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_change.emit((field, input.value()));
                    }}
                />
            }
        }
        InputKind::Choice(options) => {
            let on_change = props.on_change.clone();
            html! {
                <select
                    id={spec.key}
                    name={spec.key}
                    class={input_class}
                    onchange={move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        on_change.emit((field, select.value()));
                    }}
                >
                    { for options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={*value == props.value}>{*label}</option>
                    }) }
                </select>
            }
        }
    };

    html! {
        <div class="form-field">
            <label for={spec.key}>{spec.label}</label>
            { control }
            if let Some(message) = props.error {
                <p class="field-error">{message}</p>
            }
        </div>
    }
}

#[function_component(Assessment)]
pub fn assessment() -> Html {
    use_title("Assessment | Credit Risk Assessment".to_string());
    let session = use_reducer(AssessmentSession::default);

    // Fire the prediction request each time the flow enters Submitting
    {
        let pending = session.stage.pending_request().cloned();
        let dispatcher = session.dispatcher();
        use_effect_with_deps(
            move |pending| {
                if let Some(record) = pending.clone() {
                    spawn_local(async move {
                        let outcome = request_prediction(config::get_prediction_url(), &record).await;
                        match &outcome {
                            Ok(prediction) => tracing::info!(?prediction, "prediction received"),
                            Err(e) => tracing::warn!(error = %e, "prediction request failed"),
                        }
                        dispatcher.dispatch(AssessmentAction::Finish(outcome));
                    });
                }
                || ()
            },
            pending,
        );
    }

    let on_field_change = {
        let dispatcher = session.dispatcher();
        Callback::from(move |(field, value): (ApplicantField, String)| {
            dispatcher.dispatch(AssessmentAction::SetField(field, value));
        })
    };

    let onsubmit = {
        let dispatcher = session.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!("Assessment form submitted");
            dispatcher.dispatch(AssessmentAction::SubmitForm);
        })
    };

    let on_first_name = {
        let dispatcher = session.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(AssessmentAction::SetFirstName(input.value()));
        })
    };

    let on_last_name = {
        let dispatcher = session.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(AssessmentAction::SetLastName(input.value()));
        })
    };

    let on_identity_submit = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(AssessmentAction::SubmitIdentity);
        })
    };

    let on_identity_cancel = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(AssessmentAction::CancelIdentity);
        })
    };

    let on_reset = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(AssessmentAction::Reset);
        })
    };

    let busy = session.stage.is_busy();
    let identity_open = session.stage.shows_identity_modal();
    let banner: Option<&str> = session.banner;
    let form_error = if identity_open {
        session.stage.error_message()
    } else {
        banner.or_else(|| session.stage.error_message())
    };

    html! {
        <div class="assessment-page">
            <div class="assessment-nav">
                <Link<Route> to={Route::Landing} classes="back-link">
                    {"Back to Home"}
                </Link<Route>>
            </div>

            <div class="assessment-card">
                <h1>{"Enter Applicant Information for Credit Risk Assessment"}</h1>

                <form class="assessment-form" {onsubmit}>
                    { for ApplicantField::ALL.iter().map(|field| html! {
                        <FieldInput
                            field={*field}
                            value={session.record.get(*field).to_string()}
                            error={session.errors.message(*field)}
                            on_change={on_field_change.clone()}
                        />
                    }) }
                    <button type="submit" class="primary-button">
                        { if busy { "Loading..." } else { "Predict Credit Risk" } }
                    </button>
                </form>

                if let Some(message) = form_error {
                    <div class="error-message">{message}</div>
                }
            </div>

            if identity_open {
                <Modal>
                    <h2 class="modal-title">{"Credit Risk Analysis"}</h2>
                    <p class="modal-subtitle">{"Please enter your information below"}</p>
                    <div class="identity-fields">
                        <div>
                            <label for="firstName">{"First Name"}</label>
                            <input
                                id="firstName"
                                type="text"
                                class="form-input"
                                placeholder="Enter your first name"
                                value={session.identity.first_name.clone()}
                                oninput={on_first_name}
                                disabled={busy}
                            />
                        </div>
                        <div>
                            <label for="lastName">{"Last Name"}</label>
                            <input
                                id="lastName"
                                type="text"
                                class="form-input"
                                placeholder="Enter your last name"
                                value={session.identity.last_name.clone()}
                                oninput={on_last_name}
                                disabled={busy}
                            />
                        </div>
                    </div>
                    if let Some(message) = session.banner {
                        <div class="error-message">{message}</div>
                    }
                    <div class="modal-actions">
                        <button class="primary-button" onclick={on_identity_submit} disabled={busy}>
                            { if busy { "Submitting..." } else { "Submit" } }
                        </button>
                        <button class="secondary-button" onclick={on_identity_cancel} disabled={busy}>
                            {"Cancel"}
                        </button>
                    </div>
                </Modal>
            }

            if let Some(prediction) = session.stage.prediction() {
                <Modal centered=true>
                    <h2 class="result-kicker">{"Credit Risk Prediction Result"}</h2>
                    <p class="result-heading">
                        {format!("Credit Risk Analysis for {}", session.identity.display_name())}
                    </p>
                    <p>{"Our advanced machine learning model has analyzed the information to predict credit risk."}</p>
                    <div>
                        <span class={classes!("result-badge", prediction_class(prediction))}>
                            {prediction.badge()}
                        </span>
                        <p>{prediction.narrative()}</p>
                    </div>
                    <button class="pill-button" onclick={on_reset}>{"Start New Analysis"}</button>
                </Modal>
            }

            <style>
                {r#"
                .assessment-page {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 1.5rem;
                }
                .assessment-nav {
                    width: 100%;
                    max-width: 42rem;
                    margin-bottom: 1.5rem;
                }
                .back-link {
                    display: inline-block;
                    padding: 0.75rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 0.5rem;
                    text-decoration: none;
                }
                .assessment-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    width: 100%;
                    max-width: 42rem;
                }
                .assessment-card h1 {
                    font-size: 1.875rem;
                    text-align: center;
                    color: #1d4ed8;
                    margin: 0 0 1.5rem;
                }
                .assessment-form {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .form-field label,
                .identity-fields label {
                    display: block;
                    color: #374151;
                    font-weight: 500;
                    margin-bottom: 0.25rem;
                }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font-family: sans-serif;
                }
                .form-input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #1d4ed8;
                }
                .field-invalid {
                    border-color: #ef4444;
                }
                .field-error,
                .error-message {
                    color: #ef4444;
                    margin-top: 0.25rem;
                }
                .error-message {
                    margin-top: 1rem;
                }
                .primary-button {
                    width: 100%;
                    background: #1d4ed8;
                    color: #fff;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .primary-button:hover {
                    background: #1e40af;
                }
                .primary-button:disabled,
                .secondary-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .secondary-button {
                    width: 100%;
                    background: transparent;
                    color: #374151;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .modal-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    text-align: center;
                    margin: 0 0 0.25rem;
                }
                .modal-subtitle {
                    text-align: center;
                    margin: 0 0 1.25rem;
                }
                .identity-fields {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .modal-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .modal-centered {
                    text-align: center;
                }
                .result-kicker {
                    color: #60a5fa;
                    font-size: 0.875rem;
                    margin: 0 0 0.5rem;
                }
                .result-heading {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #000;
                    margin-bottom: 2rem;
                }
                .result-badge {
                    display: inline-block;
                    margin: 1rem 0 1.5rem;
                    padding: 0.25rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 9999px;
                    font-weight: 500;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .result-badge.low-risk {
                    background: #bbf7d0;
                    color: #15803d;
                }
                .result-badge.high-risk {
                    background: #fecaca;
                    color: #ef4444;
                }
                .pill-button {
                    margin-top: 2rem;
                    padding: 0.25rem 1rem;
                    background: transparent;
                    border: 1px solid #e5e7eb;
                    border-radius: 9999px;
                    font-weight: 500;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

fn prediction_class(prediction: Prediction) -> &'static str {
    match prediction {
        Prediction::Approved => "low-risk",
        Prediction::Declined => "high-risk",
    }
}
