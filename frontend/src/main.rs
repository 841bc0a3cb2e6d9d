use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod assessment {
    pub mod applicant;
    pub mod flow;
    pub mod prediction;
    pub mod validation;
}
mod components {
    pub mod modal;
}
mod pages {
    pub mod assessment;
    pub mod features;
    pub mod landing;
}

use pages::{
    assessment::Assessment,
    features::Features,
    landing::Landing,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/features")]
    Features,
    #[at("/assessment")]
    Assessment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        },
        Route::Assessment => {
            info!("Rendering Assessment page");
            html! { <Assessment /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
                    <h1 style="color: #066BB0;">{"Page not found"}</h1>
                    <Link<Route> to={Route::Landing}>{"Back to Home"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // `log` records go through console_log, `tracing` events through tracing-wasm
    console_log::init_with_level(Level::Info).expect("error initializing log");
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
