use yew::prelude::*;

mod components;
pub mod api_client;
pub mod settings;

use components::predictor::Predictor;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="container mx-auto p-6 max-w-4xl">
            <h1 class="text-2xl font-bold mb-6">{"Ticker Price Prediction"}</h1>
            <Predictor />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Ticker Predictor Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
