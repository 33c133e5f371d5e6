use common::{PredictionView, PriceChart, SubmissionGate, SubmissionOutcome, run_submission};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::api_client::HttpPredictionApi;
use super::price_chart::PriceChartView;

/// Writes submission results into component state.
#[derive(Clone)]
struct StateView {
    result: UseStateHandle<String>,
    chart: UseStateHandle<Option<PriceChart>>,
}

impl PredictionView for StateView {
    fn show_result(&self, text: &str) {
        self.result.set(text.to_string());
    }

    fn render_chart(&self, chart: &PriceChart) {
        self.chart.set(Some(chart.clone()));
    }
}

#[function_component(Predictor)]
pub fn predictor() -> Html {
    let ticker_ref = use_node_ref();
    let result = use_state(String::new);
    let chart = use_state(|| None::<PriceChart>);
    let is_loading = use_state(|| false);
    let gate = use_memo((), |_| SubmissionGate::new());

    let on_submit = {
        let ticker_ref = ticker_ref.clone();
        let result = result.clone();
        let chart = chart.clone();
        let is_loading = is_loading.clone();
        let gate = gate.clone();

        Callback::from(move |e: SubmitEvent| {
            let started = gate.begin(
                || e.prevent_default(),
                || {
                    ticker_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default()
                },
            );
            let Some((guard, ticker)) = started else {
                return;
            };
            log::info!("Prediction form submitted for ticker: {}", ticker);

            let view = StateView {
                result: result.clone(),
                chart: chart.clone(),
            };
            let is_loading = is_loading.clone();
            is_loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let _guard = guard;
                match run_submission(&HttpPredictionApi, &view, &ticker).await {
                    Ok(SubmissionOutcome::Charted { points, .. }) => {
                        log::debug!("Submission for {} charted {} points", ticker, points);
                    }
                    Ok(SubmissionOutcome::Rejected(error)) => {
                        log::debug!("Submission for {} rejected: {}", ticker, error);
                    }
                    Err(e) => log::error!("Submission for {} failed: {}", ticker, e),
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <form id="prediction-form" onsubmit={on_submit} class="flex gap-2 items-end">
                    <div class="form-control flex-1">
                        <label class="label" for="ticker">
                            <span class="label-text">{"Ticker"}</span>
                        </label>
                        <input
                            ref={ticker_ref}
                            id="ticker"
                            name="ticker"
                            type="text"
                            placeholder="e.g. BTC-USD"
                            class="input input-bordered w-full"
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*is_loading}>
                        if *is_loading {
                            <span class="loading loading-spinner"></span>
                        }
                        {"Predict"}
                    </button>
                </form>
                <div id="result" class="text-lg font-semibold mt-4">{(*result).clone()}</div>
                <PriceChartView chart={(*chart).clone()} />
            </div>
        </div>
    }
}
