use common::PriceChart;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Id of the chart container; part of the page's DOM contract.
pub const CHART_ELEMENT_ID: &str = "priceChart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct PriceChartViewProps {
    /// Nothing is drawn until the first successful submission.
    #[prop_or_default]
    pub chart: Option<PriceChart>,
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

fn draw(chart: &PriceChart) -> Result<(), JsValue> {
    let data = to_js(&chart.plotly_traces())?;
    let layout = to_js(&chart.plotly_layout())?;
    let config = to_js(&chart.plotly_config())?;
    newPlot(CHART_ELEMENT_ID, data, layout, config);
    Ok(())
}

#[function_component(PriceChartView)]
pub fn price_chart_view(props: &PriceChartViewProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.chart.clone()),
        move |(container_ref, chart)| {
            if let (Some(_), Some(chart)) = (container_ref.cast::<HtmlElement>(), chart) {
                log::debug!("Drawing '{}' with {} points", chart.label, chart.point_count());
                if let Err(e) = draw(chart) {
                    log::error!("Failed to draw price chart: {:?}", e);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} id={CHART_ELEMENT_ID} class="chart-container" style="width:100%; height:400px;"></div>
    }
}
