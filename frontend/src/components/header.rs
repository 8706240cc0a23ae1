use shared::ServiceStatus;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(service: ServiceStatus) -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-magnifying-glass-chart"></i> {" Image Tamper Detection"}</h1>
            <p class="subtitle">{"Upload a photo to check it for signs of manipulation using Error Level Analysis"}</p>
            <span class={classes!("service-status", service.css_class())}>{ service.label() }</span>
        </header>
    }
}
