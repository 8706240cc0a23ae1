use super::super::Model;
use shared::report::ELA_UNAVAILABLE;
use shared::{AnalysisReport, ElaPreview, ViewFlags};
use yew::prelude::*;

pub fn render_results(model: &Model, flags: &ViewFlags) -> Html {
    html! {
        <div id="results-container" class="results-panel">
            { render_loading_overlay(flags) }
            {
                if flags.placeholder_visible {
                    render_placeholder()
                } else {
                    html! {}
                }
            }
            {
                match &model.report {
                    Some(report) if flags.results_visible => render_report(report),
                    _ => html! {},
                }
            }
        </div>
    }
}

fn render_loading_overlay(flags: &ViewFlags) -> Html {
    html! {
        <div id="loading-overlay" class={classes!("loading-overlay", (!flags.loading_visible).then_some("hidden"))}>
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{"Analyzing image..."}</p>
        </div>
    }
}

fn render_placeholder() -> Html {
    html! {
        <div class="results-placeholder">
            <i class="fa-solid fa-chart-simple"></i>
            <p>{"Upload an image and click Analyze to see results"}</p>
        </div>
    }
}

fn render_report(report: &AnalysisReport) -> Html {
    html! {
        <div id="results-content" class={classes!("results-content", report.verdict.css_class())}>
            <div class="result-header">
                <h2 id="result-status" style={format!("color: {};", report.status_color())}>
                    { &report.status }
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", report.meter_width())}></div>
                    </div>
                    <div id="result-confidence" class="meter-value">{ &report.confidence_text }</div>
                </div>
                <p class="analysis-time">
                    {"Processing time: "}
                    <span id="analysis-time">{ &report.processing_time_text }</span>
                </p>
            </div>
            <div class="detailed-results">
                <h3>{"Error Level Analysis"}</h3>
                <div id="ela-image-container">
                    { render_ela(&report.ela) }
                </div>
                <p id="recommendation-text" class="recommendation">{ report.recommendation() }</p>
            </div>
        </div>
    }
}

fn render_ela(ela: &ElaPreview) -> Html {
    match ela.source() {
        Some(src) => html! { <img src={src.to_string()} alt="ELA Analysis" class="ela-image" /> },
        None => html! { <p>{ ELA_UNAVAILABLE }</p> },
    }
}
