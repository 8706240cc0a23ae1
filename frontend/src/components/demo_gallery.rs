use super::super::{Model, Msg};
use super::utils::debounce;
use shared::{DemoSample, ViewFlags};
use yew::prelude::*;

pub fn render_demo_gallery(model: &Model, ctx: &Context<Model>, flags: &ViewFlags) -> Html {
    let samples = &model.client.config().demo_samples;
    if samples.is_empty() {
        return html! {};
    }

    html! {
        <div class="demo-section">
            <h3>{"Or try a sample image"}</h3>
            <div class="demo-grid">
                { for samples.iter().map(|sample| render_demo_card(ctx, sample, flags.inputs_enabled)) }
            </div>
        </div>
    }
}

fn render_demo_card(ctx: &Context<Model>, sample: &DemoSample, enabled: bool) -> Html {
    let link = ctx.link().clone();
    let path = sample.path.clone();

    html! {
        <div
            class={classes!("demo-card", (!enabled).then_some("disabled"))}
            key={sample.path.clone()}
            data-image={sample.path.clone()}
            title={format!("Analyze sample: {}", sample.label)}
            onclick={debounce(300, move || link.send_message(Msg::LoadDemo(path.clone())))}
        >
            <img src={sample.path.clone()} alt={sample.label.clone()} />
            <p>{ &sample.label }</p>
        </div>
    }
}
