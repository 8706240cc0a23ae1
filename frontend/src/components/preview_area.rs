use super::super::{Model, Msg};
use shared::ViewFlags;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>, flags: &ViewFlags) -> Html {
    let link = ctx.link();

    html! {
        <div id="preview-container">
            { render_selected_image_preview(model, flags) }
            <div class="button-container">
                {
                    if flags.clear_visible {
                        html! {
                            <button
                                id="clear-btn"
                                class="analyze-btn"
                                style="background-color: var(--clear-color);"
                                onclick={link.callback(|e: MouseEvent| {
                                    e.stop_propagation();
                                    Msg::ClearUpload
                                })}
                            >
                                <i class="fa-solid fa-trash"></i>{" Clear"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button
                    id="analyze-btn"
                    class="analyze-btn"
                    onclick={link.callback(|_| Msg::Analyze)}
                    disabled={!flags.analyze_enabled}
                >
                    { render_analyze_button_content(model, flags) }
                </button>
            </div>
        </div>
    }
}

fn render_selected_image_preview(model: &Model, flags: &ViewFlags) -> Html {
    match &model.selected {
        Some(selected) if flags.preview_visible => html! {
            <figure class="image-preview">
                <img id="actual-image-preview"
                    src={selected.preview_url.clone()}
                    alt="Image Preview" />
                <figcaption>
                    { format!("{} ({}, {})",
                        selected.upload.file_name,
                        selected.upload.kind,
                        format_size(selected.upload.size_bytes)) }
                </figcaption>
            </figure>
        },
        _ if model.pending.is_some() => html! {
            <div class="loading-preview">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p style="margin-left: 10px;">{"Loading preview..."}</p>
            </div>
        },
        _ => html! {},
    }
}

fn render_analyze_button_content(model: &Model, flags: &ViewFlags) -> Html {
    if flags.loading_visible {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        let filename = model
            .selected
            .as_ref()
            .map(|selected| selected.upload.file_name.clone())
            .unwrap_or_else(|| "Image".to_string());

        let display_name = if filename.chars().count() > 20 {
            format!("{}...", filename.chars().take(17).collect::<String>())
        } else {
            filename
        };

        html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" Analyze \"{}\"", display_name) }</> }
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
