use super::super::{Model, Msg};
use super::demo_gallery::render_demo_gallery;
use super::preview_area::render_preview_area;
use super::utils::{debounce, first_file};
use shared::{ImageKind, ViewFlags};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>, flags: &ViewFlags) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx, flags) }
            { render_preview_area(model, ctx, flags) }
            { render_demo_gallery(model, ctx, flags) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>, flags: &ViewFlags) -> Html {
    let link = ctx.link();
    let inputs_enabled = flags.inputs_enabled;
    let limit_mb = model.client.config().max_upload_bytes / (1024 * 1024);

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");
        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept={ImageKind::accept_list()}
                style="display: none;"
                disabled={!inputs_enabled}
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.is_dragging.then_some("drag-over"),
                    (!inputs_enabled).then_some("disabled")
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop an image here, paste, or click to browse"}</p>
                    <p class="file-types">{ format!("Supported formats: JPG, PNG, WEBP (max {}MB)", limit_mb) }</p>
                </div>
            </div>
        </>
    }
}
