mod api;
mod components;
mod config;

use api::AnalysisClient;
use components::{handlers, header, results, upload_section, utils};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::{
    AnalysisReport, AnalysisResponse, ClientError, ServiceStatus, Ticket, UploadSession,
    ValidatedUpload,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Models
struct SelectedFile {
    file: GlooFile,
    upload: ValidatedUpload,
    preview_url: String,
}

// Yew msg components
enum Msg {
    // Input
    FileChosen(GlooFile),
    PreviewRead(Result<String, ClientError>),
    LoadDemo(String),
    DemoLoaded(Result<GlooFile, ClientError>),
    ClearUpload,

    // Analysis
    Analyze,
    AnalysisFinished(Ticket, Result<AnalysisResponse, ClientError>),

    // UI states
    ServiceChecked(ServiceStatus),
    DismissError,
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    client: AnalysisClient,
    session: UploadSession,
    pending: Option<(GlooFile, ValidatedUpload)>,
    selected: Option<SelectedFile>,
    preview_reader: Option<FileReader>,
    report: Option<AnalysisReport>,
    error: Option<ClientError>,
    is_dragging: bool,
    service: ServiceStatus,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Rc::new(config::load());
        log::info!("Analysis endpoint: {}", config.predict_url());

        let client = AnalysisClient::new(config);
        client.check_health(ctx.link().callback(Msg::ServiceChecked));

        let mut model = Self {
            client,
            session: UploadSession::new(),
            pending: None,
            selected: None,
            preview_reader: None,
            report: None,
            error: None,
            is_dragging: false,
            service: ServiceStatus::Unknown,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Input
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::PreviewRead(result) => handlers::handle_preview_read(self, result),
            Msg::LoadDemo(path) => handlers::handle_load_demo(self, ctx, path),
            Msg::DemoLoaded(result) => handlers::handle_demo_loaded(self, ctx, result),
            Msg::ClearUpload => handlers::handle_clear_upload(self),

            // Analysis
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(ticket, result) => {
                handlers::handle_analysis_finished(self, ticket, result)
            }

            // UI states
            Msg::ServiceChecked(status) => {
                self.service = status;
                true
            }
            Msg::DismissError => {
                self.error = None;
                true
            }
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let flags = self.session.state().view();

        html! {
            <div class="container">
                { header::render_header(self.service) }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx, &flags) }
                    { utils::render_error_message(self, ctx) }
                    { results::render_results(self, &flags) }
                </main>

                <footer class="app-footer">
                    <p>{"Image Tamper Detection | Error Level Analysis"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
