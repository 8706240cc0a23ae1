use super::super::{Model, Msg, SelectedFile};
use super::utils::{candidate_from, first_file};
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use shared::{AnalysisReport, AnalysisResponse, ClientError, Ticket};
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// Common entry for the picker, drop zone, paste and demo samples.
pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if model.session.state().is_loading() {
        log::warn!("Ignoring {} while an analysis is running", file.name());
        return false;
    }

    let candidate = candidate_from(&file);
    let upload = match candidate.validate(model.client.config().max_upload_bytes) {
        Ok(upload) => upload,
        Err(e) => {
            log::warn!("Rejected {}: {}", candidate.file_name, e);
            model.error = Some(e);
            return true;
        }
    };

    model.error = None;

    let link = ctx.link().clone();
    let reader = read_as_data_url(&file, move |result| {
        link.send_message(Msg::PreviewRead(
            result.map_err(|e| ClientError::PreviewRead(e.to_string())),
        ));
    });

    // Replacing the reader drops (and aborts) any read still in progress.
    model.preview_reader = Some(reader);
    model.pending = Some((file, upload));
    true
}

pub fn handle_preview_read(model: &mut Model, result: Result<String, ClientError>) -> bool {
    model.preview_reader = None;

    let Some((file, upload)) = model.pending.take() else {
        return false;
    };

    let preview_url = match result {
        Ok(url) => url,
        Err(e) => {
            log::error!("Preview failed for {}: {}", file.name(), e);
            model.error = Some(e);
            return true;
        }
    };

    if let Err(e) = model.session.preview_loaded() {
        log::warn!("Dropping preview of {}: {}", file.name(), e);
        return false;
    }

    model.selected = Some(SelectedFile {
        file,
        upload,
        preview_url,
    });
    true
}

pub fn handle_load_demo(model: &mut Model, ctx: &Context<Model>, path: String) -> bool {
    if model.session.state().is_loading() {
        return false;
    }

    log::info!("Loading sample {}", path);
    model
        .client
        .fetch_sample(path, ctx.link().callback(Msg::DemoLoaded));
    false
}

pub fn handle_demo_loaded(
    model: &mut Model,
    ctx: &Context<Model>,
    result: Result<GlooFile, ClientError>,
) -> bool {
    match result {
        Ok(file) => handle_file_chosen(model, ctx, file),
        Err(e) => {
            log::error!("{}", e);
            model.error = Some(e);
            true
        }
    }
}

pub fn handle_clear_upload(model: &mut Model) -> bool {
    model.session.reset();
    model.preview_reader = None;
    model.pending = None;
    model.selected = None;
    model.report = None;
    model.error = None;
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(selected) = model.selected.as_ref() else {
        return false;
    };

    let ticket = match model.session.begin_analysis() {
        Ok(ticket) => ticket,
        Err(e) => {
            log::warn!("Analyze ignored: {}", e);
            return false;
        }
    };

    model.report = None;
    model.error = None;

    let on_done = ctx
        .link()
        .callback(|(ticket, outcome)| Msg::AnalysisFinished(ticket, outcome));
    model.client.submit(ticket, selected.file.clone(), on_done);
    true
}

pub fn handle_analysis_finished(
    model: &mut Model,
    ticket: Ticket,
    outcome: Result<AnalysisResponse, ClientError>,
) -> bool {
    match outcome {
        Ok(response) => {
            if let Err(e) = model.session.succeed(ticket) {
                log::warn!("Discarding result: {}", e);
                return false;
            }
            log::debug!("API response: {:?}", response);
            let unit = model.client.config().processing_time_unit;
            model.report = Some(AnalysisReport::from_response(&response, unit));
        }
        Err(err) => {
            if let Err(e) = model.session.fail(ticket) {
                log::warn!("Discarding failure ({}): {}", err, e);
                return false;
            }
            log::error!("Analysis failed: {}", err);
            model.error = Some(err);
        }
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list))
    {
        handle_file_chosen(model, ctx, file);
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file) = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list))
    {
        event.prevent_default();
        return handle_file_chosen(model, ctx, file);
    }
    false
}
