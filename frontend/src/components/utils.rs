use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::UploadCandidate;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only the first file counts; extra files in a drop or paste are ignored.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn candidate_from(file: &GlooFile) -> UploadCandidate {
    UploadCandidate::new(file.name(), file.raw_mime_type(), file.size())
}

pub fn render_error_message(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(error) = &model.error {
        html! {
            <div class="error-message" role="alert" title={error.to_string()}>
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error.user_message() }</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::DismissError)}
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
