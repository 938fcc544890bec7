//! Image submission form.
//!
//! Binds a [`SubmissionWorkflow`] to Leptos signals: the workflow owns the
//! form state and every change is mirrored into a [`FormSnapshot`] signal.

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::*;
use mosquito_core::{FormSnapshot, SubmissionSuccess, SubmissionWorkflow};
use web_sys::{Event, HtmlInputElement};

use crate::components::ImagePreview;
use crate::services::{read_data_uri, BrowserClient};
use crate::types::{BrowserFile, Session};

type Workflow = SubmissionWorkflow<BrowserClient>;

#[component]
pub fn SubmissionSection(
    /// Called after the server accepts a submission.
    #[prop(into)]
    on_submitted: Callback<SubmissionSuccess>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let workflow = Rc::new(Workflow::new(BrowserClient::default()));

    let (snapshot, set_snapshot) = create_signal(workflow.snapshot());
    workflow.subscribe(Box::new(move |s: &FormSnapshot| set_snapshot.set(s.clone())));

    let (username, set_username) =
        create_signal(session.username.get_untracked().unwrap_or_default());
    let file_input = create_node_ref::<Input>();

    let on_file_change = {
        let workflow = workflow.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            match workflow.select_file(BrowserFile::new(file)) {
                Ok(()) => spawn_preview(workflow.clone()),
                Err(kind) => {
                    log::warn!("❌ Rejected file: {}", kind);
                    input.set_value("");
                }
            }
        }
    };

    let on_submit = {
        let workflow = workflow.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let workflow = workflow.clone();
            let name = username.get_untracked();

            spawn_local(async move {
                match workflow.submit(&name).await {
                    Ok(success) => {
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        on_submitted.call(success);
                    }
                    Err(failure) => log::warn!("❌ Submission failed: {}", failure),
                }
            });
        }
    };

    let on_username_input = {
        let workflow = workflow.clone();
        move |ev: Event| {
            set_username.set(event_target_value(&ev));
            workflow.clear_error();
        }
    };

    let preview_src = Signal::derive(move || snapshot.with(|s| s.preview_uri.clone()));
    let is_submitting = move || snapshot.with(|s| s.is_submitting);

    view! {
        <form class="upload-section" on:submit=on_submit>
            <h2>"Submit Mosquito Image"</h2>

            <div class="form-group">
                <label for="username">"Hunter name"</label>
                <input
                    type="text"
                    id="username"
                    placeholder="Enter your username"
                    prop:value=move || username.get()
                    on:input=on_username_input
                />
            </div>

            <div class="form-group">
                <label for="image" class="upload-button">
                    {move || snapshot.with(|s| s.file_name.clone())
                        .unwrap_or_else(|| "Choose Image 📸".to_string())}
                </label>
                <input
                    type="file"
                    id="image"
                    accept="image/*"
                    style="display:none"
                    node_ref=file_input
                    disabled=is_submitting
                    on:change=on_file_change
                />
                <div class="upload-hint">"Maximum file size: 5MB. Supported formats: PNG, JPG, JPEG"</div>
            </div>

            <ImagePreview src=preview_src/>

            <Show when=move || snapshot.with(|s| s.error_message.is_some()) fallback=|| view! { }>
                <div class="error-message">
                    {move || snapshot.with(|s| s.error_message.clone()).unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || snapshot.with(|s| s.status_message.is_some()) fallback=|| view! { }>
                <div class="success-message">
                    "✅ " {move || snapshot.with(|s| s.status_message.clone()).unwrap_or_default()}
                </div>
            </Show>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || snapshot.with(|s| s.is_submitting || !s.has_file)
            >
                {move || if is_submitting() { "⏳ Submitting..." } else { "Submit Image" }}
            </button>
        </form>
    }
}

/// Read the current selection into a preview and hand it back to the
/// workflow. Results for a replaced selection are dropped by the workflow.
fn spawn_preview(workflow: Rc<Workflow>) {
    let (Some(id), Some(file)) = (workflow.selection_id(), workflow.selected_file()) else {
        return;
    };

    spawn_local(async move {
        match read_data_uri(&file).await {
            Ok(uri) => {
                workflow.attach_preview(id, uri);
            }
            Err(e) => log::warn!("Could not build preview: {}", e),
        }
    });
}
