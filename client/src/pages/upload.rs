//! CSV upload page with file picker and drop zone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accepted files are posted together as one multipart request under the
//! `file` field. Browser file handles are not `Send`, so the selection lives
//! in a local signal.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::net::gateway::FilePart;

/// MIME type browsers report for CSV files.
pub const CSV_MIME: &str = "text/csv";

/// Upload route.
#[component]
pub fn UploadPage() -> impl IntoView {
    let files = RwSignal::new_local(Vec::<FilePart>::new());
    let rejected = RwSignal::new(0_usize);
    let dragging = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let accept = move |list: Option<web_sys::FileList>| {
        let (accepted, skipped) = collect_csv_files(list);
        files.set(accepted);
        rejected.set(skipped);
        message.set(None);
    };

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                accept(input.files());
            }
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        accept(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_upload = move |_| {
        if busy.get() || files.with(Vec::is_empty) {
            return;
        }
        busy.set(true);
        message.set(Some("Uploading...".to_owned()));

        #[cfg(feature = "hydrate")]
        {
            let form = crate::net::gateway::MultipartForm::new(files.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_csv(form).await {
                    Ok(resp) => {
                        log::info!("upload accepted: {}", resp.message);
                        message.set(Some(resp.message));
                        files.set(Vec::new());
                    }
                    Err(e) => {
                        log::error!("upload failed: {e}");
                        message.set(Some(crate::net::api::failure_message("Upload", &e)));
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="page upload-page">
            <h1>"Upload CSV File"</h1>

            <label
                class="dropzone"
                class:dropzone--active=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <input
                    class="dropzone__input"
                    type="file"
                    accept=".csv,text/csv"
                    multiple
                    node_ref=input_ref
                    on:change=on_change
                />
                <p>"Drag 'n' drop some files here, or click to select files"</p>
            </label>

            <Show when=move || { rejected.get() > 0 }>
                <p class="form__error">
                    {move || format!("Skipped {} file(s) that are not CSV.", rejected.get())}
                </p>
            </Show>

            <Show when=move || !files.with(Vec::is_empty)>
                <div class="card upload-page__files">
                    <h2>"Accepted Files"</h2>
                    <ul>
                        {move || {
                            files
                                .get()
                                .into_iter()
                                .map(|part| view! { <li>{part.file_name}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <button class="btn btn--primary" on:click=on_upload disabled=move || busy.get()>
                        "Upload Chosen CSV files"
                    </button>
                </div>
            </Show>

            {move || message.get().map(|text| view! { <p class="form__message">{text}</p> })}
        </div>
    }
}

/// Whether a picked file looks like CSV, by extension or reported MIME type.
pub fn is_csv_file(name: &str, mime: &str) -> bool {
    let by_extension = name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("csv"));
    by_extension || mime.eq_ignore_ascii_case(CSV_MIME)
}

/// Split a browser file list into CSV upload parts and a count of skipped
/// files.
#[cfg(feature = "hydrate")]
fn collect_csv_files(list: Option<web_sys::FileList>) -> (Vec<FilePart>, usize) {
    let Some(list) = list else {
        return (Vec::new(), 0);
    };
    let mut accepted = Vec::new();
    let mut skipped = 0;
    for index in 0..list.length() {
        let Some(file) = list.get(index) else {
            continue;
        };
        if is_csv_file(&file.name(), &file.type_()) {
            accepted.push(FilePart::from_file(crate::net::api::UPLOAD_FIELD, file));
        } else {
            skipped += 1;
        }
    }
    (accepted, skipped)
}
