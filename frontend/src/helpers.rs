//! Small DOM utilities shared by the pages.

use common::model::payload::Attachment;
use gloo_file::futures::{read_as_bytes, read_as_text};
use gloo_file::Blob;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Shows a transient message at the bottom of the page. It removes itself
/// after three seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_attribute("role", "status").ok();
                let html_toast: HtmlElement = toast.unchecked_into();
                let background = match kind {
                    ToastKind::Info => "rgba(0, 0, 0, 0.8)",
                    ToastKind::Error => "rgba(176, 0, 32, 0.9)",
                };
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// First file of a file input's change event, if any.
pub fn selected_file(event: &Event) -> Option<File> {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.files().and_then(|files| files.get(0))
}

pub fn input_value(event: &InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

pub fn textarea_value(event: &InputEvent) -> String {
    let textarea: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
    textarea.value()
}

/// Reads a picked file fully into memory so it can travel in a multipart
/// request.
pub async fn read_attachment(file: File) -> Result<Attachment, String> {
    let file_name = file.name();
    let content_type = file.type_();
    let bytes = read_as_bytes(&Blob::from(file))
        .await
        .map_err(|err| format!("Could not read {}: {}", file_name, err))?;

    Ok(Attachment::new(file_name, bytes).with_content_type(content_type))
}

pub async fn read_text(file: File) -> Result<String, String> {
    read_as_text(&Blob::from(file))
        .await
        .map_err(|err| format!("Could not read submission: {}", err))
}
