//! Bridge to the ODK Web Forms widget.
//!
//! The widget is a Vue library, so `index.html` loads it and exposes a small
//! global `OdkWebForms` object:
//!
//! - `mount(host, formXml, fetchFormAttachment, onSubmit)` returns a handle
//! - `unmount(handle)`
//! - `POST_SUBMIT__NEW_INSTANCE`, the directive asking for a fresh instance
//!
//! `onSubmit(payload, callback)` receives `{ status, data: FormData[] }` and a
//! continuation that accepts `{ next }`.

use common::views::submit::{EntryValue, PayloadStatus, SubmissionPayload};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use js_sys::{Array, Function, Object, Promise, Reflect};
use web_sys::{Element, File, FormData, Response, ResponseInit};
use yew::Callback;

const BRIDGE: &str = "OdkWebForms";
const NEW_INSTANCE: &str = "POST_SUBMIT__NEW_INSTANCE";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = OdkWebForms, js_name = mount)]
    fn mount_widget(
        host: &Element,
        form_xml: &str,
        fetch_attachment: &Function,
        on_submit: &Function,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = OdkWebForms, js_name = unmount)]
    fn unmount_widget(handle: &JsValue) -> Result<(), JsValue>;
}

/// One submit event from the widget.
pub struct WidgetSubmission {
    pub payload: SubmissionPayload<File>,
    /// Absent when the widget passed something that is not callable.
    pub continuation: Option<Function>,
}

/// A widget instance rendered into a host element. Dropping it unmounts the
/// widget and releases the callbacks handed to it.
pub struct WebForm {
    handle: JsValue,
    _fetch_attachment: Closure<dyn Fn(JsValue) -> Promise>,
    _on_submit: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl WebForm {
    pub fn mount(
        host: &Element,
        form_xml: &str,
        on_submit: Callback<WidgetSubmission>,
    ) -> Result<Self, String> {
        if !bridge_loaded() {
            return Err("Form renderer is not available".to_string());
        }

        let fetch_attachment =
            Closure::<dyn Fn(JsValue) -> Promise>::new(|_url: JsValue| missing_attachment());
        let on_submit = Closure::<dyn FnMut(JsValue, JsValue)>::new(
            move |payload: JsValue, callback: JsValue| {
                on_submit.emit(WidgetSubmission {
                    payload: read_payload(&payload),
                    continuation: callback.dyn_into::<Function>().ok(),
                });
            },
        );

        let handle = mount_widget(
            host,
            form_xml,
            fetch_attachment.as_ref().unchecked_ref(),
            on_submit.as_ref().unchecked_ref(),
        )
        .map_err(describe)?;

        Ok(Self {
            handle,
            _fetch_attachment: fetch_attachment,
            _on_submit: on_submit,
        })
    }
}

impl Drop for WebForm {
    fn drop(&mut self) {
        if let Err(err) = unmount_widget(&self.handle) {
            gloo_console::warn!(format!("Failed to unmount form renderer: {}", describe(err)));
        }
    }
}

/// Asks the widget for a blank instance after a stored submission.
pub fn request_new_instance(continuation: &Function) {
    let directive = Object::new();
    let next = bridge()
        .and_then(|bridge| Reflect::get(&bridge, &JsValue::from_str(NEW_INSTANCE)).ok())
        .unwrap_or_else(|| JsValue::from_str(NEW_INSTANCE));
    let result = Reflect::set(&directive, &JsValue::from_str("next"), &next)
        .and_then(|_| continuation.call1(&JsValue::NULL, &directive));
    if let Err(err) = result {
        gloo_console::error!(format!("Form renderer rejected reset: {}", describe(err)));
    }
}

fn bridge() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(BRIDGE))
        .ok()
        .filter(|value| value.is_object())
}

fn bridge_loaded() -> bool {
    bridge().is_some()
}

/// Forms here carry no attachments; every lookup resolves to a 404.
fn missing_attachment() -> Promise {
    let init = ResponseInit::new();
    init.set_status(404);
    match Response::new_with_opt_str_and_init(None, &init) {
        Ok(response) => Promise::resolve(&JsValue::from(response)),
        Err(err) => Promise::reject(&err),
    }
}

fn read_payload(raw: &JsValue) -> SubmissionPayload<File> {
    let status = Reflect::get(raw, &JsValue::from_str("status"))
        .ok()
        .and_then(|status| status.as_string())
        .unwrap_or_default();
    let data = Reflect::get(raw, &JsValue::from_str("data"))
        .ok()
        .filter(Array::is_array)
        .map(|data| Array::from(&data).iter().map(|entry| read_entries(&entry)).collect())
        .unwrap_or_default();

    SubmissionPayload {
        status: PayloadStatus::from_widget(&status),
        data,
    }
}

fn read_entries(value: &JsValue) -> Vec<(String, EntryValue<File>)> {
    let Some(form_data) = value.dyn_ref::<FormData>() else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(form_data) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = Array::from(&entry);
            let key = pair.get(0).as_string()?;
            let value = match pair.get(1).dyn_into::<File>() {
                Ok(file) => EntryValue::File(file),
                Err(other) => EntryValue::Text(other.as_string().unwrap_or_default()),
            };
            Some((key, value))
        })
        .collect()
}

fn describe(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
