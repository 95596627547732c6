use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::messages::Msg;
use super::FormEditView;
use crate::api;
use crate::helpers::{read_attachment, show_toast, ToastKind};
use crate::routes::{follow, Route};

pub fn update(component: &mut FormEditView, ctx: &Context<FormEditView>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            if let Some(ticket) = component.state.begin_load() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::client().get_form(ticket.form_id()).await;
                    link.send_message(Msg::Loaded(ticket, result));
                });
            }
            true
        }
        Msg::Loaded(ticket, result) => component.state.finish_load(ticket, result),
        Msg::SetName(name) => {
            component.state.name = name;
            true
        }
        Msg::SetDescription(description) => {
            component.state.description = description;
            true
        }
        Msg::FileChosen(None) => {
            component.state.select_file(None);
            true
        }
        Msg::FileChosen(Some(file)) => {
            component.reading_file = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::FileRead(read_attachment(file).await));
            });
            true
        }
        Msg::FileRead(result) => {
            component.reading_file = false;
            match result {
                Ok(attachment) => component.state.select_file(Some(attachment)),
                Err(message) => {
                    show_toast(&message, ToastKind::Error);
                    component.state.select_file(None);
                }
            }
            true
        }
        Msg::Save => {
            if component.reading_file {
                return false;
            }
            if let Some((ticket, payload)) = component.state.submit() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::client().update_form(ticket.form_id(), &payload).await;
                    link.send_message(Msg::Saved(ticket, result));
                });
            }
            true
        }
        Msg::Saved(ticket, result) => {
            let resets = component.state.file_input_resets();
            if !component.state.finish_save(ticket, result) {
                return false;
            }
            if component.state.file_input_resets() != resets {
                if let Some(input) = component.file_input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
            true
        }
        Msg::OpenDelete => {
            component.state.request_delete();
            true
        }
        Msg::CancelDelete => {
            component.state.cancel_delete();
            true
        }
        Msg::ConfirmDelete => {
            if let Some(ticket) = component.state.confirm_delete() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::client().delete_form(ticket.form_id()).await;
                    link.send_message(Msg::Deleted(ticket, result));
                });
            }
            true
        }
        Msg::Deleted(ticket, result) => {
            let name = component.state.form().map(|form| form.name.clone());
            if let Some(navigation) = component.state.finish_delete(ticket, result) {
                if let Some(name) = name {
                    show_toast(&format!("Deleted form \"{}\"", name), ToastKind::Info);
                }
                follow(ctx.link().navigator(), navigation);
            }
            true
        }
        Msg::Back => {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::FormList);
            }
            false
        }
    }
}
