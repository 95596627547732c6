//! Create page. Reads the picked XLSForm into memory as soon as it is chosen
//! so submit only has to ship bytes.

use common::api::ApiError;
use common::model::form::Form;
use common::model::payload::Attachment;
use common::views::create::FormCreateState;
use web_sys::File;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::helpers::{read_attachment, show_toast, ToastKind};
use crate::routes::{follow, Route};

mod view;

pub enum Msg {
    SetName(String),
    SetDescription(String),
    FileChosen(Option<File>),
    FileRead(Result<Attachment, String>),
    Submit,
    Created(Result<Form, ApiError>),
    Cancel,
}

#[derive(Default)]
pub struct FormCreateView {
    state: FormCreateState,
    reading_file: bool,
}

impl Component for FormCreateView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => {
                self.state.name = name;
                true
            }
            Msg::SetDescription(description) => {
                self.state.description = description;
                true
            }
            Msg::FileChosen(None) => {
                self.state.select_file(None);
                true
            }
            Msg::FileChosen(Some(file)) => {
                self.reading_file = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::FileRead(read_attachment(file).await));
                });
                true
            }
            Msg::FileRead(result) => {
                self.reading_file = false;
                match result {
                    Ok(attachment) => self.state.select_file(Some(attachment)),
                    Err(message) => {
                        show_toast(&message, ToastKind::Error);
                        self.state.select_file(None);
                    }
                }
                true
            }
            Msg::Submit => {
                if self.reading_file {
                    return false;
                }
                let Some(payload) = self.state.submit() else {
                    return true;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::client().create_form(&payload).await;
                    link.send_message(Msg::Created(result));
                });
                true
            }
            Msg::Created(result) => {
                if let Some(navigation) = self.state.finish(result) {
                    follow(ctx.link().navigator(), navigation);
                }
                true
            }
            Msg::Cancel => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::FormList);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
