use common::api::ApiError;
use common::model::form::{format_timestamp, Form};
use common::views::list::{FormListState, ListDisplay};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api;
use crate::routes::Route;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Form>, ApiError>),
}

#[derive(Default)]
pub struct FormListView {
    state: FormListState,
}

impl Component for FormListView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.state.begin_load();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::client().list_forms().await;
                    link.send_message(Msg::Loaded(result));
                });
                true
            }
            Msg::Loaded(result) => {
                if let Err(err) = &result {
                    gloo_console::error!(format!("Failed to load forms: {}", err));
                }
                self.state.finish_load(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.state.display() {
            ListDisplay::Loading => html! { <p class="status">{"Loading forms…"}</p> },
            ListDisplay::Failed(message) => html! {
                <div class="alert alert-error">
                    <p>{ message.to_string() }</p>
                    <button type="button" onclick={ctx.link().callback(|_| Msg::Load)}>
                        {"Try again"}
                    </button>
                </div>
            },
            ListDisplay::Empty => html! { <p class="status">{"No forms available yet."}</p> },
            ListDisplay::Forms(forms) => forms_table(forms),
        };

        html! {
            <section class="page">
                <div class="page-header">
                    <h1>{"Forms"}</h1>
                    <Link<Route> to={Route::FormCreate} classes="button button-primary">
                        {"Create form"}
                    </Link<Route>>
                </div>
                { body }
            </section>
        }
    }
}

fn forms_table(forms: &[Form]) -> Html {
    html! {
        <table class="forms-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Version"}</th>
                    <th>{"Description"}</th>
                    <th>{"Updated"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for forms.iter().map(form_row) }
            </tbody>
        </table>
    }
}

fn form_row(form: &Form) -> Html {
    let form_id = form.id.to_string();
    html! {
        <tr key={form.id}>
            <td>{ form.name.clone() }</td>
            <td>{ form.version_text().unwrap_or("—").to_string() }</td>
            <td>{ form.description_text().unwrap_or("—").to_string() }</td>
            <td>{ format_timestamp(&form.updated_at) }</td>
            <td class="row-actions">
                <Link<Route> to={Route::FormSubmit { form_id: form_id.clone() }}>{"Submit data"}</Link<Route>>
                <Link<Route> to={Route::FormEdit { form_id }}>{"Edit"}</Link<Route>>
            </td>
        </tr>
    }
}
