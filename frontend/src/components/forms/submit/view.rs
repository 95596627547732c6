use common::views::parse_form_id;
use yew::prelude::*;
use yew_router::prelude::Link;

use super::{FormSubmitView, Msg};
use crate::routes::Route;

pub fn view(component: &FormSubmitView, ctx: &Context<FormSubmitView>) -> Html {
    let state = &component.state;

    let body = if let Some(message) = state.load_error() {
        let retry = if parse_form_id(&ctx.props().form_id).is_some() {
            html! {
                <button type="button" onclick={ctx.link().callback(|_| Msg::Load)}>
                    {"Try again"}
                </button>
            }
        } else {
            html! {}
        };
        html! {
            <div class="alert alert-error">
                <p>{ message.to_string() }</p>
                { retry }
            </div>
        }
    } else if state.is_loading() {
        html! { <p class="status">{"Loading form definition…"}</p> }
    } else {
        loaded(component)
    };

    html! {
        <section class="page">
            <Link<Route> to={Route::FormList} classes="back-link">{"← Back to forms"}</Link<Route>>
            { body }
        </section>
    }
}

fn loaded(component: &FormSubmitView) -> Html {
    let state = &component.state;
    let Some(form) = state.form() else {
        return html! {};
    };

    html! {
        <>
            <h1>{ state.title().unwrap_or_default() }</h1>
            {
                match form.version_text() {
                    Some(version) => html! { <p class="form-meta-line">{ format!("Version: {}", version) }</p> },
                    None => html! {},
                }
            }
            {
                match form.description_text() {
                    Some(description) => html! {
                        <p class="form-meta-line">{ format!("Description: {}", description) }</p>
                    },
                    None => html! {},
                }
            }

            {
                if let Some(message) = state.busy_message() {
                    html! { <div class="alert alert-info">{ message }</div> }
                } else if let Some(message) = state.submit_error() {
                    html! { <div class="alert alert-error">{ message.to_string() }</div> }
                } else if let Some(message) = state.success_message() {
                    html! { <div class="alert alert-success">{ message }</div> }
                } else {
                    html! {}
                }
            }
            {
                match state.last_submission_label() {
                    Some(label) => html! { <p class="hint">{ label }</p> },
                    None => html! {},
                }
            }
            {
                match &component.widget_error {
                    Some(message) => html! { <div class="alert alert-error">{ message.clone() }</div> },
                    None => html! {},
                }
            }

            <div class="web-form-host" ref={component.host.clone()}></div>
        </>
    }
}
