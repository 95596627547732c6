use common::model::form::format_timestamp;
use yew::prelude::*;
use yew_router::prelude::Link;

use super::dialogs::delete::delete_dialog;
use super::messages::Msg;
use super::FormEditView;
use crate::helpers::{input_value, selected_file, textarea_value};
use crate::routes::Route;

pub fn view(component: &FormEditView, ctx: &Context<FormEditView>) -> Html {
    let state = &component.state;

    let body = if state.is_loading() {
        html! { <p class="status">{"Loading form…"}</p> }
    } else if let Some(message) = state.load_error() {
        html! {
            <div class="alert alert-error">
                <p>{ message.to_string() }</p>
                {
                    if state.form_id().is_some() {
                        html! {
                            <button type="button" onclick={ctx.link().callback(|_| Msg::Load)}>
                                {"Try again"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    } else {
        edit_form(component, ctx)
    };

    html! {
        <section class="page">
            <Link<Route> to={Route::FormList} classes="back-link">{"← Back to forms"}</Link<Route>>
            <h1>{"Edit form"}</h1>
            { body }
            { delete_dialog(component, ctx) }
        </section>
    }
}

fn edit_form(component: &FormEditView, ctx: &Context<FormEditView>) -> Html {
    let link = ctx.link();
    let state = &component.state;
    let locked = state.is_saving() || state.is_deleting();

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Save
    });

    html! {
        <>
            {
                if let Some(message) = state.save_error() {
                    html! { <div class="alert alert-error">{ message.to_string() }</div> }
                } else if let Some(message) = state.save_message() {
                    html! { <div class="alert alert-success">{ message }</div> }
                } else {
                    html! {}
                }
            }
            { form_meta(component) }
            <form class="form-card" {onsubmit}>
                <label for="form-name">{"Name"}</label>
                <input
                    id="form-name"
                    type="text"
                    value={state.name.clone()}
                    disabled={locked}
                    oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                />

                <label for="form-description">{"Description"}</label>
                <textarea
                    id="form-description"
                    rows="3"
                    value={state.description.clone()}
                    disabled={locked}
                    oninput={link.callback(|e: InputEvent| Msg::SetDescription(textarea_value(&e)))}
                />

                <label for="form-file">{"Replace XLSForm"}</label>
                <p class="hint">{ state.current_file_label() }</p>
                <input
                    id="form-file"
                    type="file"
                    accept=".xls,.xlsx"
                    ref={component.file_input.clone()}
                    disabled={locked}
                    onchange={link.callback(|e: Event| Msg::FileChosen(selected_file(&e)))}
                />
                {
                    match state.selected_file_name() {
                        Some(name) => html! { <p class="hint">{ format!("Selected: {}", name) }</p> },
                        None => html! {},
                    }
                }

                <div class="form-actions">
                    <button
                        type="submit"
                        class="button button-primary"
                        disabled={locked || component.reading_file}
                    >
                        { state.save_label() }
                    </button>
                    <button
                        type="button"
                        class="button"
                        disabled={locked}
                        onclick={link.callback(|_| Msg::Back)}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        class="button button-danger"
                        disabled={locked}
                        onclick={link.callback(|_| Msg::OpenDelete)}
                    >
                        {"Delete form"}
                    </button>
                </div>
            </form>
        </>
    }
}

fn form_meta(component: &FormEditView) -> Html {
    let Some(form) = component.state.form() else {
        return html! {};
    };
    html! {
        <dl class="form-meta">
            <dt>{"Version"}</dt>
            <dd>{ form.version_text().unwrap_or("—").to_string() }</dd>
            <dt>{"Created"}</dt>
            <dd>{ format_timestamp(&form.created_at) }</dd>
            <dt>{"Updated"}</dt>
            <dd>{ format_timestamp(&form.updated_at) }</dd>
            {
                match form.submissions.as_deref() {
                    Some(submissions) if !submissions.is_empty() => html! {
                        <>
                            <dt>{"Recent submissions"}</dt>
                            <dd>
                                <ul class="submission-list">
                                    { for submissions.iter().map(|submission| html! {
                                        <li key={submission.submission_id}>
                                            { format!(
                                                "#{} · {}",
                                                submission.submission_id,
                                                format_timestamp(&submission.submitted_at)
                                            ) }
                                        </li>
                                    }) }
                                </ul>
                            </dd>
                        </>
                    },
                    _ => html! {},
                }
            }
        </dl>
    }
}
