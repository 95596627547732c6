use yew::prelude::*;

use super::{FormCreateView, Msg};
use crate::helpers::{input_value, selected_file, textarea_value};

pub fn view(component: &FormCreateView, ctx: &Context<FormCreateView>) -> Html {
    let link = ctx.link();
    let state = &component.state;
    let busy = state.is_locked() || component.reading_file;

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <section class="page">
            <h1>{"Create a new form"}</h1>
            {
                if let Some(message) = state.error() {
                    html! { <div class="alert alert-error">{ message.to_string() }</div> }
                } else if let Some(message) = state.success_message() {
                    html! { <div class="alert alert-success">{ message }</div> }
                } else {
                    html! {}
                }
            }
            <form class="form-card" {onsubmit}>
                <label for="form-name">{"Name"}</label>
                <input
                    id="form-name"
                    type="text"
                    value={state.name.clone()}
                    disabled={state.is_locked()}
                    oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                />

                <label for="form-description">{"Description"}</label>
                <textarea
                    id="form-description"
                    rows="3"
                    value={state.description.clone()}
                    disabled={state.is_locked()}
                    oninput={link.callback(|e: InputEvent| Msg::SetDescription(textarea_value(&e)))}
                />

                <label for="form-file">{"XLSForm file"}</label>
                <input
                    id="form-file"
                    type="file"
                    accept=".xls,.xlsx"
                    disabled={state.is_locked()}
                    onchange={link.callback(|e: Event| Msg::FileChosen(selected_file(&e)))}
                />
                {
                    match state.selected_file_name() {
                        Some(name) => html! { <p class="hint">{ format!("Selected: {}", name) }</p> },
                        None => html! {},
                    }
                }

                <div class="form-actions">
                    <button type="submit" class="button button-primary" disabled={busy}>
                        { state.submit_label() }
                    </button>
                    <button
                        type="button"
                        class="button"
                        disabled={state.is_submitting()}
                        onclick={link.callback(|_| Msg::Cancel)}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </section>
    }
}
