use yew::prelude::*;

use super::super::messages::Msg;
use super::super::FormEditView;
use crate::top_sheet::TopSheet;

/// Confirmation sheet. Both buttons are disabled while the request runs and
/// a failure is shown inside the sheet so the user can retry.
pub fn delete_dialog(component: &FormEditView, ctx: &Context<FormEditView>) -> Html {
    let link = ctx.link();
    let state = &component.state;
    let deleting = state.is_deleting();

    html! {
        <TopSheet
            open={state.is_delete_open()}
            title={"Delete form".to_string()}
            on_dismiss={link.callback(|_| Msg::CancelDelete)}
        >
            <p>{ state.delete_prompt().unwrap_or_default() }</p>
            {
                match state.delete_error() {
                    Some(message) => html! { <div class="alert alert-error">{ message.to_string() }</div> },
                    None => html! {},
                }
            }
            <div class="form-actions">
                <button
                    type="button"
                    class="button button-danger"
                    disabled={deleting}
                    onclick={link.callback(|_| Msg::ConfirmDelete)}
                >
                    { state.delete_label() }
                </button>
                <button
                    type="button"
                    class="button"
                    disabled={deleting}
                    onclick={link.callback(|_| Msg::CancelDelete)}
                >
                    {"Cancel"}
                </button>
            </div>
        </TopSheet>
    }
}
