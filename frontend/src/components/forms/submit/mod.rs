//! Submit page. Loads the form definition, renders it with the web forms
//! widget and posts whatever instance XML the widget produces.
//!
//! A changed `form_id` starts a new load right away. Results of superseded
//! loads are dropped by the page state, so a slow response for a form the
//! user already left never replaces the current one.

use common::views::submit::{FormSubmitState, SubmitOutcome};
use common::state::RequestTicket;
use js_sys::Function;
use web_sys::Element;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::read_text;

mod messages;
mod view;
pub mod web_forms;

pub use messages::Msg;
use web_forms::WebForm;

#[derive(Properties, PartialEq, Clone)]
pub struct FormSubmitProps {
    pub form_id: String,
}

struct MountedForm {
    form_id: i64,
    _widget: WebForm,
}

#[derive(Default)]
pub struct FormSubmitView {
    state: FormSubmitState,
    host: NodeRef,
    mounted: Option<MountedForm>,
    widget_error: Option<String>,
    /// Widget continuation held while its submission is in flight, keyed by
    /// the ticket of that submission.
    continuation: Option<(RequestTicket, Function)>,
}

impl FormSubmitView {
    /// Hands out the held continuation only to the submission it belongs to.
    fn take_continuation(&mut self, ticket: RequestTicket) -> Option<Function> {
        match &self.continuation {
            Some((held, _)) if *held == ticket => self.continuation.take().map(|(_, f)| f),
            _ => None,
        }
    }

    fn sync_widget(&mut self, ctx: &Context<Self>) {
        let Some(form) = self.state.form() else {
            self.mounted = None;
            return;
        };
        if self.widget_error.is_some()
            || self.mounted.as_ref().map(|mounted| mounted.form_id) == Some(form.id)
        {
            return;
        }
        let Some(host) = self.host.cast::<Element>() else {
            return;
        };

        self.mounted = None;
        let form_id = form.id;
        let on_submit = ctx.link().callback(Msg::WidgetSubmitted);
        match WebForm::mount(&host, &form.xml_definition, on_submit) {
            Ok(widget) => {
                self.mounted = Some(MountedForm {
                    form_id,
                    _widget: widget,
                });
            }
            Err(message) => {
                gloo_console::error!(format!("Failed to render form {}: {}", form_id, message));
                ctx.link().send_message(Msg::WidgetUnavailable(message));
            }
        }
    }
}

impl Component for FormSubmitView {
    type Message = Msg;
    type Properties = FormSubmitProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
            return;
        }
        self.sync_widget(ctx);
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().form_id != old_props.form_id {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.mounted = None;
                self.widget_error = None;
                self.continuation = None;
                if let Some(ticket) = self.state.load(&ctx.props().form_id) {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::client().get_form(ticket.form_id()).await;
                        link.send_message(Msg::Loaded(ticket, result));
                    });
                }
                true
            }
            Msg::Loaded(ticket, result) => {
                if let Err(err) = &result {
                    gloo_console::error!(format!(
                        "Failed to load form {}: {}",
                        ticket.form_id(),
                        err
                    ));
                }
                self.state.finish_load(ticket, result)
            }
            Msg::WidgetSubmitted(submission) => {
                let file = match self.state.accept_payload(&submission.payload) {
                    Ok(file) => file.clone(),
                    Err(rejection) => {
                        gloo_console::warn!(rejection.to_string());
                        return true;
                    }
                };
                let Some(ticket) = self.state.begin_submit() else {
                    gloo_console::warn!("A submission is already in progress; ignoring this one");
                    return false;
                };
                self.continuation = submission
                    .continuation
                    .map(|continuation| (ticket, continuation));

                let link = ctx.link().clone();
                spawn_local(async move {
                    match read_text(file).await {
                        Ok(xml) => {
                            let result = api::client().submit_form(ticket.form_id(), &xml).await;
                            link.send_message(Msg::Submitted(ticket, result));
                        }
                        Err(message) => link.send_message(Msg::XmlUnreadable(ticket, message)),
                    }
                });
                true
            }
            Msg::WidgetUnavailable(message) => {
                self.widget_error = Some(message);
                true
            }
            Msg::XmlUnreadable(ticket, message) => {
                gloo_console::error!(message.clone());
                self.take_continuation(ticket);
                self.state.fail_submit(ticket, message)
            }
            Msg::Submitted(ticket, result) => {
                if let Err(err) = &result {
                    gloo_console::error!(format!("Submission failed: {}", err));
                }
                let continuation = self.take_continuation(ticket);
                if self.state.finish_submit(ticket, result) == SubmitOutcome::RequestNewInstance {
                    if let Some(continuation) = continuation {
                        web_forms::request_new_instance(&continuation);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
