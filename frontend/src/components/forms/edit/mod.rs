//! Edit page: metadata form, optional XLSForm replacement and the delete
//! confirmation sheet.

use common::views::edit::FormEditState;
use yew::prelude::*;

mod dialogs;
mod messages;
mod props;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormEditProps;

pub struct FormEditView {
    state: FormEditState,
    reading_file: bool,
    file_input: NodeRef,
}

impl FormEditView {
    fn new(form_id: &str) -> Self {
        Self {
            state: FormEditState::new(form_id),
            reading_file: false,
            file_input: NodeRef::default(),
        }
    }
}

impl Component for FormEditView {
    type Message = Msg;
    type Properties = FormEditProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::new(&ctx.props().form_id)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().form_id != old_props.form_id {
            self.state.retarget(&ctx.props().form_id);
            self.reading_file = false;
            if let Some(input) = self.file_input.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
