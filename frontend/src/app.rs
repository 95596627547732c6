use crate::components::forms::create::FormCreateView;
use crate::components::forms::edit::FormEditView;
use crate::components::forms::list::FormListView;
use crate::components::forms::playground::XlsPlayView;
use crate::components::forms::submit::FormSubmitView;
use crate::layout::PageShell;
use crate::routes::Route;
use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <PageShell>
                    <Switch<Route> render={switch} />
                </PageShell>
            </BrowserRouter>
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::FormList} /> },
        Route::FormList => html! { <FormListView /> },
        Route::FormCreate => html! { <FormCreateView /> },
        Route::FormEdit { form_id } => html! { <FormEditView {form_id} /> },
        Route::FormSubmit { form_id } => html! { <FormSubmitView {form_id} /> },
        Route::XlsPlay => html! { <XlsPlayView /> },
        Route::NotFound => html! {
            <section class="page">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::FormList}>{"← Back to forms"}</Link<Route>>
            </section>
        },
    }
}
