use crate::routes::Route;
use yew::{html, Children, Component, Context, Html, Properties};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub children: Children,
}

/// Header with the navigation links, then the routed page.
pub struct PageShell;

impl Component for PageShell {
    type Message = ();
    type Properties = PageShellProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageShell
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <header class="app-header">
                    <span class="app-title">{"Forms"}</span>
                    <nav class="app-nav">
                        <Link<Route> to={Route::FormList}>{"Forms"}</Link<Route>>
                        <Link<Route> to={Route::FormCreate}>{"Create form"}</Link<Route>>
                        <Link<Route> to={Route::XlsPlay}>{"XLSPlay"}</Link<Route>>
                    </nav>
                </header>
                <main class="app-main">
                    { for ctx.props().children.iter() }
                </main>
            </div>
        }
    }
}
