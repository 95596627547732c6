use common::views::Navigation;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew_router::prelude::*;

/// Client-side routes. The host serves `index.html` for every one of them.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/forms")]
    FormList,
    #[at("/forms/new")]
    FormCreate,
    #[at("/forms/:form_id/edit")]
    FormEdit { form_id: String },
    #[at("/forms/:form_id/submit")]
    FormSubmit { form_id: String },
    #[at("/xlsplay")]
    XlsPlay,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Carries out a navigation decided by one of the page state machines.
pub fn follow(navigator: Option<Navigator>, navigation: Navigation) {
    let Some(navigator) = navigator else {
        gloo_console::warn!("navigation requested outside of a router");
        return;
    };
    match navigation {
        Navigation::FormList => navigator.push(&Route::FormList),
        Navigation::FormListAfter(delay) => spawn_local(async move {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(millis).await;
            navigator.push(&Route::FormList);
        }),
    }
}
