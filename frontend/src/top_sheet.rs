use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: String,
    /// Fired by a click on the backdrop. Owners decide whether to honor it.
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

/// Modal sheet sliding down from the top of the page.
pub struct TopSheet;

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TopSheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = props.on_dismiss.reform(|_: MouseEvent| ());
        html! {
            <>
                <div class="top-sheet-backdrop" onclick={on_backdrop}></div>
                <div class={classes!("top-sheet", "show")} role="dialog" aria-modal="true">
                    <h2 class="top-sheet-title">{ props.title.clone() }</h2>
                    { props.children.clone() }
                </div>
            </>
        }
    }
}
