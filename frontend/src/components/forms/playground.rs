//! XLSPlay: paste an XForm definition and see how the widget renders it.
//! Nothing here talks to the API.

use web_sys::Element;
use yew::prelude::*;

use super::submit::web_forms::{WebForm, WidgetSubmission};
use crate::helpers::{show_toast, textarea_value, ToastKind};

const SAMPLE_XFORM: &str = r#"<?xml version="1.0"?>
<h:html xmlns="http://www.w3.org/2002/xforms" xmlns:h="http://www.w3.org/1999/xhtml">
  <h:head>
    <h:title>Playground</h:title>
    <model>
      <instance>
        <data id="playground">
          <name/>
          <meta><instanceID/></meta>
        </data>
      </instance>
      <bind nodeset="/data/name" type="string" required="true()"/>
    </model>
  </h:head>
  <h:body>
    <input ref="/data/name"><label>What is your name?</label></input>
  </h:body>
</h:html>
"#;

pub enum Msg {
    SetXml(String),
    Preview,
    Clear,
    Submitted(WidgetSubmission),
}

pub struct XlsPlayView {
    xml: String,
    host: NodeRef,
    widget: Option<WebForm>,
    pending_preview: bool,
    error: Option<String>,
}

impl Component for XlsPlayView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            xml: SAMPLE_XFORM.to_string(),
            host: NodeRef::default(),
            widget: None,
            pending_preview: false,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !std::mem::take(&mut self.pending_preview) {
            return;
        }
        let Some(host) = self.host.cast::<Element>() else {
            return;
        };
        let on_submit = ctx.link().callback(Msg::Submitted);
        match WebForm::mount(&host, &self.xml, on_submit) {
            Ok(widget) => self.widget = Some(widget),
            Err(message) => {
                gloo_console::error!(format!("Preview failed: {}", message));
                show_toast(&message, ToastKind::Error);
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetXml(xml) => {
                self.xml = xml;
                self.error = None;
                false
            }
            Msg::Preview => {
                self.widget = None;
                if self.xml.trim().is_empty() {
                    self.error = Some("Paste an XForm definition first".to_string());
                } else {
                    self.error = None;
                    self.pending_preview = true;
                }
                true
            }
            Msg::Clear => {
                self.widget = None;
                true
            }
            Msg::Submitted(_) => {
                show_toast("Playground submissions are not stored", ToastKind::Info);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="page playground">
                <h1>{"XLSPlay"}</h1>
                <label for="xform-xml">{"XForm definition"}</label>
                <textarea
                    id="xform-xml"
                    rows="14"
                    spellcheck="false"
                    value={self.xml.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetXml(textarea_value(&e)))}
                />
                {
                    match &self.error {
                        Some(message) => html! { <div class="alert alert-error">{ message.clone() }</div> },
                        None => html! {},
                    }
                }
                <div class="form-actions">
                    <button type="button" class="button button-primary" onclick={link.callback(|_| Msg::Preview)}>
                        {"Preview"}
                    </button>
                    <button type="button" class="button" onclick={link.callback(|_| Msg::Clear)}>
                        {"Clear preview"}
                    </button>
                </div>
                <div class="web-form-host" ref={self.host.clone()}></div>
            </section>
        }
    }
}
