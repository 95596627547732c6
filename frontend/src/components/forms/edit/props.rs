use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormEditProps {
    /// Raw `:form_id` route segment. Parsed by the page state, which reports
    /// a non-numeric value as an invalid identifier.
    pub form_id: String,
}
