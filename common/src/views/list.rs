use crate::api::ApiError;
use crate::model::form::Form;
use crate::state::AsyncOp;

/// What the list page should show right now.
#[derive(Debug, PartialEq)]
pub enum ListDisplay<'a> {
    Loading,
    /// Message plus a "Try again" control.
    Failed(&'a str),
    /// Explicit "No forms available yet." instead of an empty table.
    Empty,
    Forms(&'a [Form]),
}

#[derive(Debug, Default)]
pub struct FormListState {
    forms: AsyncOp<Vec<Form>>,
}

impl FormListState {
    /// Used both on mount and by the retry control.
    pub fn begin_load(&mut self) {
        self.forms.start();
    }

    pub fn finish_load(&mut self, result: Result<Vec<Form>, ApiError>) {
        self.forms.settle(result);
    }

    pub fn is_loading(&self) -> bool {
        self.forms.is_loading()
    }

    pub fn display(&self) -> ListDisplay<'_> {
        if self.forms.is_idle() || self.forms.is_loading() {
            return ListDisplay::Loading;
        }
        if let Some(message) = self.forms.error() {
            return ListDisplay::Failed(message);
        }
        match self.forms.value() {
            Some(forms) if !forms.is_empty() => ListDisplay::Forms(forms),
            _ => ListDisplay::Empty,
        }
    }
}
