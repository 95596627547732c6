//! One component per page of the forms manager. Each keeps a `common::views`
//! state machine and only translates DOM events and API results into calls
//! on it.

pub mod create;
pub mod edit;
pub mod list;
pub mod playground;
pub mod submit;
