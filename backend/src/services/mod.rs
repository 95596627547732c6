pub mod api_proxy;
pub mod spa;
