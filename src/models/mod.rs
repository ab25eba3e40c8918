mod app_config;
mod oauth;
mod user;

pub use app_config::{AppConfig, AppState, ProviderCredentials};
pub use oauth::{AccessGrant, CallbackParams, FlowBegin, FlowState};
pub use user::{UserData, UserProfile};
