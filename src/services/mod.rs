pub mod api_client;
pub mod repository;
pub mod auth_service;
pub mod notifications;

pub use api_client::ApiClient;
pub use repository::{Repository, RestRepository};
pub use auth_service::AuthService;
pub use notifications::{Notifier, ToastNotifier};
