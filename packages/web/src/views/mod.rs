mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod logout;
pub use logout::Logout;

/// Build an API client from the build-time backend origin and whatever
/// session is currently stored.
pub(crate) fn make_client() -> api::ApiClient {
    let mut config = api::ApiConfig::default();
    if let Some(session) = api::session::load() {
        config = config.with_token(session.access);
    }
    api::ApiClient::new(config)
}
