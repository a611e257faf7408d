pub const WELCOME_MESSAGE: &str = "Welcome to the UniAdvisor API!";

/// Plain-text welcome, served as `text/plain`.
pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}
