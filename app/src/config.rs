use std::env;

#[derive(Clone)]
pub struct Config {
    /// Username for the sample user processed at startup
    pub sample_username: String,
    /// Email for the sample user processed at startup
    pub sample_email: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            sample_username: env::var("SAMPLE_USERNAME")
                .unwrap_or_else(|_| "SampleUser".to_string()),
            sample_email: env::var("SAMPLE_EMAIL")
                .unwrap_or_else(|_| "sample@email.com".to_string()),
        }
    }
}
