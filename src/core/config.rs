use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    // Validated per request by the chat proxy
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("NFTCONNECT_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let openai_model =
            env::var("NFTCONNECT_LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
        }
    }
}
