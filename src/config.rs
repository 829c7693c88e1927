const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub port: u16,
}

impl Config {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let mongodb_uri =
            dotenvy::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        let port = dotenvy::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { mongodb_uri, port }
    }

    #[cfg(test)]
    pub fn new_mongodb_uri(mongodb_uri: String) -> Self {
        Self {
            mongodb_uri,
            port: DEFAULT_PORT,
        }
    }
}
