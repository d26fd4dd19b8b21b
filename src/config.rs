use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub store_path: PathBuf,
    pub static_root: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let store_path =
            std::env::var("STORE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("records.txt"));

        let static_root =
            std::env::var("STATIC_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));

        Self { listen_addr, store_path, static_root }
    }
}
