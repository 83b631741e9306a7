use clap::{ Parser, Subcommand };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    // --- History Source Args ---
    /// Where conversations are read from (backend, file)
    #[arg(long, env = "HISTORY_TYPE", default_value = "backend")]
    pub history_type: String,

    /// Base URL of the chat backend serving /api/conversations/{id}/messages
    #[arg(long, env = "BACKEND_URL", default_value = "http://127.0.0.1:5000")]
    pub backend_url: String,

    /// Session cookie value sent to the backend (the backend requires a logged-in user).
    #[arg(long, env = "BACKEND_SESSION")]
    pub backend_session: Option<String>,

    /// Timeout in seconds for requests to the backend.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Directory holding exported conversations as <id>.json (history type "file")
    #[arg(long, env = "HISTORY_DIR", default_value = "history")]
    pub history_dir: String,

    // --- Server Args ---
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// Optional path to the TLS certificate file (PEM format) for enabling HTTPS. Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format) for enabling HTTPS. Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    // --- General App Args ---
    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP render service (default)
    Serve,
    /// Render a message file, or stdin when no path is given, to HTML
    Render {
        path: Option<String>,
    },
    /// Fetch a conversation and print it as HTML
    Conversation {
        id: String,
        /// Print a complete HTML document instead of a fragment
        #[arg(long)]
        page: bool,
    },
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
