pub mod cli;
pub mod history;
pub mod models;
pub mod render;
pub mod server;
pub mod view;

use cli::{ Args, Command };
use history::initialize_history_source;
use log::info;
use server::Server;
use std::error::Error;
use tokio::io::{ AsyncReadExt, AsyncWriteExt };

pub use render::render;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    match args.command() {
        Command::Serve => serve(args).await,
        Command::Render { path } => {
            let content = match &path {
                Some(path) =>
                    tokio::fs
                        ::read_to_string(path).await
                        .map_err(|e| format!("Failed to read message file '{}': {}", path, e))?,
                None => {
                    let mut buffer = String::new();
                    tokio::io::stdin().read_to_string(&mut buffer).await?;
                    buffer
                }
            };
            write_stdout(&render(&content)).await
        }
        Command::Conversation { id, page } => {
            let history = initialize_history_source(&args)?;
            let conversation = history.get_conversation(&id).await?;
            info!("Loaded conversation {} with {} messages", id, conversation.messages.len());
            let html = if page {
                view::render_page(&format!("Conversation {}", id), &conversation.messages)
            } else {
                view::render_conversation(&conversation.messages).into_string()
            };
            write_stdout(&html).await
        }
    }
}

async fn serve(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("History Source Type: {}", args.history_type);
    info!("Backend URL: {}", args.backend_url);
    info!("Backend Session: {}", if args.backend_session.is_some() { "set" } else { "not set" });
    info!("History Directory: {}", args.history_dir);
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let history = initialize_history_source(&args)?;
    let server = Server::new(history, args);
    server.run().await
}

async fn write_stdout(html: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(html.as_bytes()).await?;
    if !html.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
