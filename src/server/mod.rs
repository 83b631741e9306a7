pub mod api;

use crate::cli::Args;
use crate::history::HistorySource;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    history: Arc<dyn HistorySource>,
    args: Args,
}

impl Server {
    pub fn new(history: Arc<dyn HistorySource>, args: Args) -> Self {
        Self { history, args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(&self.args, self.history.clone()).await
    }
}
