use crate::state::{MatchRecord, SearchError, SearchRequest};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use super::search::search;

pub enum IoCommand {
    Search(SearchRequest),
}

#[derive(Debug)]
pub enum IoResult {
    SearchCompleted(Vec<MatchRecord>),
    SearchFailed(SearchError),
}

/// Runs searches one at a time off the UI thread. Each command produces
/// exactly one result; the UI is asked to repaint once it is available.
pub fn spawn_worker(ctx: eframe::egui::Context) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                IoCommand::Search(request) => {
                    let result = match search(&request) {
                        Ok(results) => {
                            tracing::info!(
                                "Found {} match(es) for '{}' under {}",
                                results.len(),
                                request.term(),
                                request.root_path().display()
                            );
                            IoResult::SearchCompleted(results)
                        }
                        Err(e) => {
                            tracing::warn!("Search failed: {}", e);
                            IoResult::SearchFailed(e)
                        }
                    };
                    if res_tx.send(result).is_err() {
                        break;
                    }
                }
            }
            ctx.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}
