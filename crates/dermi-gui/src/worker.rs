use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use dermi_core::client::ProcessClient;
use dermi_core::config::UploadConfig;
use dermi_core::error::DermiError;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("dermi-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Upload { path, config } => {
                handle_upload(&path, config, &tx, &ctx);
            }
            WorkerCommand::Probe { config } => {
                handle_probe(config, &tx, &ctx);
            }
        }
    }
}

fn handle_upload(
    path: &Path,
    config: UploadConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let client = match ProcessClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            send(tx, ctx, WorkerResult::UploadFailed {
                message: format!("Client setup failed: {e}"),
            });
            return;
        }
    };

    send_log(tx, ctx, format!("Uploading {}...", path.display()));
    let start = Instant::now();

    match client.process_file(path) {
        Ok(analysis) => {
            // Decode the returned JPEG here so the UI thread only has to
            // load a texture. A broken payload downgrades to a log line.
            let image = match analysis.image.as_ref().map(|i| i.to_rgba()).transpose() {
                Ok(img) => img,
                Err(e) => {
                    send_log(tx, ctx, format!("Result image could not be decoded: {e}"));
                    None
                }
            };
            let elapsed = start.elapsed();
            send_log(
                tx,
                ctx,
                format!("Analysis complete in {:.1}s", elapsed.as_secs_f32()),
            );
            send(tx, ctx, WorkerResult::UploadComplete {
                analysis,
                image,
                elapsed,
            });
        }
        Err(DermiError::Processing(e)) => {
            send(tx, ctx, WorkerResult::UploadRejected {
                message: format!("Processing failed: {e}"),
            });
        }
        Err(e) => {
            send(tx, ctx, WorkerResult::UploadFailed {
                message: e.to_string(),
            });
        }
    }
}

fn handle_probe(config: UploadConfig, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let client = match ProcessClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            send(tx, ctx, WorkerResult::ProbeComplete {
                healthy: false,
                message: format!("Client setup failed: {e}"),
            });
            return;
        }
    };

    let target = client
        .probe_url()
        .map(|u| u.to_string())
        .unwrap_or_else(|_| client.config().endpoint.clone());

    match client.probe() {
        Ok(()) => send(tx, ctx, WorkerResult::ProbeComplete {
            healthy: true,
            message: format!("Endpoint {target} is healthy"),
        }),
        Err(e) => send(tx, ctx, WorkerResult::ProbeComplete {
            healthy: false,
            message: format!("Endpoint {target} is unreachable: {e}"),
        }),
    }
}
