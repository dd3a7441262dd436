//! Downloading remote images into a local cache file.
//!
//! A fetch runs three parties at once: the download task, a spinner task,
//! and the calling future that coordinates them. The download reports over
//! one of two single-use channels (payload or error); the spinner is driven
//! by a boolean watch channel that the coordinator always flips off on the
//! way out, however it leaves.

mod name;
mod spinner;

use reqwest::StatusCode;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, watch};

use spinner::StopOnDrop;

/// Errors that can occur while fetching a remote image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not find resource (HTTP {status})")]
    NotFound { status: StatusCode },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("fetch task ended without a result")]
    Interrupted,
}

pub struct RemoteFetcher {
    client: reqwest::Client,
    cache_dir: PathBuf,
    spinner: bool,
}

impl RemoteFetcher {
    /// Fetcher saving into `cache_dir`. The spinner is shown only when
    /// stderr is a terminal.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            cache_dir: cache_dir.into(),
            spinner: io::stderr().is_terminal(),
        })
    }

    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Downloads `url` and returns the path of the file holding its body.
    ///
    /// Any non-200 status is reported as [`FetchError::NotFound`]. There is
    /// no timeout and no retry.
    pub async fn fetch(&self, url: &str) -> Result<PathBuf, FetchError> {
        let (control, control_rx) = watch::channel(true);
        let target: Box<dyn Write + Send> = if self.spinner {
            Box::new(io::stderr())
        } else {
            Box::new(io::sink())
        };
        let spinner = spinner::spawn(target, control_rx);

        let result = {
            let _stop = StopOnDrop(control);
            self.acquire(url).await
        };

        // let the spinner clear its line before the caller prints anything
        let _ = spinner.await;
        result
    }

    async fn acquire(&self, url: &str) -> Result<PathBuf, FetchError> {
        let (body_tx, body_rx) = mpsc::channel(1);
        let (err_tx, err_rx) = mpsc::channel(1);

        let client = self.client.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            match download(&client, &url).await {
                Ok(body) => {
                    let _ = body_tx.send(body).await;
                }
                Err(e) => {
                    let _ = err_tx.send(e).await;
                }
            }
        });

        let path = self.cache_dir.join(name::generate());
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .await?;
        log::debug!("caching remote image at {}", path.display());

        let handoff = Handoff {
            body: body_rx,
            error: err_rx,
        };
        handoff.deliver(file, path).await
    }
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        log::debug!("GET {} returned {}", url, status);
        return Err(FetchError::NotFound { status });
    }

    let body = response.bytes().await?;
    log::info!("fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Receiving end of a download.
struct Handoff {
    body: mpsc::Receiver<Vec<u8>>,
    error: mpsc::Receiver<FetchError>,
}

impl Handoff {
    /// Waits for whichever channel speaks first. A payload is written to
    /// `file`, then the error channel is drained: an error still queued
    /// there fails the call, a closed channel means success.
    async fn deliver(mut self, mut file: File, path: PathBuf) -> Result<PathBuf, FetchError> {
        tokio::select! {
            biased;
            Some(body) = self.body.recv() => {
                file.write_all(&body).await?;
                file.flush().await?;
            }
            Some(err) = self.error.recv() => return Err(err),
            else => return Err(FetchError::Interrupted),
        }

        match self.error.recv().await {
            Some(err) => Err(err),
            None => Ok(path),
        }
    }
}
