use tracing::{debug, info, warn};

use crate::{
    client::{DecodeOutcome, DecodeService},
    render::render,
    surface::DisplaySurface,
};

pub const EMPTY_INPUT_MESSAGE: &str = "METARを入力してください。";
pub const TRANSPORT_ERROR_MESSAGE: &str = "通信エラーが発生しました。";
pub const ERROR_PREFIX: &str = "エラー: ";

/// Which of the four outcomes a submission wrote to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    EmptyInput,
    TransportFailed,
    Rejected,
    Rendered,
}

/// Takes raw user input, asks the decode service, and writes exactly one
/// result to the display surface.
///
/// Submissions share no state. If a caller overlaps submissions against the
/// same surface, whichever resolves last wins.
#[derive(Debug)]
pub struct InputController<S> {
    service: S,
}

impl<S: DecodeService> InputController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn submit(&self, input: &str, surface: &mut dyn DisplaySurface) -> Submission {
        let raw = input.trim();
        if raw.is_empty() {
            debug!("empty input, nothing sent");
            surface.set_text(EMPTY_INPUT_MESSAGE);
            return Submission::EmptyInput;
        }

        match self.service.decode(raw).await {
            Ok(DecodeOutcome::Decoded(metar)) => {
                info!(airport = metar.airport.as_deref().unwrap_or_default(), "METAR decoded");
                surface.set_document(&render(&metar));
                Submission::Rendered
            }
            Ok(DecodeOutcome::Rejected(err)) => {
                info!(error = %err.error, "decode service rejected input");
                surface.set_text(&format!("{ERROR_PREFIX}{}", err.error));
                Submission::Rejected
            }
            Err(err) => {
                warn!(error = %err, "decode request failed");
                surface.set_text(TRANSPORT_ERROR_MESSAGE);
                Submission::TransportFailed
            }
        }
    }
}
