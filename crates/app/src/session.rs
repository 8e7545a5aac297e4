use dioxus::prelude::*;
use shared_types::{CertificateUploadResponse, FtmDetailContext};

/// Navigation payload shared between the FTM list and detail screens.
///
/// The list screen writes the selected record and mode here before
/// navigating; the detail screen renders from it. Opening the detail
/// route without a selection shows an error panel instead of a record.
#[derive(Clone, Copy)]
pub struct FtmSession {
    pub selected: Signal<Option<FtmDetailContext>>,
}

impl FtmSession {
    pub fn new() -> Self {
        Self {
            selected: Signal::new(None),
        }
    }

    /// Fold a successful upload back into the selected record so the
    /// detail screen reflects the new certificate without a refetch.
    pub fn apply_upload(&mut self, response: &CertificateUploadResponse) {
        fold_upload(&mut *self.selected.write(), response);
    }
}

/// Merge an upload response into the selected record, if any. A missing
/// selection (e.g. the dialog outliving a navigation away) is a no-op.
fn fold_upload(selected: &mut Option<FtmDetailContext>, response: &CertificateUploadResponse) {
    if let Some(ctx) = selected.as_mut() {
        ctx.record.is_certificate_available = true;
        ctx.record.certificate_upload_date_time = Some(response.upload_date_time);
        ctx.record.certificate_expiry_date_time = Some(response.expiry_date_time);
    }
}

/// Access the [`FtmSession`] context.
pub fn use_ftm_session() -> FtmSession {
    use_context::<FtmSession>()
}
