use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    UrlChanged(String),
    /// User edited the question input.
    QueryChanged(String),
    /// User picked a file to upload, or cleared the selection.
    FileChosen(Option<PathBuf>),
    /// User clicked Scrape.
    ScrapeClicked,
    /// User clicked Upload & Embed.
    UploadClicked,
    /// User clicked Ask.
    AskClicked,
    /// A backend call finished, successfully or not.
    RequestSettled {
        action: crate::Action,
        request_id: crate::RequestId,
        outcome: crate::RequestOutcome,
    },
    /// User acknowledged the current notice.
    NoticeDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
}
