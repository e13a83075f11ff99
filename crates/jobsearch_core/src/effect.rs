#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the query to the backend; the completion must echo `token`.
    StartSearch {
        token: crate::RequestToken,
        query: crate::SearchQuery,
    },
    /// Bring the results section into view.
    ScrollToResults,
    /// Open a job posting in a new browsing context.
    OpenLink { url: String },
}
