/// Live display surface fed by the capture pipeline.
///
/// Called on the listener thread. Implementations must hand the text over to
/// whatever thread owns the surface instead of mutating UI state directly.
pub trait DisplaySink: Send + Sync {
    /// Append DisplayTable-encoded text.
    fn append(&self, text: &str);
}
