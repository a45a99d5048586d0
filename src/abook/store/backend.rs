use crate::error::Result;

/// Raw byte storage for the serialized contact list.
///
/// This trait handles where the bytes live (filesystem vs memory), while
/// [`super::ContactStore`] owns what they mean.
pub trait StorageBackend {
    /// Load the serialized book. Returns `Ok(None)` when nothing has been
    /// saved yet; that is not an error.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the serialized book.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}
