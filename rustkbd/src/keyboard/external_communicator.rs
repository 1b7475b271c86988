use super::Key;

/// Host side of the keyboard: accepts HID key reports.
pub trait ExternalCommunicator {
    type Error;

    /// Whether the host is enumerated and accepting reports.
    fn is_ready(&self) -> bool;

    /// Replace the held-key report with `keys`.
    fn send_keys(&self, keys: &[Key]) -> Result<(), Self::Error>;

    fn release_all(&self) -> Result<(), Self::Error> {
        self.send_keys(&[])
    }
}
