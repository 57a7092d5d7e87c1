/// Port trait for key-value byte storage, platform-keychain shaped.
///
/// The pipeline itself only writes; `fetch` exists for consumers that
/// restore a persisted credential at startup. `store` is fire-and-forget:
/// an adapter that can fail must log and swallow the failure rather than
/// surface it here.
pub trait SecureStorage: Send + Sync {
    fn store(&self, key: &str, data: &[u8]);

    fn fetch(&self, key: &str) -> Option<Vec<u8>>;
}
