/// An uploaded file as handed over by the (out-of-scope) request layer:
/// a client-supplied name plus the raw bytes.
///
/// The client name is only trusted for its extension; the stored filename is
/// derived by the asset store.
#[derive(Clone, Debug)]
pub struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// The client-supplied filename, verbatim.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The upload's content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The lower-cased extension including the dot (`".jpg"`), or `None`
    /// when the name has no extension.
    pub fn suffix(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }
}
