/// A zone transfer ready to be written verbatim to `<domain>-<index>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDump {
    pub domain: String,
    pub index: u32,
    pub contents: String,
}

impl ZoneDump {
    pub fn new(domain: impl Into<String>, index: u32, contents: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            index,
            contents: contents.into(),
        }
    }

    pub fn file_name(&self) -> String {
        dump_file_name(&self.domain, self.index)
    }
}

pub fn dump_file_name(domain: &str, index: u32) -> String {
    format!("{}-{}.txt", domain, index)
}
