use statsync_content::MessageCatalog;
use statsync_core::MessageOracle;

/// Message table backed by a loaded catalog.
#[derive(Clone, Debug, Default)]
pub struct MessageTable {
    catalog: MessageCatalog,
}

impl MessageTable {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl MessageOracle for MessageTable {
    fn get(&self, id: u32) -> Option<&str> {
        self.catalog.get(id)
    }
}
