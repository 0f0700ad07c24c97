use serde::{Deserialize, Serialize};

/// Sort key for paginated listings. Always ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

/// Page of a listing, numbered from zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
    pub order: PlayerOrder,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
            order: PlayerOrder::default(),
        }
    }

    pub fn with_order(mut self, order: PlayerOrder) -> Self {
        self.order = order;
        self
    }

    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }
}
