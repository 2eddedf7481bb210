pub mod community;
pub mod data;

use super::Blizzard;

/// Diablo III Community and Game Data links.
pub struct Diablo<'a> {
    pub(crate) client: &'a Blizzard,
}

impl<'a> Diablo<'a> {
    pub fn community(&self) -> community::DiabloCommunity<'a> {
        community::DiabloCommunity {
            client: self.client,
        }
    }

    pub fn data(&self) -> data::DiabloData<'a> {
        data::DiabloData {
            client: self.client,
        }
    }
}
