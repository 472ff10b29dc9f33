use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::month::Month;

/// Years and months that have at least one enrolled participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub years: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub months: Vec<String>,
}

impl FilterOptions {
    /// Drop duplicates, sort years ascending and months in calendar order.
    ///
    /// Month values the lookup table does not know keep their relative
    /// order after the known ones.
    pub fn normalized(self) -> Self {
        let years = self
            .years
            .into_iter()
            .unique()
            .sorted_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .collect();
        let months = self
            .months
            .into_iter()
            .unique()
            .sorted_by_key(|m| Month::parse(m).map_or(u8::MAX, Month::number))
            .collect();
        Self { years, months }
    }
}
