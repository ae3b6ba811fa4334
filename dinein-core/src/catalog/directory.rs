//! Restaurant directory for the home screen

use serde::{Deserialize, Serialize};
use shared::models::Restaurant;

const LISTING_SIZE: usize = 5;
const PLACEHOLDER_IMAGE_BASE: &str = "https://dummyimage.com/300x200/000/fff.png&text=";

/// The two horizontal lists on the home screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSections {
    pub popular: Vec<Restaurant>,
    pub top_picks: Vec<Restaurant>,
}

impl HomeSections {
    pub fn is_empty(&self) -> bool {
        self.popular.is_empty() && self.top_picks.is_empty()
    }
}

/// Restaurant listing supplied to the home screen
#[derive(Debug, Clone, Default)]
pub struct RestaurantDirectory {
    sections: HomeSections,
}

impl RestaurantDirectory {
    pub fn new(popular: Vec<Restaurant>, top_picks: Vec<Restaurant>) -> Self {
        Self {
            sections: HomeSections { popular, top_picks },
        }
    }

    /// Synthesized listing: `Restaurant 1..5` and `Top Pick 1..5`
    pub fn mock() -> Self {
        let make = |label: &str, i: usize| {
            Restaurant::new(
                format!("{label} {i}"),
                format!("{PLACEHOLDER_IMAGE_BASE}{}+{i}", label.replace(' ', "+")),
            )
        };
        Self::new(
            (1..=LISTING_SIZE).map(|i| make("Restaurant", i)).collect(),
            (1..=LISTING_SIZE).map(|i| make("Top Pick", i)).collect(),
        )
    }

    pub fn sections(&self) -> &HomeSections {
        &self.sections
    }

    /// Filter both sections by case-insensitive substring; empty query keeps all
    pub fn search(&self, query: &str) -> HomeSections {
        let query = query.trim();
        let filter = |list: &[Restaurant]| {
            list.iter()
                .filter(|r| r.matches(query))
                .cloned()
                .collect::<Vec<_>>()
        };
        HomeSections {
            popular: filter(&self.sections.popular),
            top_picks: filter(&self.sections.top_picks),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Restaurant> {
        self.sections
            .popular
            .iter()
            .chain(self.sections.top_picks.iter())
            .find(|r| r.name == name)
    }
}
