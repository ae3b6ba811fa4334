//! Home screen state

use shared::order::FlowKind;
use shared::route::{HomeParams, RestaurantParams};

use crate::catalog::{HomeSections, RestaurantDirectory};

#[derive(Debug, Clone)]
pub struct HomeView {
    params: HomeParams,
    directory: RestaurantDirectory,
    search_text: String,
    visible: HomeSections,
}

impl HomeView {
    pub fn new(params: HomeParams, directory: RestaurantDirectory) -> Self {
        let visible = directory.sections().clone();
        Self {
            params,
            directory,
            search_text: String::new(),
            visible,
        }
    }

    pub fn greeting(&self) -> String {
        self.params.greeting()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Re-filter both sections on every keystroke
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.visible = self.directory.search(&self.search_text);
    }

    pub fn sections(&self) -> &HomeSections {
        &self.visible
    }

    /// Route parameters for the restaurant tapped in either section
    pub fn open_restaurant(&self, name: &str, flow: FlowKind) -> Option<RestaurantParams> {
        self.directory
            .find(name)
            .map(|r| RestaurantParams::new(r.name.clone(), flow))
    }
}
