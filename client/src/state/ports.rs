//! Port catalog, search filters, and selection.

#[cfg(test)]
#[path = "ports_test.rs"]
mod ports_test;

use marina::{MapBounds, Port, SearchFilters};

pub const FETCH_FAILED: &str = "Failed to fetch ports";

#[derive(Clone, Debug, Default)]
pub struct PortsState {
    pub ports: Vec<Port>,
    /// `ports` narrowed by `search_filters`, in catalog order.
    pub filtered_ports: Vec<Port>,
    pub selected_port: Option<Port>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_filters: SearchFilters,
    pub map_bounds: Option<MapBounds>,
}

impl PortsState {
    pub fn fetch_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replaces both the catalog and the filtered view. Active filters are
    /// not re-applied until the next `set_search_filters`.
    pub fn fetch_fulfilled(&mut self, ports: Vec<Port>) {
        self.loading = false;
        self.filtered_ports.clone_from(&ports);
        self.ports = ports;
    }

    pub fn fetch_rejected(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = Some(message.filter(|m| !m.is_empty()).unwrap_or_else(|| FETCH_FAILED.to_owned()));
    }

    pub fn set_search_filters(&mut self, filters: SearchFilters) {
        self.filtered_ports = marina::filter::apply(&self.ports, &filters);
        self.search_filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.search_filters = SearchFilters::default();
        self.filtered_ports.clone_from(&self.ports);
    }

    pub fn set_selected_port(&mut self, port: Option<Port>) {
        self.selected_port = port;
    }

    pub fn set_map_bounds(&mut self, bounds: MapBounds) {
        self.map_bounds = Some(bounds);
    }

    /// Loaded port by id, if the catalog has been fetched.
    #[must_use]
    pub fn find(&self, port_id: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == port_id)
    }
}
