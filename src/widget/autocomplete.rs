use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::services::geocoding_client::geocoding_service::Geocoder;
use crate::types::panel_content::PanelContent;
use crate::types::suggestion::{SelectedLocation, Suggestion};
use crate::widget::host::{AddressForm, MapView, SuggestionPanel};

#[derive(Clone, Debug)]
pub struct AutocompleteConfig {
    pub debounce: Duration,
    pub min_query_len: usize,
    pub max_suggestions: usize,
    pub map_zoom: u8,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce: Duration::from_millis(500),
            min_query_len: 3,
            max_suggestions: 5,
            map_zoom: 15,
        }
    }
}

/// Navigation keys the widget reacts to. Anything else is plain typing and
/// arrives through `input_changed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
}

struct WidgetState {
    content: PanelContent,
    visible: bool,
    active_index: Option<usize>,
    selected: Option<SelectedLocation>,
    map_ready: bool,
    generation: u64,
    debounce: Option<JoinHandle<()>>,
    inflight: Option<CancellationToken>,
}

impl WidgetState {
    fn new() -> Self {
        WidgetState {
            content: PanelContent::Empty,
            visible: false,
            active_index: None,
            selected: None,
            map_ready: false,
            generation: 0,
            debounce: None,
            inflight: None,
        }
    }
}

/// Address autocomplete controller. One instance per rendered form; it owns
/// its own debounce timer, pending request, suggestion list, and highlight
/// cursor, and drives the host collaborators it was constructed with.
///
/// Event methods are synchronous and must be called from within a tokio
/// runtime, since a settled query spawns the debounce/fetch task.
pub struct AddressAutocomplete<G, P, F, M> {
    config: AutocompleteConfig,
    state: Arc<Mutex<WidgetState>>,
    geocoder: Arc<G>,
    panel: Arc<Mutex<P>>,
    form: Arc<Mutex<F>>,
    map: Arc<Mutex<M>>,
}

impl<G, P, F, M> Clone for AddressAutocomplete<G, P, F, M> {
    fn clone(&self) -> Self {
        AddressAutocomplete {
            config: self.config.clone(),
            state: Arc::clone(&self.state),
            geocoder: Arc::clone(&self.geocoder),
            panel: Arc::clone(&self.panel),
            form: Arc::clone(&self.form),
            map: Arc::clone(&self.map),
        }
    }
}

impl<G, P, F, M> AddressAutocomplete<G, P, F, M>
where
    G: Geocoder + 'static,
    P: SuggestionPanel + 'static,
    F: AddressForm + 'static,
    M: MapView + 'static,
{
    pub fn new(
        config: AutocompleteConfig,
        geocoder: Arc<G>,
        panel: Arc<Mutex<P>>,
        form: Arc<Mutex<F>>,
        map: Arc<Mutex<M>>,
    ) -> Self {
        AddressAutocomplete {
            config,
            state: Arc::new(Mutex::new(WidgetState::new())),
            geocoder,
            panel,
            form,
            map,
        }
    }

    /// The address field's value changed. Clears the armed debounce timer,
    /// cancels any in-flight request, and either hides the panel (query too
    /// short) or arms a new timer carrying the latest value.
    pub fn input_changed(&self, value: &str) {
        let query = value.trim().to_string();

        let mut state = self.state.lock().unwrap();
        if let Some(timer) = state.debounce.take() {
            timer.abort();
        }
        if let Some(token) = state.inflight.take() {
            token.cancel();
        }
        if query.is_empty() {
            state.selected = None;
        }

        if query.chars().count() < self.config.min_query_len {
            state.visible = false;
            drop(state);
            self.render();
            return;
        }

        let widget = self.clone();
        let delay = self.config.debounce;
        state.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            widget.fetch_suggestions(query).await;
        }));
    }

    pub fn key_down(&self, key: NavKey) {
        let mut state = self.state.lock().unwrap();
        if !state.visible {
            return;
        }

        match key {
            NavKey::ArrowDown => {
                let count = state.content.result_count();
                if count == 0 {
                    return;
                }
                state.active_index = Some(match state.active_index {
                    Some(index) => (index + 1).min(count - 1),
                    None => 0,
                });
                drop(state);
                self.render();
            }
            NavKey::ArrowUp => {
                state.active_index = match state.active_index {
                    Some(index) if index > 0 => Some(index - 1),
                    _ => None,
                };
                drop(state);
                self.render();
            }
            NavKey::Enter => {
                let index = state.active_index;
                drop(state);
                if let Some(index) = index {
                    self.select_suggestion(index);
                }
            }
        }
    }

    /// Mouse moved over a rendered suggestion row. Keyboard and mouse share
    /// the same highlight cursor.
    pub fn hover_suggestion(&self, index: usize) {
        let mut state = self.state.lock().unwrap();
        if !state.visible || index >= state.content.result_count() {
            return;
        }
        state.active_index = Some(index);
        drop(state);
        self.render();
    }

    /// Commit the suggestion at `index`: populate the form fields, remember
    /// the selection, upsert the map preview, and close the panel. Click and
    /// Enter both land here.
    pub fn select_suggestion(&self, index: usize) {
        let suggestion = {
            let state = self.state.lock().unwrap();
            match &state.content {
                PanelContent::Results(items) => items.get(index).cloned(),
                _ => None,
            }
        };
        let suggestion = match suggestion {
            Some(s) => s,
            None => return,
        };

        {
            let mut form = self.form.lock().unwrap();
            form.set_address_text(&suggestion.display_text);
            form.set_city(suggestion.address.locality().unwrap_or(""));
            form.set_postal_code(suggestion.address.postcode.as_deref().unwrap_or(""));
            form.set_province(suggestion.address.state.as_deref().unwrap_or(""));
            form.set_country(suggestion.address.country.as_deref().unwrap_or(""));
            form.set_coordinates(suggestion.location.latitude, suggestion.location.longitude);
        }

        let first_commit = {
            let mut state = self.state.lock().unwrap();
            state.selected = Some(SelectedLocation {
                location: suggestion.location,
                address: suggestion.address.clone(),
            });
            state.visible = false;
            let first = !state.map_ready;
            state.map_ready = true;
            first
        };

        {
            let mut map = self.map.lock().unwrap();
            if first_commit {
                map.create_view(suggestion.location, self.config.map_zoom);
                map.place_marker(suggestion.location);
            } else {
                map.set_view(suggestion.location, self.config.map_zoom);
                map.move_marker(suggestion.location);
            }
        }

        self.render();
    }

    /// The field regained focus: re-show the panel if the current input is
    /// long enough and a previous query already rendered content.
    pub fn focused(&self) {
        let text = self.form.lock().unwrap().address_text();

        let mut state = self.state.lock().unwrap();
        if text.trim().chars().count() >= self.config.min_query_len
            && state.content != PanelContent::Empty
        {
            state.visible = true;
            drop(state);
            self.render();
        }
    }

    /// Click landed outside the input and the panel: dismiss without commit.
    pub fn outside_click(&self) {
        let mut state = self.state.lock().unwrap();
        state.visible = false;
        drop(state);
        self.render();
    }

    pub fn selected_location(&self) -> Option<SelectedLocation> {
        self.state.lock().unwrap().selected.clone()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.lock().unwrap().active_index
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().visible
    }

    async fn fetch_suggestions(&self, query: String) {
        let token = CancellationToken::new();
        let generation = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.inflight = Some(token.clone());
            state.active_index = None;
            state.content = PanelContent::Loading;
            state.visible = true;
            state.generation
        };
        self.render();

        let result = tokio::select! {
            _ = token.cancelled() => return,
            result = self.geocoder.search(&query, self.config.max_suggestions) => result,
        };

        {
            let mut state = self.state.lock().unwrap();
            // A newer request may have been issued while this response was in
            // transit; only the most recent one may touch the widget.
            if state.generation != generation || token.is_cancelled() {
                return;
            }
            state.inflight = None;
            state.active_index = None;

            match result {
                Ok(places) if !places.is_empty() => {
                    let suggestions = places
                        .into_iter()
                        .take(self.config.max_suggestions)
                        .map(|place| Suggestion {
                            display_text: short_display_name(&place.display_name),
                            location: place.location,
                            address: place.address,
                        })
                        .collect();
                    state.content = PanelContent::Results(suggestions);
                }
                Ok(_) => {
                    state.content = PanelContent::NoResults;
                }
                Err(e) => {
                    error!("Failed to fetch address suggestions: {}", e);
                    state.content = PanelContent::Error;
                }
            }
        }
        self.render();
    }

    fn render(&self) {
        let (content, active_index, visible) = {
            let state = self.state.lock().unwrap();
            (state.content.clone(), state.active_index, state.visible)
        };
        let mut panel = self.panel.lock().unwrap();
        panel.render(&content, active_index);
        panel.set_visible(visible);
    }
}

/// First three comma-separated segments of the geocoder's display name.
fn short_display_name(display_name: &str) -> String {
    display_name
        .split(',')
        .map(str::trim)
        .take(3)
        .collect::<Vec<_>>()
        .join(", ")
}
