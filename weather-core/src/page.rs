//! Explicit state of the weather page.
//!
//! The page has a text input, an error indicator, a set of `.info` panels that
//! fade in when new data arrives, and six text fields. All mutation goes
//! through [`Page`]; a front end only needs to draw it.

use std::collections::BTreeSet;

use crate::model::NormalizedWeather;

/// Fade class carried by the error indicator.
pub const FADE_IN: &str = "fade-in";
/// Fade class carried by the info panels.
pub const FADE_IN2: &str = "fade-in2";

/// Number of `.info` panels on the page.
pub const INFO_PANELS: usize = 2;

/// A page element with visibility and a class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub visible: bool,
    classes: BTreeSet<&'static str>,
    /// How many times a transition has been restarted on this element.
    pub replays: u32,
}

impl Element {
    pub fn shown() -> Self {
        Self { visible: true, ..Self::default() }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &'static str) {
        self.classes.insert(class);
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Apply `class` so its transition plays from the start, even if it was
    /// already applied.
    pub fn restart_transition(&mut self, class: &'static str) {
        if self.classes.remove(class) {
            self.replays += 1;
        }
        self.classes.insert(class);
    }
}

/// The six display fields, as literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
    pub condition: String,
    pub location: String,
    pub degrees: String,
    pub feels_like: String,
    pub wind_mph: String,
    pub humidity: String,
}

impl DisplayFields {
    pub fn from_weather(data: &NormalizedWeather) -> Self {
        Self {
            condition: data.condition.clone(),
            location: format!("{}, {}", data.location, data.region),
            degrees: data.current_temp.f.to_string(),
            feels_like: format!("FEELS LIKE: {}", data.feels_like.f),
            wind_mph: format!("WIND: {} MPH", data.wind),
            humidity: format!("HUMIDITY: {}", data.humidity),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Current value of the location text input.
    pub input: String,
    pub error: Element,
    pub info: Vec<Element>,
    pub fields: DisplayFields,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            input: String::new(),
            error: Element::default(),
            info: vec![Element::shown(); INFO_PANELS],
            fields: DisplayFields::default(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the location input as typed; no trimming or validation.
    pub fn capture_input(&self) -> String {
        self.input.clone()
    }

    /// Show the error indicator, replaying its fade if it was already shown.
    pub fn show_error(&mut self) {
        self.error.visible = true;

        if self.error.has_class(FADE_IN) {
            self.error.visible = false;
            self.error.remove_class(FADE_IN2);
            self.error.restart_transition(FADE_IN);
            self.error.visible = true;
        } else {
            self.error.add_class(FADE_IN);
        }
    }

    pub fn hide_error(&mut self) {
        self.error.visible = false;
    }

    pub fn is_error_visible(&self) -> bool {
        self.error.visible
    }

    /// Replay the panel fade and write the display fields.
    pub fn display(&mut self, data: &NormalizedWeather) {
        for panel in &mut self.info {
            panel.restart_transition(FADE_IN2);
        }
        self.fields = DisplayFields::from_weather(data);
    }

    /// Clear the form fields.
    pub fn reset_form(&mut self) {
        self.input.clear();
    }
}
