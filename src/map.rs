//! Location display adapter
//!
//! Wraps a third-party mapping widget behind [`MapWidget`] and owns the
//! display state the detail page renders: coordinate validation, one-time
//! widget initialization, a ready deadline, and marker repositioning when
//! the coordinates change after the widget is up.

use std::time::Duration;

use tokio::time::Instant;
use tracing::warn;

/// How long the widget may take to signal ready before the adapter gives up.
const READY_DEADLINE: Duration = Duration::from_secs(10);
/// Zoom level used when centering on a profile location.
const PROFILE_ZOOM: f64 = 13.0;

/// A parsed, finite coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parse the text coordinates a profile carries through the forms.
    /// Anything that is not a finite number in both positions is rejected.
    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude = latitude.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let longitude = longitude.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self {
            latitude,
            longitude,
        })
    }
}

/// What the surrounding page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// Widget is initializing; show a spinner.
    Loading,
    /// Marker placed, popup open.
    Ready,
    /// Coordinates did not parse; no widget was created.
    InvalidCoordinates,
    /// Widget initialization failed or missed the ready deadline.
    Failed(String),
}

/// The slice of a mapping widget the adapter drives.
///
/// The real binding signals readiness and errors asynchronously; the adapter
/// receives those through [`LocationDisplay::widget_ready`] and
/// [`LocationDisplay::widget_failed`].
pub trait MapWidget {
    /// Create the underlying map centered on `center`.
    fn initialize(&mut self, center: Coordinates, zoom: f64) -> anyhow::Result<()>;

    fn set_center(&mut self, center: Coordinates);

    /// Place the single marker, with `label` in its popup.
    fn place_marker(&mut self, at: Coordinates, label: &str);

    fn move_marker(&mut self, to: Coordinates);

    fn open_popup(&mut self);
}

/// Display state machine for one map component lifetime.
pub struct LocationDisplay<W: MapWidget> {
    widget: W,
    state: DisplayState,
    label: String,
    position: Option<Coordinates>,
    initialized: bool,
    init_started: Option<Instant>,
}

impl<W: MapWidget> LocationDisplay<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            state: DisplayState::Loading,
            label: String::new(),
            position: None,
            initialized: false,
            init_started: None,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn position(&self) -> Option<Coordinates> {
        self.position
    }

    /// Show `label` at the given text coordinates. The first valid call
    /// initializes the widget exactly once; later calls reposition the
    /// existing marker and recenter instead of re-initializing.
    pub fn show(&mut self, latitude: &str, longitude: &str, label: &str) {
        let Some(coords) = Coordinates::parse(latitude, longitude) else {
            self.state = DisplayState::InvalidCoordinates;
            return;
        };
        self.label = label.to_string();
        self.position = Some(coords);

        if self.initialized {
            self.widget.move_marker(coords);
            self.widget.set_center(coords);
            return;
        }

        self.initialized = true;
        self.state = DisplayState::Loading;
        self.init_started = Some(Instant::now());
        if let Err(err) = self.widget.initialize(coords, PROFILE_ZOOM) {
            warn!(error = %err, "Map widget initialization failed");
            self.state = DisplayState::Failed(format!("Unable to initialize map: {err}"));
        }
    }

    /// Widget load callback: place the marker and open its popup.
    pub fn widget_ready(&mut self) {
        if self.state != DisplayState::Loading {
            return;
        }
        if let Some(coords) = self.position {
            self.widget.place_marker(coords, &self.label);
            self.widget.open_popup();
        }
        self.state = DisplayState::Ready;
    }

    /// Widget error callback.
    pub fn widget_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(reason = %reason, "Map widget reported an error");
        self.state = DisplayState::Failed(reason);
    }

    /// Deadline check, driven by the page's render tick. Flips to `Failed`
    /// once the widget has been initializing longer than the deadline.
    pub fn poll_deadline(&mut self) {
        if self.state != DisplayState::Loading {
            return;
        }
        if let Some(started) = self.init_started {
            if started.elapsed() >= READY_DEADLINE {
                self.state =
                    DisplayState::Failed("Map is taking longer than expected to load".to_string());
            }
        }
    }
}
