//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::cell::RefCell;
use std::sync::mpsc::Receiver;

use thedal::config::{DashboardConfig, Layout};
use thedal::core::aggregate::CollaborationKey;
use thedal::core::playback::{PlaybackController, PlayerEvent};
use thedal::core::{
    Catalog, Dimension, DisplayLimits, FilterCommand, FilterState, ImportReport, Playlist,
    ResetScoped, Snapshot, SnapshotCache,
};

/// Panels of the chart area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ChartTab {
    #[default]
    Overview,
    Timeline,
    Collaborations,
    Hierarchy,
}

impl ChartTab {
    pub(crate) const ALL: [ChartTab; 4] = [
        ChartTab::Overview,
        ChartTab::Timeline,
        ChartTab::Collaborations,
        ChartTab::Hierarchy,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ChartTab::Overview => "Overview",
            ChartTab::Timeline => "Timeline",
            ChartTab::Collaborations => "Collaborations",
            ChartTab::Hierarchy => "Hierarchy",
        }
    }
}

/// Chart-local zoom / brush / highlight. Snaps back on global reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ChartView {
    /// Sunburst labels from the root down to the zoomed node.
    pub focus: Vec<String>,
    /// Inclusive year range brushed on the timeline.
    pub brush: Option<(i32, i32)>,
    pub highlighted: Option<CollaborationKey>,
}

/// Everything `main` resolved before the window opened.
#[derive(Debug, Clone)]
pub(crate) struct Boot {
    pub catalog: Catalog,
    pub config: DashboardConfig,
    pub status: String,
}

/// App state
pub(crate) struct Thedal {
    pub status: String,

    // Data
    pub catalog: Catalog,
    pub filters: FilterState,
    pub cache: SnapshotCache,

    // Layout
    pub layout: Layout,
    pub limits: DisplayLimits,
    pub facet_tab: Dimension,
    pub chart_tab: ChartTab,
    pub chart: ResetScoped<ChartView>,

    // Playlist + transport
    pub playlist: Playlist,
    pub shuffle_seed: u64,
    pub volume: f32,
    pub position_ms: u64,
    pub duration_ms: Option<u64>,

    // Playback engine (started lazily on first play)
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<RefCell<Receiver<PlayerEvent>>>,

    // Catalog import
    pub import_input: String,
    pub importing: bool,
}

impl Thedal {
    pub(crate) fn new(boot: Boot) -> Self {
        let filters = FilterState::default();
        let chart = ResetScoped::new(filters.generation());

        let mut playlist = Playlist::default();
        if let Some(seed) = boot.config.shuffle_seed {
            playlist.toggle_shuffle(seed);
        }

        let mut state = Self {
            status: boot.status,

            catalog: boot.catalog,
            filters,
            cache: SnapshotCache::default(),

            layout: boot.config.layout,
            limits: boot.config.limits(),
            facet_tab: Dimension::Year,
            chart_tab: ChartTab::default(),
            chart,

            playlist,
            shuffle_seed: boot.config.shuffle_seed.unwrap_or(0),
            volume: boot.config.volume,
            position_ms: 0,
            duration_ms: None,

            playback: None,
            playback_events: None,

            import_input: boot
                .config
                .catalog
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            importing: false,
        };
        state.refresh();
        state
    }

    /// Recompute the snapshot (if inputs changed) and rebuild the playlist.
    /// Returns true if the current song changed identity.
    pub(crate) fn refresh(&mut self) -> bool {
        let snapshot = self
            .cache
            .get(&self.catalog, self.filters.criteria(), self.limits);
        self.playlist.rebuild(&snapshot.filtered)
    }

    /// The data every panel reads.
    pub(crate) fn snapshot(&self) -> &Snapshot {
        self.cache.last()
    }

    pub(crate) fn chart_view(&self) -> std::borrow::Cow<'_, ChartView> {
        self.chart.view(self.filters.generation())
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Filters (the only path to FilterState)
    Filter(FilterCommand),
    SetFacetTab(Dimension),

    // Chart-local
    SetChartTab(ChartTab),
    FocusSunburst(Vec<String>),
    BrushYear(i32),
    ClearBrush,
    Highlight(Option<CollaborationKey>),

    // Playback
    TickPlayback,
    PlayIndex(usize),
    TogglePlayPause,
    Next,
    Prev,
    ToggleShuffle,
    Retry,
    SetVolume(f32),

    // Catalog
    ImportInputChanged(String),
    ImportPressed,
    ImportFinished(Result<ImportReport, String>),
    UseBuiltinCatalog,
}
