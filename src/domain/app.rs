//! Application state: view surfaces, per-feed loaders, and the refresh
//! orchestrator.

use chrono::Local;
use serde_json::Value;

use crate::api::client::HostApi;
use crate::api::types::{CpuRecord, DiskRecord, GpuRecord, RamInfo};
use crate::domain::containers::{self, ContainerFragment};
use crate::domain::feed::{Feed, FeedValue};
use crate::domain::section::Section;

/// Placeholder written to the overview slots before a refresh begins.
pub const LOADING: &str = "Loading...";
/// Placeholder for the live-stats surface while its request is in flight.
pub const LOADING_LIVE_STATS: &str = "Loading live stats...";

const CPU_UNAVAILABLE: &str = "CPU data not available or in unexpected format.";
const RAM_UNAVAILABLE: &str = "RAM data not available.";
const DISK_UNAVAILABLE: &str = "Disk data not available.";
const DISK_UNEXPECTED: &str = "Disk data not available or in unexpected format.";
const RAM_DISK_FAILED: &str = "Failed to load RAM/Disk data.";

/// In-memory view state. Every surface is final display text (or structured
/// fragments for containers); the TUI projects these verbatim, which keeps
/// the whole data pipeline testable without a terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surfaces {
    /// Compute summary slot on the overview: holds the CPU summary, which
    /// the GPU loader overwrites whenever GPU records exist.
    pub overview_compute: String,
    pub overview_ram: String,
    pub overview_disk: String,
    pub cpu_detail: String,
    pub gpu_detail: String,
    pub ram_detail: String,
    pub disk_detail: String,
    pub containers: Vec<ContainerFragment>,
    pub live_stats: String,
    /// Local time of the last completed full refresh.
    pub timestamp: String,
}

/// Application state holding the transport, navigation, and all surfaces.
pub struct App {
    api: Box<dyn HostApi>,
    /// Currently visible section; exactly one by construction.
    pub active_section: Section,
    pub surfaces: Surfaces,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: Box<dyn HostApi>) -> Self {
        Self {
            api,
            active_section: Section::Overview,
            surfaces: Surfaces::default(),
            should_quit: false,
        }
    }

    /// Refresh every feed in declared order. Strictly sequential: each
    /// loader completes before the next starts, which is what makes the
    /// GPU-over-CPU overview overwrite deterministic regardless of
    /// response latency.
    pub async fn refresh_all(&mut self) {
        self.surfaces.overview_compute = LOADING.to_string();
        self.surfaces.overview_ram = LOADING.to_string();
        self.surfaces.overview_disk = LOADING.to_string();

        for feed in Feed::ORDER {
            self.load_feed(feed).await;
        }

        self.surfaces.timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    }

    /// Load one feed. Failures never cross this boundary; they surface as
    /// readable text on the feed's own surfaces.
    pub async fn load_feed(&mut self, feed: Feed) {
        match feed {
            Feed::Cpu => self.load_cpu().await,
            Feed::Gpu => self.load_gpu().await,
            Feed::RamDisk => self.load_ram_disk().await,
            Feed::Containers => self.load_containers().await,
            Feed::LiveStats => self.load_live_stats().await,
        }
    }

    /// Switch the visible section. Visiting Live-Stats re-fetches that
    /// feed; no other navigation has side effects beyond visibility.
    pub async fn select_section(&mut self, section: Section) {
        self.active_section = section;
        if let Some(feed) = section.refresh_on_visit() {
            self.load_feed(feed).await;
        }
    }

    async fn load_cpu(&mut self) {
        let feed = FeedValue::classify(self.api.fetch_structured(Feed::Cpu.endpoint()).await);
        self.surfaces.cpu_detail = feed.display_text();

        self.surfaces.overview_compute = match &feed {
            FeedValue::Structured(value) => {
                // An array is summarized by its first record only.
                let record = match value {
                    Value::Array(items) => items.first(),
                    other => Some(other),
                };
                record
                    .and_then(|r| serde_json::from_value::<CpuRecord>(r.clone()).ok())
                    .map(|cpu| cpu.summary())
                    .unwrap_or_else(|| CPU_UNAVAILABLE.to_string())
            }
            FeedValue::Error(envelope) => format!("Error: {}", envelope.error),
            _ => CPU_UNAVAILABLE.to_string(),
        };
    }

    async fn load_gpu(&mut self) {
        let feed = FeedValue::classify(self.api.fetch_structured(Feed::Gpu.endpoint()).await);
        self.surfaces.gpu_detail = feed.display_text();

        if let FeedValue::Structured(Value::Array(items)) = &feed {
            let lines: Vec<String> = items
                .iter()
                .filter_map(|item| serde_json::from_value::<GpuRecord>(item.clone()).ok())
                .map(|gpu| gpu.summary_line())
                .collect();
            if !lines.is_empty() {
                // GPU takes visual priority in the compute slot.
                self.surfaces.overview_compute = lines.join("\n");
            }
        }
        // On a GPU error or an empty feed the compute slot keeps whatever
        // the CPU loader wrote.
    }

    async fn load_ram_disk(&mut self) {
        let value = self.api.fetch_structured(Feed::RamDisk.endpoint()).await;

        let value = match FeedValue::classify(value) {
            FeedValue::Error(envelope) => {
                // A feed-level failure paints all four surfaces alike.
                let text = if envelope.error.is_empty() {
                    RAM_DISK_FAILED.to_string()
                } else {
                    envelope.error
                };
                self.surfaces.ram_detail = text.clone();
                self.surfaces.disk_detail = text.clone();
                self.surfaces.overview_ram = text.clone();
                self.surfaces.overview_disk = text;
                return;
            }
            FeedValue::Structured(value) => value,
            _ => Value::Null,
        };

        let ram = FeedValue::classify(value.get("ram").cloned().unwrap_or(Value::Null));
        self.surfaces.ram_detail = ram.display_text();
        self.surfaces.overview_ram = match &ram {
            FeedValue::Structured(v) => serde_json::from_value::<RamInfo>(v.clone())
                .map(|info| info.summary())
                .unwrap_or_else(|_| RAM_UNAVAILABLE.to_string()),
            FeedValue::Error(envelope) => envelope.error.clone(),
            _ => RAM_UNAVAILABLE.to_string(),
        };

        let disk = FeedValue::classify(value.get("disk").cloned().unwrap_or(Value::Null));
        self.surfaces.disk_detail = disk.display_text();
        self.surfaces.overview_disk = match &disk {
            FeedValue::Structured(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    serde_json::from_value::<DiskRecord>(item.clone())
                        .map(|d| d.summary_line())
                        .unwrap_or_else(|_| "N/A".to_string())
                })
                .collect::<Vec<_>>()
                .join("\n"),
            FeedValue::Error(envelope) => envelope.error.clone(),
            FeedValue::Empty => DISK_UNAVAILABLE.to_string(),
            _ => DISK_UNEXPECTED.to_string(),
        };
    }

    async fn load_containers(&mut self) {
        let feed =
            FeedValue::classify(self.api.fetch_structured(Feed::Containers.endpoint()).await);
        self.surfaces.containers = containers::build_fragments(&feed);
    }

    async fn load_live_stats(&mut self) {
        // Immediate feedback for the naturally slower endpoint; replaced
        // verbatim by the response (or error) text.
        self.surfaces.live_stats = LOADING_LIVE_STATS.to_string();
        self.surfaces.live_stats = self.api.fetch_text(Feed::LiveStats.endpoint()).await;
    }
}
