//==============================================================================
// Proxy: caching wrapper around an expensive third-party video library
//==============================================================================

use colored::Colorize;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use thiserror::Error;

//==============================================================================
// Milestone 1: Identifiers, errors and the narration sink
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub u32);

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VideoError {
    #[error("{source_name} is unavailable for videoId: {id}")]
    Unavailable { source_name: String, id: VideoId },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid proxy config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the answer to a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Source,
    Cache,
}

/// Line-oriented sink for the narration each call produces.
pub trait Journal: Send + Sync {
    fn record(&self, origin: Option<Origin>, line: String);
}

pub struct ConsoleJournal;

impl Journal for ConsoleJournal {
    fn record(&self, origin: Option<Origin>, line: String) {
        match origin {
            Some(Origin::Source) => println!("{}", line.yellow()),
            Some(Origin::Cache) => println!("{}", line.green()),
            None => println!("{line}"),
        }
    }
}

#[derive(Default)]
pub struct MemoryJournal {
    lines: Mutex<Vec<(Option<Origin>, String)>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// Only the lines tagged with an origin, in the order they were recorded.
    pub fn origins(&self) -> Vec<Origin> {
        self.entries()
            .into_iter()
            .filter_map(|(origin, _)| origin)
            .collect()
    }

    fn entries(&self) -> Vec<(Option<Origin>, String)> {
        match self.lines.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Journal for MemoryJournal {
    fn record(&self, origin: Option<Origin>, line: String) {
        let mut guard = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((origin, line));
    }
}

//==============================================================================
// Milestone 2: Configuration
//==============================================================================

pub const DEFAULT_CONFIG: &str = r#"
source_name = "YouTube"
caching = true
latency_ms = 0
unavailable = []
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub source_name: String,
    pub caching: bool,
    pub latency_ms: u64,
    pub unavailable: Vec<VideoId>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            source_name: "YouTube".to_string(),
            caching: true,
            latency_ms: 0,
            unavailable: Vec::new(),
        }
    }
}

impl ProxyConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

//==============================================================================
// Milestone 3: The library contract and the expensive remote service
//==============================================================================

pub trait VideoLibrary {
    fn list_videos(&self) -> Result<(), VideoError>;
    fn video_info(&self, id: VideoId) -> Result<Origin, VideoError>;
    fn download_video(&self, id: VideoId) -> Result<Origin, VideoError>;
}

/// Talks to the remote provider on every call. Keeps no state between calls
/// apart from the request counters below.
pub struct RemoteVideoService {
    source_name: String,
    latency: Duration,
    unavailable: HashSet<VideoId>,
    journal: Arc<dyn Journal>,
    list_calls: AtomicUsize,
    info_calls: AtomicUsize,
    download_calls: AtomicUsize,
}

impl RemoteVideoService {
    pub fn new(config: &ProxyConfig, journal: Arc<dyn Journal>) -> Self {
        journal.record(None, format!("Constructing the {} service...", config.source_name));
        Self {
            source_name: config.source_name.clone(),
            latency: Duration::from_millis(config.latency_ms),
            unavailable: config.unavailable.iter().copied().collect(),
            journal,
            list_calls: AtomicUsize::new(0),
            info_calls: AtomicUsize::new(0),
            download_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }

    pub fn download_calls(&self) -> usize {
        self.download_calls.load(Ordering::SeqCst)
    }

    fn round_trip(&self, id: VideoId) -> Result<(), VideoError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        if self.unavailable.contains(&id) {
            return Err(VideoError::Unavailable {
                source_name: self.source_name.clone(),
                id,
            });
        }
        Ok(())
    }
}

impl VideoLibrary for RemoteVideoService {
    fn list_videos(&self) -> Result<(), VideoError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        self.journal.record(
            Some(Origin::Source),
            format!("Listing Videos directly from {}...", self.source_name),
        );
        Ok(())
    }

    fn video_info(&self, id: VideoId) -> Result<Origin, VideoError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip(id)?;
        self.journal.record(
            Some(Origin::Source),
            format!(
                "Extracting the video metadata info for videoId: {id} - directly from {}...",
                self.source_name
            ),
        );
        Ok(Origin::Source)
    }

    fn download_video(&self, id: VideoId) -> Result<Origin, VideoError> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip(id)?;
        self.journal.record(
            Some(Origin::Source),
            format!(
                "Downloading the video for videoId: {id} - directly from {}...",
                self.source_name
            ),
        );
        Ok(Origin::Source)
    }
}

//==============================================================================
// Milestone 4: The caching proxy
//==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

#[derive(Default)]
struct StatsTracker {
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl StatsTracker {
    fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    fn record_miss(&self) {
        self.misses.set(self.misses.get() + 1);
    }

    fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}

/// Remembers which ids were already fetched and skips the remote call for
/// them. Caches grow without bound and are never invalidated.
pub struct CachingProxy<L: VideoLibrary> {
    inner: L,
    journal: Arc<dyn Journal>,
    metadata_cache: RefCell<HashSet<VideoId>>,
    content_cache: RefCell<HashSet<VideoId>>,
    stats: StatsTracker,
}

impl<L: VideoLibrary> CachingProxy<L> {
    pub fn new(inner: L, journal: Arc<dyn Journal>) -> Self {
        journal.record(None, "Constructing the CachingProxy".to_string());
        Self {
            inner,
            journal,
            metadata_cache: RefCell::new(HashSet::new()),
            content_cache: RefCell::new(HashSet::new()),
            stats: StatsTracker::default(),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    pub fn is_metadata_cached(&self, id: VideoId) -> bool {
        self.metadata_cache.borrow().contains(&id)
    }

    pub fn is_content_cached(&self, id: VideoId) -> bool {
        self.content_cache.borrow().contains(&id)
    }

    fn cached_or_fetch(
        &self,
        cache: &RefCell<HashSet<VideoId>>,
        id: VideoId,
        hit_line: impl FnOnce() -> String,
        fetch: impl FnOnce(&L) -> Result<Origin, VideoError>,
    ) -> Result<Origin, VideoError> {
        if cache.borrow().contains(&id) {
            self.stats.record_hit();
            self.journal.record(Some(Origin::Cache), hit_line());
            return Ok(Origin::Cache);
        }

        self.stats.record_miss();
        // The borrow above is released before calling out, so a failed fetch
        // leaves the id uncached.
        let origin = fetch(&self.inner)?;
        cache.borrow_mut().insert(id);
        Ok(origin)
    }
}

impl<L: VideoLibrary> VideoLibrary for CachingProxy<L> {
    fn list_videos(&self) -> Result<(), VideoError> {
        self.journal
            .record(None, "Invoked list_videos() of CachingProxy..".to_string());
        self.inner.list_videos()
    }

    fn video_info(&self, id: VideoId) -> Result<Origin, VideoError> {
        self.journal
            .record(None, "Invoked video_info() of CachingProxy...".to_string());
        self.cached_or_fetch(
            &self.metadata_cache,
            id,
            || format!("Extracting the video metadata info for videoId: {id} - from metadata local cache..."),
            |inner| inner.video_info(id),
        )
    }

    fn download_video(&self, id: VideoId) -> Result<Origin, VideoError> {
        self.journal
            .record(None, "Invoked download_video() of CachingProxy...".to_string());
        self.cached_or_fetch(
            &self.content_cache,
            id,
            || format!("Downloading the video for videoId: {id} - from video data local cache..."),
            |inner| inner.download_video(id),
        )
    }
}

/// Picks the direct service or the caching proxy once, up front.
pub fn build_library(config: &ProxyConfig, journal: Arc<dyn Journal>) -> Box<dyn VideoLibrary> {
    let service = RemoteVideoService::new(config, Arc::clone(&journal));
    if config.caching {
        Box::new(CachingProxy::new(service, journal))
    } else {
        Box::new(service)
    }
}

//==============================================================================
// Milestone 5: A proxy that can be shared between threads
//==============================================================================

/// Thread-safe variant. The miss path runs while the entry for `id` is held,
/// so concurrent callers asking for the same id fetch it only once. Hits take
/// only the shard read lock and do not exclude each other.
pub struct SharedCachingProxy<L: VideoLibrary + Sync> {
    inner: L,
    journal: Arc<dyn Journal>,
    metadata_cache: DashMap<VideoId, ()>,
    content_cache: DashMap<VideoId, ()>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<L: VideoLibrary + Sync> SharedCachingProxy<L> {
    pub fn new(inner: L, journal: Arc<dyn Journal>) -> Self {
        journal.record(None, "Constructing the SharedCachingProxy".to_string());
        Self {
            inner,
            journal,
            metadata_cache: DashMap::new(),
            content_cache: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::SeqCst),
            misses: self.misses.load(Ordering::SeqCst),
        }
    }

    pub fn cached_metadata(&self) -> usize {
        self.metadata_cache.len()
    }

    pub fn cached_content(&self) -> usize {
        self.content_cache.len()
    }

    fn record_hit(&self, hit_line: impl FnOnce() -> String) -> Result<Origin, VideoError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.journal.record(Some(Origin::Cache), hit_line());
        Ok(Origin::Cache)
    }

    fn cached_or_fetch(
        &self,
        cache: &DashMap<VideoId, ()>,
        id: VideoId,
        hit_line: impl FnOnce() -> String,
        fetch: impl FnOnce(&L) -> Result<Origin, VideoError>,
    ) -> Result<Origin, VideoError> {
        if cache.contains_key(&id) {
            return self.record_hit(hit_line);
        }

        // Another thread may have filled the slot between the lookup and here.
        match cache.entry(id) {
            Entry::Occupied(_) => self.record_hit(hit_line),
            Entry::Vacant(slot) => {
                self.misses.fetch_add(1, Ordering::SeqCst);
                let origin = fetch(&self.inner)?;
                slot.insert(());
                Ok(origin)
            }
        }
    }
}

impl<L: VideoLibrary + Sync> VideoLibrary for SharedCachingProxy<L> {
    fn list_videos(&self) -> Result<(), VideoError> {
        self.journal
            .record(None, "Invoked list_videos() of SharedCachingProxy..".to_string());
        self.inner.list_videos()
    }

    fn video_info(&self, id: VideoId) -> Result<Origin, VideoError> {
        self.journal
            .record(None, "Invoked video_info() of SharedCachingProxy...".to_string());
        self.cached_or_fetch(
            &self.metadata_cache,
            id,
            || format!("Extracting the video metadata info for videoId: {id} - from metadata local cache..."),
            |inner| inner.video_info(id),
        )
    }

    fn download_video(&self, id: VideoId) -> Result<Origin, VideoError> {
        self.journal
            .record(None, "Invoked download_video() of SharedCachingProxy...".to_string());
        self.cached_or_fetch(
            &self.content_cache,
            id,
            || format!("Downloading the video for videoId: {id} - from video data local cache..."),
            |inner| inner.download_video(id),
        )
    }
}

//==============================================================================
// Example usage
//==============================================================================

fn load_config() -> Result<ProxyConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => ProxyConfig::load(Path::new(&path)),
        None => ProxyConfig::from_toml_str(DEFAULT_CONFIG),
    }
}

fn run(library: &dyn VideoLibrary) -> Result<(), VideoError> {
    library.list_videos()?;

    library.video_info(VideoId(10))?;
    library.video_info(VideoId(10))?;

    library.download_video(VideoId(20))?;
    library.download_video(VideoId(20))?;
    Ok(())
}

fn main() {
    println!("{}", "=== Proxy Demo ===".bold());

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            std::process::exit(1);
        }
    };

    let journal: Arc<dyn Journal> = Arc::new(ConsoleJournal);
    let library = build_library(&config, journal);
    if let Err(err) = run(library.as_ref()) {
        eprintln!("{} {err}", "error:".red().bold());
    }

    println!("\n{}", "=== Shared proxy across threads ===".bold());
    let journal: Arc<dyn Journal> = Arc::new(ConsoleJournal);
    let shared = SharedCachingProxy::new(
        RemoteVideoService::new(&config, Arc::clone(&journal)),
        journal,
    );
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                if let Err(err) = shared.video_info(VideoId(42)) {
                    eprintln!("{} {err}", "error:".red().bold());
                }
            });
        }
    });
    println!(
        "4 threads asked for videoId 42, source was called {} time(s)",
        shared.inner().info_calls()
    );
}

//==============================================================================
// Tests
//==============================================================================
