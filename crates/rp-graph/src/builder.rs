//! Single-pass graph construction from road features.
//!
//! # What is loaded
//!
//! Only features that pass the [`IngestConfig`] filters are added:
//!
//! 1. the geometry is non-empty,
//! 2. its centroid lies inside `region` (when a region is configured),
//! 3. its road type is in `allowed_road_types` (absent tags always pass and
//!    are recorded as `"unspecified"`),
//! 4. at least one line part has two or more coordinates.
//!
//! Every consecutive coordinate pair becomes one segment weighted by its
//! haversine length.  One-way features add a single directed edge; two-way
//! features add both directions.
//!
//! # Vertex identity
//!
//! Vertices are deduplicated by exact coordinate equality.  The first time a
//! coordinate is seen it receives the next id (0, 1, 2, …).  The lookup map
//! and the counter live in the builder and are dropped by [`GraphBuilder::build`],
//! so the finished [`Graph`] carries no build-only state.

use log::{debug, info, trace, warn};
use rustc_hash::FxHashMap;

use rp_core::{BoundingBox, GeoPoint, VertexId};

use crate::error::{GraphResult, SkipReason};
use crate::feature::Feature;
use crate::graph::{Graph, UNSPECIFIED_ROAD_TYPE, Vertex};

/// Road classes accepted by [`IngestConfig::default`].
pub const DEFAULT_ROAD_TYPES: &[&str] = &[
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "living_street",
    "unclassified",
    "service",
    "road",
    "track",
    "path",
];

/// Progress is logged every this many features.
const PROGRESS_INTERVAL: usize = 1_000;

// ── IngestConfig ──────────────────────────────────────────────────────────────

/// Feature filters applied before a feature reaches the graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IngestConfig {
    /// Keep only features whose centroid falls inside this box.  `None`
    /// keeps everything.
    pub region: Option<BoundingBox>,

    /// Case-insensitive allow-list of road types.  `None` accepts every tag.
    pub allowed_road_types: Option<Vec<String>>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            region: None,
            allowed_road_types: Some(DEFAULT_ROAD_TYPES.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl IngestConfig {
    /// Accept every feature with usable geometry.
    pub fn unfiltered() -> Self {
        Self { region: None, allowed_road_types: None }
    }

    pub fn with_region(mut self, region: BoundingBox) -> Self {
        self.region = Some(region);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if let Some(region) = &self.region {
            region.validate()?;
        }
        Ok(())
    }

    fn allows(&self, road_type: Option<&str>) -> bool {
        match (road_type, &self.allowed_road_types) {
            (None, _) | (_, None) => true,
            (Some(tag), Some(allowed)) => allowed.iter().any(|a| a.eq_ignore_ascii_case(tag)),
        }
    }
}

// ── IngestReport ──────────────────────────────────────────────────────────────

/// Feature counters accumulated over a build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IngestReport {
    /// Features that contributed at least one segment.
    pub processed: usize,
    /// Features rejected by a filter or with unusable geometry.
    pub skipped:   usize,
    /// Road segments added (each may produce one or two directed edges).
    pub segments:  usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Build a [`Graph`] from road features, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rp_core::GeoPoint;
/// use rp_graph::{Feature, GraphBuilder};
///
/// let mut b = GraphBuilder::new();
/// let road = Feature::line(vec![
///     GeoPoint::new(47.91, 106.90),
///     GeoPoint::new(47.92, 106.91),
///     GeoPoint::new(47.93, 106.91),
/// ])
/// .with_road_type("primary");
/// assert_eq!(b.ingest(&road), Ok(2));
/// let graph = b.build();
/// assert_eq!(graph.size(), 3);
/// assert_eq!(graph.edge_count(), 4); // two-way
/// ```
pub struct GraphBuilder {
    graph:   Graph,
    config:  IngestConfig,
    ids:     FxHashMap<(u64, u64), VertexId>,
    next_id: u32,
    report:  IngestReport,
}

impl GraphBuilder {
    /// A builder with [`IngestConfig::default`].
    pub fn new() -> Self {
        Self::from_parts(IngestConfig::default())
    }

    /// A builder with custom filters.  Fails if the region is inverted.
    pub fn with_config(config: IngestConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: IngestConfig) -> Self {
        Self {
            graph: Graph::new(),
            config,
            ids: FxHashMap::default(),
            next_id: 0,
            report: IngestReport::default(),
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    /// Return the vertex at `pos`, creating it with the next id if the
    /// coordinate has not been seen before.
    pub fn vertex_at(&mut self, pos: GeoPoint) -> Vertex {
        let next_id = &mut self.next_id;
        let id = *self.ids.entry(pos.bits()).or_insert_with(|| {
            let id = VertexId(*next_id);
            *next_id += 1;
            id
        });
        match self.graph.vertex(id) {
            Some(v) => *v,
            None => {
                let v = Vertex { id, pos };
                self.graph.add_vertex(v);
                v
            }
        }
    }

    /// Add one coordinate sequence as consecutive road segments.
    ///
    /// Sequences with fewer than two coordinates add nothing.  Returns the
    /// number of segments added.  This is the raw tuple interface; it applies
    /// no filters and does not touch the report.
    pub fn add_segment(
        &mut self,
        coords:    &[GeoPoint],
        road_type: Option<&str>,
        one_way:   bool,
    ) -> usize {
        let road_type = road_type.unwrap_or(UNSPECIFIED_ROAD_TYPE);
        for pair in coords.windows(2) {
            let from = self.vertex_at(pair[0]);
            let to = self.vertex_at(pair[1]);
            let weight_km = from.distance_km(&to);
            trace!("segment {} -> {} ({weight_km:.4} km)", from.id, to.id);
            self.graph.add_edge(from, to, weight_km, road_type, one_way);
        }
        coords.len().saturating_sub(1)
    }

    /// Filter and add a single feature.
    ///
    /// Returns the number of segments added, or why the feature was skipped.
    /// Either way the outcome is counted in [`report`](Self::report).
    pub fn ingest(&mut self, feature: &Feature) -> Result<usize, SkipReason> {
        let outcome = self.try_ingest(feature);
        match &outcome {
            Ok(segments) => {
                self.report.processed += 1;
                self.report.segments += segments;
            }
            Err(reason @ (SkipReason::EmptyGeometry | SkipReason::Degenerate)) => {
                self.report.skipped += 1;
                warn!("skipping feature: {reason}");
            }
            Err(reason) => {
                self.report.skipped += 1;
                debug!("skipping feature: {reason}");
            }
        }
        outcome
    }

    fn try_ingest(&mut self, feature: &Feature) -> Result<usize, SkipReason> {
        let geometry = &feature.geometry;
        let centroid = geometry.centroid().ok_or(SkipReason::EmptyGeometry)?;

        if let Some(region) = &self.config.region {
            if !region.contains(centroid) {
                return Err(SkipReason::OutsideRegion);
            }
        }

        let road_type = feature.road_type.as_deref();
        if !self.config.allows(road_type) {
            return Err(SkipReason::RoadTypeNotAllowed(road_type.unwrap_or_default().to_owned()));
        }

        if !geometry.parts().any(|part| part.len() >= 2) {
            return Err(SkipReason::Degenerate);
        }

        let mut segments = 0;
        for part in geometry.parts() {
            segments += self.add_segment(part, road_type, feature.one_way);
        }
        Ok(segments)
    }

    /// Ingest every feature from `features`, logging progress.
    ///
    /// A rejected feature never aborts the pass.  Returns the cumulative
    /// report for this builder.
    pub fn ingest_all<I>(&mut self, features: I) -> IngestReport
    where
        I: IntoIterator<Item = Feature>,
    {
        for feature in features {
            // The outcome is already tallied in the report.
            let _ = self.ingest(&feature);
            let seen = self.report.total();
            if seen % PROGRESS_INTERVAL == 0 {
                info!(
                    "ingested {seen} features ({} processed, {} skipped)",
                    self.report.processed, self.report.skipped
                );
            }
        }
        self.report
    }

    /// Consume the builder and return the finished graph.
    pub fn build(self) -> Graph {
        let graph = self.graph;
        info!(
            "graph built from {} features ({} skipped)\n{}",
            self.report.processed,
            self.report.skipped,
            graph.stats()
        );
        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph from `features` in one pass.
///
/// Fails only if `config` is invalid; individual bad features are skipped
/// and counted in the returned report.
pub fn build_graph<I>(features: I, config: IngestConfig) -> GraphResult<(Graph, IngestReport)>
where
    I: IntoIterator<Item = Feature>,
{
    let mut builder = GraphBuilder::with_config(config)?;
    let report = builder.ingest_all(features);
    Ok((builder.build(), report))
}
