use std::env;
use std::time::{Duration, Instant};

use tracing::info;

use crate::color::{nb_colors, Coloring, VertexId, UNCOLORED};
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::search::dsatur::dsatur;
use crate::snapshot::SnapshotRecorder;

/// environment variable overriding the progress interval, in seconds
pub const PROGRESS_INTERVAL_ENV: &str = "EXACT_PROGRESS_INTERVAL";
/// accepted progress interval range, in seconds
const INTERVAL_RANGE: (f64, f64) = (0.05, 600.0);

/** exact solver knobs. */
#[derive(Debug, Clone)]
pub struct ExactParams {
    /// minimum delay between two progress lines
    pub progress_interval: Duration,
}

impl Default for ExactParams {
    fn default() -> Self {
        Self { progress_interval: Duration::from_secs(5) }
    }
}

impl ExactParams {
    /// reads `EXACT_PROGRESS_INTERVAL` when set, keeping the default otherwise
    pub fn from_env() -> Result<Self> {
        match env::var(PROGRESS_INTERVAL_ENV) {
            Err(_) => Ok(Self::default()),
            Ok(raw) => Ok(Self { progress_interval: parse_interval(&raw)? }),
        }
    }
}

/// parses a progress interval in seconds, enforcing the accepted range
pub fn parse_interval(raw: &str) -> Result<Duration> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        Error::InvalidConfiguration(format!("cannot parse progress interval: {:?}", raw))
    })?;
    if !(INTERVAL_RANGE.0..=INTERVAL_RANGE.1).contains(&secs) {
        return Err(Error::InvalidConfiguration(format!(
            "progress interval {} outside [{}, {}] seconds",
            secs, INTERVAL_RANGE.0, INTERVAL_RANGE.1
        )));
    }
    Ok(Duration::from_secs_f64(secs))
}

/** branch & bound achieving the chromatic number.

DSATUR provides the incumbent; the search then colors one vertex per level,
always the uncolored vertex with the highest saturation (ties by higher
degree, then smaller id). Every non-conflicting existing color is tried
first; a brand-new color only when it leaves room to still beat the
incumbent. Completing an assignment below the incumbent replaces it.
Pruning is monotone and the tree finite, so the search terminates and the
returned coloring is optimal. */
pub fn exact_solver(
    inst: &Instance,
    params: &ExactParams,
    snapshots: Option<&mut SnapshotRecorder>,
) -> Result<Coloring> {
    let n = inst.nb_vertices();
    if n == 0 {
        return Ok(Vec::new());
    }
    let seed = dsatur(inst, None)?;
    let now = Instant::now();
    let mut search = Search {
        inst,
        colors: vec![UNCOLORED; n],
        nb_colored: 0,
        best_k: nb_colors(&seed),
        best: seed,
        nodes: 0,
        started: now,
        last_report: now,
        interval: params.progress_interval,
        snapshots,
    };
    search.branch(-1)?;
    info!(best_k = search.best_k, nodes = search.nodes, "exact search completed");
    let Search { best, snapshots: mut recorder, .. } = search;
    if let Some(rec) = recorder.as_deref_mut() {
        rec.record(&best)?;
    }
    Ok(best)
}

struct Search<'a> {
    inst: &'a Instance,
    colors: Coloring,
    nb_colored: usize,
    /// colors used by the incumbent
    best_k: usize,
    best: Coloring,
    nodes: u64,
    started: Instant,
    last_report: Instant,
    interval: Duration,
    snapshots: Option<&'a mut SnapshotRecorder>,
}

impl Search<'_> {
    fn branch(&mut self, current_max: i32) -> Result<()> {
        self.nodes += 1;
        self.maybe_report(current_max);
        if current_max + 1 >= self.best_k as i32 {
            return Ok(()); // a completion cannot beat the incumbent
        }
        if self.nb_colored == self.inst.nb_vertices() {
            self.best_k = (current_max + 1) as usize;
            self.best = self.colors.clone();
            if let Some(rec) = self.snapshots.as_deref_mut() {
                rec.record(&self.colors)?;
            }
            return Ok(());
        }
        let u = self.select_vertex(current_max);
        for c in 0..=current_max {
            if self.inst.neighbors(u).iter().all(|w| self.colors[*w] != c) {
                self.colors[u] = c;
                self.nb_colored += 1;
                self.branch(current_max)?;
                self.colors[u] = UNCOLORED;
                self.nb_colored -= 1;
            }
        }
        // a new color must leave room for at least one more improvement
        if current_max + 2 < self.best_k as i32 {
            self.colors[u] = current_max + 1;
            self.nb_colored += 1;
            self.branch(current_max + 1)?;
            self.colors[u] = UNCOLORED;
            self.nb_colored -= 1;
        }
        Ok(())
    }

    /// uncolored vertex with the highest saturation over the current palette,
    /// ties by higher degree, then smaller id
    fn select_vertex(&self, current_max: i32) -> VertexId {
        let palette = (current_max + 1) as usize;
        let mut seen = vec![false; palette];
        let mut best_v = 0;
        let mut best_sat = 0;
        let mut best_deg = 0;
        let mut found = false;
        for v in self.inst.vertices() {
            if self.colors[v] != UNCOLORED {
                continue;
            }
            for s in seen.iter_mut() {
                *s = false;
            }
            let mut sat = 0;
            for &w in self.inst.neighbors(v) {
                let c = self.colors[w];
                if c >= 0 && !seen[c as usize] {
                    seen[c as usize] = true;
                    sat += 1;
                }
            }
            let deg = self.inst.degree(v);
            if !found || sat > best_sat || (sat == best_sat && deg > best_deg) {
                found = true;
                best_v = v;
                best_sat = sat;
                best_deg = deg;
            }
        }
        best_v
    }

    fn maybe_report(&mut self, current_max: i32) {
        if self.last_report.elapsed() < self.interval {
            return;
        }
        self.last_report = Instant::now();
        info!(
            elapsed_secs = self.started.elapsed().as_secs_f64(),
            colored = self.nb_colored,
            total = self.inst.nb_vertices(),
            palette = current_max + 1,
            best_k = self.best_k,
            nodes = self.nodes,
            "exact search progress"
        );
    }
}
