//! The public catalog: one fetched list, a category filter and a scroll window.

use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use ronex_core::{Project, ProjectStats};

use crate::filter::CategoryFilter;
use crate::window::{ItemEstimate, Viewport, WINDOWING_THRESHOLD, WindowedList};

#[derive(Debug, Clone)]
pub struct CatalogView {
    projects: Arc<[Project]>,
    filter: CategoryFilter,
    /// Indices into `projects` that pass `filter`.
    matching: Vec<usize>,
    window: WindowedList,
    viewport: Viewport,
}

impl CatalogView {
    #[must_use]
    pub fn new(projects: Arc<[Project]>, estimate: ItemEstimate, threshold: usize) -> Self {
        let mut view = Self {
            projects,
            filter: CategoryFilter::All,
            matching: Vec::new(),
            window: WindowedList::new(estimate, threshold),
            viewport: Viewport::default(),
        };
        view.refilter();
        view
    }

    #[must_use]
    pub fn with_defaults(projects: Arc<[Project]>) -> Self {
        Self::new(projects, ItemEstimate::default(), WINDOWING_THRESHOLD)
    }

    /// Swap in a newly fetched list, keeping filter and scroll position.
    pub fn replace_projects(&mut self, projects: Arc<[Project]>) {
        self.projects = projects;
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.refilter();
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// All projects passing the filter, in server order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Project> {
        self.matching.iter().map(|&i| &self.projects[i]).collect()
    }

    /// The filtered projects inside the current scroll window.
    #[must_use]
    pub fn visible(&self) -> Vec<&Project> {
        self.window
            .slice(&self.matching)
            .iter()
            .map(|&i| &self.projects[i])
            .collect()
    }

    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.window.range()
    }

    /// Set the viewport without throttling, e.g. on first layout.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Range<usize> {
        self.viewport = viewport;
        self.window.reset(self.matching.len(), viewport)
    }

    /// Throttled scroll handling. `Some` when the window was recomputed.
    pub fn on_scroll(&mut self, now: Instant, viewport: Viewport) -> Option<Range<usize>> {
        self.viewport = viewport;
        self.window.on_scroll(now, viewport)
    }

    pub fn flush_scroll(&mut self, now: Instant) -> Option<Range<usize>> {
        self.window.flush(now)
    }

    /// Statistics over the whole list, ignoring the filter.
    #[must_use]
    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.projects)
    }

    fn refilter(&mut self) {
        self.matching = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, project)| self.filter.matches(project))
            .map(|(index, _)| index)
            .collect();
        self.window.reset(self.matching.len(), self.viewport);
    }
}
