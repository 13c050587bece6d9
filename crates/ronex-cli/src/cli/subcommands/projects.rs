use clap::{Args, Subcommand};
use ronex_catalog::{CategoryFilter, Viewport};

/// Public catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectsCommands {
    /// List projects, optionally filtered by category.
    List(ListArgs),
    /// Show one project.
    Get {
        /// Project id.
        id: String,
    },
    /// Summary counts over all projects.
    Stats,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// all, residential, business, government, infrastructure
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Simulated scroll offset in pixels; enables windowing.
    #[arg(long, requires = "viewport_height")]
    pub scroll_offset: Option<f64>,

    /// Simulated viewport height in pixels.
    #[arg(long)]
    pub viewport_height: Option<f64>,

    /// Simulated container width in pixels.
    #[arg(long, default_value_t = 1100.0)]
    pub container_width: f64,
}

impl ListArgs {
    /// The simulated viewport, when one was requested.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport_height.map(|viewport_height| Viewport {
            scroll_offset: self.scroll_offset.unwrap_or(0.0),
            viewport_height,
            container_width: self.container_width,
        })
    }
}
