use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Admin commands. All but `login` and `status` need a stored key.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Validate an API key with the backend and store it.
    Login {
        /// The admin API key.
        key: String,
    },
    /// Forget the stored key.
    Logout,
    /// Show whether a key is stored and where.
    Status,
    /// Create a project.
    Create(CreateArgs),
    /// Update fields of an existing project.
    Update(UpdateArgs),
    /// Delete a project.
    Delete {
        /// Project id.
        id: String,
        /// Skip the confirmation refusal.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ImageArgs {
    /// Image URL or `data:image/...` string.
    #[arg(long, conflicts_with = "image_file")]
    pub image: Option<String>,

    /// Local image to resize and embed.
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// English title.
    #[arg(long)]
    pub title: String,
    /// Indonesian title.
    #[arg(long)]
    pub title_id: String,
    /// English description.
    #[arg(long)]
    pub description: String,
    /// Indonesian description.
    #[arg(long)]
    pub description_id: String,
    #[arg(long, default_value = "residential")]
    pub category: String,
    #[arg(long)]
    pub location: String,
    /// e.g. "6 months"
    #[arg(long)]
    pub duration: String,
    #[arg(long, default_value = "completed")]
    pub status: String,
    #[command(flatten)]
    pub image: ImageArgs,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Project id.
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub title_id: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub description_id: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[command(flatten)]
    pub image: ImageArgs,
    /// Remove the current image.
    #[arg(long, conflicts_with_all = ["image", "image_file"])]
    pub clear_image: bool,
}
