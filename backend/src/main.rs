use anyhow::Result;
use env_logger::Env;
use log::info;

use chore_tracker_backend::{Backend, TrackerConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting chore tracker");

    let config = TrackerConfig::from_env()?;
    let backend = Backend::new(config);

    let overview = backend.dashboard_service.overview();
    info!(
        "Dashboard: {} completed, {} pending, {} members, {}% done",
        overview.stats.completed_chores,
        overview.stats.pending_chores,
        overview.stats.active_users,
        overview.stats.completion_rate
    );
    for member in &overview.family {
        info!(
            "{}: {}/{} chores done ({}%){}",
            member.name,
            member.completed_chores,
            member.total_chores,
            member.progress,
            if member.top_performer { ", top performer" } else { "" }
        );
    }

    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
