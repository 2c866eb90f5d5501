use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::archive_fetch::Archive;
use crate::reference::Era;
use crate::state::{Delta, FilterState, ProviderCommand};

/// Runs gateway calls off the UI thread. Each command executes on the rayon
/// pool, so a slow profile never holds up an era change. The thread exits
/// when every command sender is dropped.
pub fn spawn_archive_provider(
    archive: Arc<dyn Archive>,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for cmd in cmd_rx {
            let archive = Arc::clone(&archive);
            let tx = tx.clone();
            rayon::spawn(move || handle_command(archive.as_ref(), cmd, &tx));
        }
    })
}

/// Executes one command and reports the outcome. Gateway failures become a
/// `[WARN]` console line plus the empty default; nothing else escapes.
pub fn handle_command(archive: &dyn Archive, cmd: ProviderCommand, tx: &Sender<Delta>) {
    match cmd {
        ProviderCommand::LoadEra {
            request,
            era,
            filters,
        } => {
            let (players, insight) = load_era_data(archive, era, &filters, tx);
            let _ = tx.send(Delta::EraLoaded {
                request,
                players,
                insight,
            });
        }
        ProviderCommand::LoadProfile { request, name } => {
            let profile = match archive.player_profile(&name) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    let _ = tx.send(Delta::Log(format!("[WARN] Profile for {name} failed: {err}")));
                    None
                }
            };
            let _ = tx.send(Delta::ProfileLoaded {
                request,
                name,
                profile,
            });
        }
    }
}

/// Player list and era insight, requested concurrently and returned together.
pub fn load_era_data(
    archive: &dyn Archive,
    era: Era,
    filters: &FilterState,
    tx: &Sender<Delta>,
) -> (Vec<String>, String) {
    let (players, insight) = rayon::join(
        || archive.list_players(era, filters),
        || archive.era_insight(era),
    );

    let players = players.unwrap_or_else(|err| {
        let _ = tx.send(Delta::Log(format!("[WARN] Player list failed: {err}")));
        Vec::new()
    });
    let insight = insight.unwrap_or_else(|err| {
        let _ = tx.send(Delta::Log(format!("[WARN] Era insight failed: {err}")));
        String::new()
    });
    (players, insight)
}
