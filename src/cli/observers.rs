//! Observer adapters used by the CLI: progress bars and JSONL stat export

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::ProgressBar;

use crate::{
    cli::output,
    error::{Error, Result},
    ports::TrainingObserver,
    trainer::EpisodeStat,
};

/// Progress bar observer - advances once per completed episode.
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self { progress_bar: None }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingObserver for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.progress_bar = Some(output::create_training_progress(total_episodes as u64));
        Ok(())
    }

    fn on_episode_end(&mut self, stat: &EpisodeStat) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
            pb.set_message(format!(
                "reward {:.0}, epsilon {:.3}",
                stat.total_reward, stat.epsilon
            ));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
        Ok(())
    }
}

/// Writes one JSON object per completed episode, for charting offline.
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(&path).map_err(|source| Error::Io {
            operation: format!("create stats file {}", path.as_ref().display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl TrainingObserver for JsonlObserver {
    fn on_episode_end(&mut self, stat: &EpisodeStat) -> Result<()> {
        serde_json::to_writer(&mut self.writer, stat)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
