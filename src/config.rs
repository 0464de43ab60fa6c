/*! Loading task sets from TOML files

A file lists any number of task sets:

```toml
[[task_set]]
name = "sensors"
policy = "deadline-monotonic"
tasks = [
    { period = 2, wcet = 1 },
    { period = 5, wcet = 1, deadline = 3 },
]
```

`policy` defaults to `rate-monotonic` and `deadline` to `period`.
Tasks may be listed in any order; they are sorted by the policy's
priority key when the set is built.
*/

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::task::{PriorityPolicy, Task, TaskSet, TaskSetError};
use crate::time::{Duration, Service};

/// Error type returned when a configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("task set '{name}': {source}")]
    TaskSet {
        name: String,
        #[source]
        source: TaskSetError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    pub period: u64,
    pub wcet: u64,
    pub deadline: Option<u64>,
}

impl From<TaskConfig> for Task {
    fn from(c: TaskConfig) -> Task {
        let period = Duration::from(c.period);
        Task::new(Service::from(c.wcet), period).with_deadline(c.deadline.map_or(period, Duration::from))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSetConfig {
    pub name: String,
    #[serde(default)]
    pub policy: PriorityPolicy,
    pub tasks: Vec<TaskConfig>,
}

impl TaskSetConfig {
    /// Sort the tasks by priority and build a validated, non-empty
    /// task set.
    pub fn build(&self) -> Result<TaskSet, ConfigError> {
        let mut tasks: Vec<Task> = self.tasks.iter().copied().map(Task::from).collect();
        self.policy.sort(&mut tasks);
        let wrap = |source| ConfigError::TaskSet {
            name: self.name.clone(),
            source,
        };
        let task_set = TaskSet::new(self.policy, tasks).map_err(wrap)?;
        task_set.ensure_non_empty().map_err(wrap)?;
        Ok(task_set)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "task_set", default)]
    pub task_sets: Vec<TaskSetConfig>,
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents)?;
        tracing::info!(path = %path.display(), task_sets = config.task_sets.len(), "loaded configuration");
        Ok(config)
    }

    /// Build all configured task sets, paired with their names.
    pub fn task_sets(&self) -> Result<Vec<(String, TaskSet)>, ConfigError> {
        self.task_sets
            .iter()
            .map(|c| Ok((c.name.clone(), c.build()?)))
            .collect()
    }
}
