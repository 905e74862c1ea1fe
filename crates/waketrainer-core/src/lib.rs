//! # Waketrainer Core Library
//!
//! This library provides the core business logic for Waketrainer, a gradual
//! wake-up-time trainer. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Wake schedule**: pure arithmetic migrating the current wake time to
//!   the target in fixed daily steps, wrapping correctly across midnight
//! - **Journey**: calendar anchoring of a schedule to its start date
//! - **Storage**: TOML-based configuration for the wake-time endpoints,
//!   journey start date, and alarm preferences
//! - **Events**: serializable state-change notifications for front ends
//!
//! ## Key Components
//!
//! - [`WakeSchedule`]: the progression algorithm
//! - [`Journey`]: date-based day tracking over a schedule
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod journey;
pub mod schedule;
pub mod storage;
pub mod time;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use journey::Journey;
pub use schedule::{WakeSchedule, DEFAULT_STEP_MINUTES};
pub use storage::{data_dir, Config};
pub use time::{TimeOfDay, MINUTES_PER_DAY};
