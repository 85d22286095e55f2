pub mod calculations;
pub mod config;
pub mod error;
pub mod input;
pub mod resource;
pub mod schedule;
pub mod table;
pub mod task;
pub(crate) mod task_validation;
pub mod template;
pub mod weather;

pub use calculations::critical_path::{CriticalPath, CriticalPathEntry, critical_path};
pub use calculations::rollup::{PhaseProgress, ProgressRollup, rollup};
pub use config::{
    ConfigError, GatePolicy, PolicyConfig, StaffingPolicy, WeatherPolicy, load_policy_from_json,
};
pub use error::{ParseLabelError, ScheduleError};
pub use input::{
    InputError, load_observations_from_csv, load_project_from_json, load_resources_from_csv,
};
pub use resource::{Availability, Resource, StaffingPlan, match_resources, plan_staffing};
pub use schedule::{Schedule, generate};
pub use task::{PhaseInstance, TaskInstance, WorkStatus};
pub use template::{CompletionTable, PhaseTemplate, ProjectScheduleInput, TaskTemplate};
pub use weather::evaluator::{evaluate, evaluate_all, is_good_day};
pub use weather::gate::{gate, gate_many};
pub use weather::impact::weather_conflicts;
pub use weather::{
    DateRange, GateOutcome, Recommendation, SuitabilityVerdict, WeatherObservation,
    WeeklyGateResult,
};
