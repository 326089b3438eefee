pub mod directory;
pub mod etl;
pub mod parser;
pub mod resolver;
pub mod sync;

pub use crate::domain::model::{
    ExtractResult, Milestone, Person, PersonDirectory, SyncReport,
};
pub use crate::domain::ports::{BasecampApi, ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
