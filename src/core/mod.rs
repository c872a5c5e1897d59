pub mod catalog;
pub mod etl;
pub mod extractor;
pub mod fetcher;
pub mod merger;
pub mod persister;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    ConsoleCatalog, ConsoleLink, MergeOutcome, RefreshPolicy, ServiceState,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
