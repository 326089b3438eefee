pub mod milestone_pipeline;
