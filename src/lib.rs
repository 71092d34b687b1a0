//! Core library for the alquimista-leads command line application.
//!
//! The library exposes the lead consolidation pipeline that powers the
//! command-line interface as well as the test suite. The modules are
//! structured to keep responsibilities narrow and composable: IO adapters
//! live under [`alquimista::leads::io`], data shapes inside
//! [`alquimista::leads::model`], the pure pipeline stages in
//! [`alquimista::leads::normalize`], [`alquimista::leads::explode`],
//! [`alquimista::leads::entity`], [`alquimista::leads::consolidate`], and
//! [`alquimista::leads::dedup`], and the orchestration under
//! [`alquimista::leads::pipeline`].

pub mod alquimista;

pub use alquimista::leads::{
    Result, ToolError, consolidate, dedup, entity, error, explode, io, model, normalize, pipeline,
};
