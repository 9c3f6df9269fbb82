//! CLI command implementations.

pub(crate) mod demo;

pub(crate) use demo::DemoArgs;
