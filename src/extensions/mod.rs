//! Observer hooks for host applications.
//!
//! Plugins see every state transition the engine performs but cannot mutate
//! chart state.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
