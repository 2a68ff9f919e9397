//! Embassy async tasks
//!
//! Each pipeline stage runs independently and communicates via channels.

pub mod command;
pub mod console_rx;
pub mod filter;
pub mod graph;
pub mod sensor;

pub use command::command_task;
pub use console_rx::console_rx_task;
pub use filter::filter_task;
pub use graph::graph_task;
pub use sensor::sensor_task;
