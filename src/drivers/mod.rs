//! Runtime and peripheral helpers: task spawning and hardware bring-up.

#[cfg(target_os = "espidf")]
pub mod hw_init;
pub mod task_pin;
