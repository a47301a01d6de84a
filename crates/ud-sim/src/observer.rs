//! Simulation observer trait for progress reporting and data collection.

use ud_core::RobotId;

/// Callbacks invoked by [`Engine::tick_with`][crate::Engine::tick_with] and
/// [`Engine::run_until_complete`][crate::Engine::run_until_complete] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — settlement printer
///
/// ```rust,ignore
/// struct SettlePrinter;
///
/// impl SimObserver for SettlePrinter {
///     fn on_robot_settled(&mut self, id: RobotId, tick: u64) {
///         println!("tick {tick}: {id} settled");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// Called at the end of each tick.
    ///
    /// `decided` is the number of robots that ran their decision this tick
    /// (active robots that did not sleep).
    fn on_tick_end(&mut self, _tick: u64, _decided: usize) {}

    /// Called when a robot settles, whether by the settlement test or by
    /// total blockage.
    fn on_robot_settled(&mut self, _id: RobotId, _tick: u64) {}

    /// Called once by `run_until_complete` when the run reaches completion
    /// (not when it stops at the tick cap).
    fn on_complete(&mut self, _tick: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive ticks
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
