//! `ud-sim` — the tick loop orchestrator of the uniform-dispersion engine.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for each tick:
//!   ① Decisions — active robots in ascending id order: sample activation,
//!                 observe the 3×3×3 surroundings, settle or pick a target.
//!   ② Respawn   — an empty door cell grows a fresh robot (visible to the
//!                 grid only after ④).
//!   ③ Commit    — targets become positions; walls and the outside reject
//!                 the move; co-located movers are tolerated.
//!   ④ Rebuild   — robot field recomputed, earliest id wins contested cells.
//! ```
//!
//! Completion latches when a tick starts with no active robot and spawns
//! none; any external edit that re-introduces activity clears the latch.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ud_sim::{Engine, NoopObserver};
//!
//! let mut engine = Engine::new(42);
//! engine.load_map(1);
//! engine.set_active_probability(100);
//! let ticks = engine.run_until_complete(10_000, &mut NoopObserver);
//! println!("done in {ticks} ticks, moves = {}", engine.get_t_total());
//! ```

pub mod engine;
pub mod events;
pub mod metrics;
pub mod observer;


pub use engine::{DEFAULT_ACTIVE_PROBABILITY, Engine};
pub use events::{EventLog, EventTag, RobotPhase};
pub use metrics::Metrics;
pub use observer::{NoopObserver, SimObserver};
