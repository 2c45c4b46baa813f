//! Flow control and the frame/tick driver.
//!
//! This module provides the flow abstraction for the game core. A "flow"
//! represents a self-contained piece of game state that reacts to the host
//! render loop. The host engine owns the actual loop (and the XR session
//! producing viewer poses); once per rendered frame it hands control to
//! [`App::frame`], which distributes updates, fires ticks at the configured
//! cadence and collects the mesh placements the host should mirror.
//!
//! # Lifecycle Flow
//!
//! The host-driven loop follows this pattern each frame:
//! 1. The host queries the XR layer for the current viewer pose
//! 2. The host calls [`App::frame`] with the pose (or `None` on tracking loss)
//! 3. `on_update` runs on every flow with the elapsed time `dt`
//! 4. `on_tick` runs on every flow once per `tick_duration_millis`
//! 5. The returned [`Placement`] list is applied to the host's meshes
//! 6. Host-side widget triggers arrive through [`App::custom_event`]

use std::fmt::Debug;

use instant::{Duration, Instant};

use crate::{
    context::Context,
    data_structures::{
        obstacle::Dimensions,
        pose::ViewerPose,
    },
};

///
/// This is the Output Type for every lifecycle hook where the user can pass
/// mutations that are applied after the hook returns.
///
/// `Out::Configure` can be used to modify the Context during runtime, for
/// instance to change the tick cadence or the recycle threshold.
///
/// `Out::Mut` can be used to mutate the shared state once the hook has
/// released its borrow, e.g. to adjust the run state from inside a flow.
///
/// `Empty` is the default output used when nothing needs to be changed.
///
pub enum Out<S> {
    Configure(Box<dyn FnOnce(&mut Context)>),
    Mut(Box<dyn FnOnce(&mut S)>),
    Empty,
}

impl<S> Default for Out<S> {
    fn default() -> Self {
        Self::Empty
    }
}

/// A mesh transform for the host to mirror after a frame.
///
/// The game core never talks to the renderer directly; it hands out the
/// placements of its obstacles and the host applies them with its own mesh
/// primitives.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    pub name: &'a str,
    pub position: cgmath::Vector3<f32>,
    pub dimensions: Dimensions,
    pub material: &'a str,
}

/// Trait for implementing a frame-driven game flow.
///
/// An `ArFlow` manages a self-contained portion of the run: per-frame
/// animation, discrete game logic and host control events. The [`App`]
/// coordinates multiple flows, passes events to them, and composes their
/// placements.
///
/// # Lifecycle
///
/// 1. `on_init()` is called once when the app is created; configure the
///    context (tick cadence, thresholds, etc.)
/// 2. `on_update()` is called every frame with the elapsed time
/// 3. `on_tick()` is called every `tick_duration_millis` with the current
///    viewer pose, if tracking delivered one this frame
/// 4. `on_custom_events()` is called for host control events
/// 5. `on_render()` is called each frame and lists the placements to mirror
///
pub trait ArFlow<S, E> {
    /// Initialize the flow and configure the context.
    ///
    /// This is the only place to modify the Context directly; later changes
    /// go through [`Out::Configure`].
    fn on_init(&mut self, ctx: &mut Context, state: &mut S) -> Out<S>;

    /// Update state every frame.
    ///
    /// Called every frame with the elapsed time `dt`. Use for smooth
    /// animations that should not be quantized to the tick cadence.
    fn on_update(&mut self, ctx: &Context, state: &mut S, dt: Duration) -> Out<S>;

    /// Update state once per tick.
    ///
    /// Called every `tick_duration_millis` milliseconds (configurable via
    /// context) with the viewer pose the host obtained this frame. `None`
    /// means tracking dropped out; pose-dependent logic skips the tick.
    fn on_tick(&mut self, ctx: &Context, state: &mut S, pose: Option<&ViewerPose>) -> Out<S>;

    /// Handle host control events.
    ///
    /// Returns the event if it was not consumed, allowing it to be passed to
    /// the next flow. Returning `None` means the event was consumed.
    fn on_custom_events(&mut self, ctx: &Context, state: &mut S, event: E) -> Option<E>;

    /// Return the mesh placements for this flow.
    ///
    /// Called each frame after updates and ticks. The host applies the
    /// placements to its scene graph.
    fn on_render(&self) -> Vec<Placement<'_>>;
}

// Dummy impl to make wasm work
impl<State, Event> Debug for dyn ArFlow<State, Event> + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ArFlow")
    }
}

/// Application bundle: context, shared state, and the active flows.
///
/// The host render loop drives this once per rendered frame. There is no
/// internal parallelism; all flows run synchronously inside the same
/// callback.
pub struct App<State: 'static, Event: 'static> {
    ctx: Context,
    state: State,
    flows: Vec<Box<dyn ArFlow<State, Event>>>,
    last_time: Instant,
    time_since_tick: Duration,
}

impl<State, Event> App<State, Event>
where
    State: 'static + Default,
    Event: 'static,
{
    /// Create the app and run every flow's `on_init`.
    pub fn new(ctx: Context, flows: Vec<Box<dyn ArFlow<State, Event>>>) -> Self {
        let mut app = Self {
            ctx,
            state: State::default(),
            flows,
            last_time: Instant::now(),
            time_since_tick: Duration::from_millis(0),
        };
        let Self {
            ctx, state, flows, ..
        } = &mut app;
        for flow in flows.iter_mut() {
            let out = flow.on_init(ctx, state);
            handle_flow_output(ctx, state, out);
        }
        app
    }

    /// Advance one rendered frame.
    ///
    /// Runs `on_update` on every flow, fires `on_tick` when enough time has
    /// accumulated since the last tick and returns the placements the host
    /// should mirror this frame.
    pub fn frame(&mut self, pose: Option<ViewerPose>) -> Vec<Placement<'_>> {
        let dt = self.last_time.elapsed();
        self.last_time = Instant::now();
        self.time_since_tick += dt;

        let Self {
            ctx,
            state,
            flows,
            time_since_tick,
            ..
        } = self;

        for flow in flows.iter_mut() {
            let out = flow.on_update(ctx, state, dt);
            handle_flow_output(ctx, state, out);
        }

        if *time_since_tick >= Duration::from_millis(ctx.tick_duration_millis) {
            for flow in flows.iter_mut() {
                let out = flow.on_tick(ctx, state, pose.as_ref());
                handle_flow_output(ctx, state, out);
            }
            *time_since_tick = Duration::from_millis(0);
        }

        self.flows
            .iter()
            .flat_map(|flow| flow.on_render())
            .collect()
    }

    /// Distribute a host control event across the flows.
    pub fn custom_event(&mut self, event: Event) {
        let Self {
            ctx, state, flows, ..
        } = self;
        let result = flows
            .iter_mut()
            .fold(Some(event), |event, flow| {
                flow.on_custom_events(ctx, state, event?)
            });
        if result.is_some() {
            log::warn!("Warning! Custom event was not consumed this cycle");
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

fn handle_flow_output<State>(ctx: &mut Context, state: &mut State, out: Out<State>) {
    match out {
        Out::Configure(f) => f(ctx),
        Out::Mut(f) => f(state),
        Out::Empty => (),
    }
}

/// Initialize the platform logger. Call once before creating the [`App`].
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::UnwrapThrowExt;
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }
}
