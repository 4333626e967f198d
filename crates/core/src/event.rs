/// All messages (events) that can flow through the chart driver.
///
/// Sources:
/// - Update timer task       → `Tick`
/// - Host render loop        → `Rendered`
/// - Config watcher task     → `ConfigReloaded`
/// - Application teardown    → `Shutdown`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// One firing of the periodic update timer (1-second period by default).
    Tick,
    /// The host finished a render pass with the current options and series.
    ///
    /// This is what lets the driver observe the effect of its own output:
    /// a freeze, trim, or resume only advances once the previous render
    /// has actually been applied.
    Rendered,
    /// Compiled chart options were replaced (config live reload).
    ConfigReloaded,
    /// Graceful shutdown requested.  Produces no effects.
    Shutdown,
}

/// Side effects requested by a driver transition.
///
/// Every effect asks the host for exactly one re-render; the variants only
/// record *what* changed so a renderer can diff cheaply.  Options and series
/// are both re-supplied either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The options object changed (animation flag toggled or config reload).
    RenderOptions,
    /// The series data changed (append or trim).
    RenderSeries,
}
