use chart_core::{Effect, Message, Series};
use chart_options::ChartOptions;
use chart_signal::SignalReader;
use tracing::debug;

/// Where the driver currently is in its freeze/trim/resume cycle.
///
/// Derived from the pending flags rather than stored, so it can never drift
/// out of sync with them.  Exposed for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Normal operation: every tick appends one sample.
    Animating,
    /// The buffer doubled past the window; animation is off and the trim
    /// will be applied on the next observed render pass.
    FreezingForTrim,
    /// The trim has been applied; animation resumes on the next observed
    /// render pass.
    FrozenTrimmed,
}

/// The render driver: owns the window buffer and decides, tick by tick,
/// what the external renderer should redraw.
///
/// Updating the series while the renderer animates *and* the backing array
/// changes length past the window produces a visible flash, so the trim is
/// spread over renders with animation disabled: freeze, trim, resume, then
/// append the sample that could not be captured while frozen.  The driver
/// never talks to a renderer directly — it returns [`Effect`]s and relies
/// on the host to report each completed pass back as [`Message::Rendered`].
#[derive(Debug)]
pub struct FrequencyChart {
    series: Series,
    options: ChartOptions,
    latest: SignalReader,
    pending_trim: bool,
    pending_add: bool,
}

impl FrequencyChart {
    /// Build the widget from compiled options, a seed of recent readings
    /// (possibly empty) and the reading half of the signal cell.
    pub fn new(options: ChartOptions, seed: &[f64], latest: SignalReader) -> Self {
        Self {
            series: Series::initialize(seed, options.window()),
            options,
            latest,
            pending_trim: false,
            pending_add: false,
        }
    }

    /// Advance the state machine by one message and return the renders the
    /// host owes the chart.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Tick => self.on_tick(),
            Message::Rendered => self.on_rendered(),
            Message::ConfigReloaded => vec![Effect::RenderOptions],
            Message::Shutdown => Vec::new(),
        }
    }

    fn on_tick(&mut self) -> Vec<Effect> {
        let window = self.series.window();

        if self.series.len() > 2 * window {
            // This tick's reading is deliberately not captured; the
            // recovery append after resume re-reads the cell instead.
            self.pending_trim = true;
            self.options.set_animations(false);
            debug!(len = self.series.len(), "buffer doubled; freezing animation to trim");
            vec![Effect::RenderOptions]
        } else {
            self.series = self.series.append(self.latest.latest());
            vec![Effect::RenderSeries]
        }
    }

    fn on_rendered(&mut self) -> Vec<Effect> {
        if !self.options.animations_enabled() {
            if self.pending_trim {
                // Frozen render is on screen — safe to cut the buffer.
                self.pending_trim = false;
                self.series = self.series.trim();
                debug!(len = self.series.len(), "trimmed buffer to tail");
                vec![Effect::RenderSeries]
            } else {
                // Trimmed series is on screen — resume animation and owe
                // the append that was skipped while freezing.
                self.pending_add = true;
                self.options.set_animations(true);
                debug!("resuming animation");
                vec![Effect::RenderOptions]
            }
        } else if self.pending_add {
            self.pending_add = false;
            self.series = self.series.append(self.latest.latest());
            vec![Effect::RenderSeries]
        } else {
            Vec::new()
        }
    }

    /// Swap in freshly compiled options (config live reload).
    ///
    /// The animation flag and the window width are carried over from the
    /// running widget: the flag belongs to an in-flight freeze/trim cycle,
    /// and the window is fixed at construction because the buffer's
    /// positions are numbered against it.
    pub fn replace_options(&mut self, mut options: ChartOptions) {
        options.set_animations(self.options.animations_enabled());
        options.xaxis.range = self.series.window() as u32;
        self.options = options;
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        if self.pending_trim {
            Phase::FreezingForTrim
        } else if !self.options.animations_enabled() {
            Phase::FrozenTrimmed
        } else {
            Phase::Animating
        }
    }
}
