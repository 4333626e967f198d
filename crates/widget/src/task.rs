use crate::FrequencyChart;
use chart_core::{Effect, Message};
use chart_options::ChartOptions;
use chart_render::Renderer;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, trace};

/// Control commands for a running [`ChartTask`].
#[derive(Debug)]
pub enum Command {
    /// Swap in freshly compiled options (config live reload).
    Reload(ChartOptions),
    /// Stop the update timer and end the task.
    Shutdown,
}

/// A chart driver mounted on a periodic Tokio timer.
///
/// Dropping the handle unregisters the timer and ends the task, so the
/// widget cannot keep ticking past its owner on any exit path; call
/// [`ChartTask::shutdown`] instead to wind down gracefully.
#[derive(Debug)]
pub struct ChartTask {
    commands: mpsc::Sender<Command>,
    task: tokio::task::JoinHandle<()>,
}

impl ChartTask {
    /// Spawn the update loop: one [`Message::Tick`] per `tick` period, with
    /// control commands interleaved between ticks.
    pub fn spawn<R>(mut chart: FrequencyChart, mut renderer: R, tick: Duration) -> Self
    where
        R: Renderer + Send + 'static,
    {
        let (commands, mut rx) = mpsc::channel(4);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(tick);

            loop {
                tokio::select! {
                    _ = ticker.tick() => pump(&mut chart, &mut renderer, Message::Tick),
                    command = rx.recv() => match command {
                        Some(Command::Reload(options)) => {
                            chart.replace_options(options);
                            pump(&mut chart, &mut renderer, Message::ConfigReloaded);
                        }
                        Some(Command::Shutdown) | None => break,
                    },
                }
            }

            debug!("chart task stopped");
        });

        Self { commands, task }
    }

    /// Swap in freshly compiled options (config live reload).
    pub async fn reload(&self, options: ChartOptions) {
        let _ = self.commands.send(Command::Reload(options)).await;
    }

    /// Stop the driver and wait for the task to wind down.
    pub async fn shutdown(mut self) {
        let _ = self.commands.send(Command::Shutdown).await;
        let _ = (&mut self.task).await;
    }
}

impl Drop for ChartTask {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run one inbound message to quiescence.
///
/// Every effect is exactly one renderer pass, and every pass is reported
/// back as [`Message::Rendered`] so the driver can advance its
/// freeze/trim/resume sequence.  The cascade runs entirely inside the
/// current timer callback — a tick can never observe a half-applied trim.
fn pump<R: Renderer>(chart: &mut FrequencyChart, renderer: &mut R, message: Message) {
    let mut queue: VecDeque<Effect> = chart.update(message).into();

    while let Some(effect) = queue.pop_front() {
        trace!(?effect, phase = ?chart.phase(), "render pass");
        renderer.render(chart.options(), chart.series());
        queue.extend(chart.update(Message::Rendered));
    }
}
